pub mod checking;
pub mod checks;
pub mod cli;
pub mod http;
pub mod output;
pub mod runner;

/// Debug output is enabled by exporting this variable non-empty,
/// e.g. `export NCG2=debug`.
pub const DEBUG_ENV: &str = "NCG2";
