use clap::Parser;

/// Threshold values stay raw strings here; they are resolved to floats
/// by the configuration step so that a bad value maps to UNKNOWN
/// instead of a clap usage error.
#[derive(Parser, Debug)]
#[command(name = "check_graylog", about = "Nagios check for Graylog cluster health", disable_version_flag = true)]
pub struct Cli {
    /// Graylog API URL
    #[arg(short = 'l', long = "url", default_value = "http://localhost:12900")]
    pub url: String,

    /// API username
    #[arg(short = 'u', long = "user")]
    pub user: Option<String>,

    /// API password
    #[arg(short = 'p', long = "password")]
    pub password: Option<String>,

    /// Index error warning limit (optional)
    #[arg(short = 'w', long = "index-warn", value_name = "FLOAT")]
    pub index_warn: Option<String>,

    /// Index error critical limit (optional)
    #[arg(short = 'c', long = "index-crit", value_name = "FLOAT")]
    pub index_crit: Option<String>,

    /// Uncommited journal entries critical threshold (optional)
    #[arg(long = "uc", value_name = "FLOAT")]
    pub uncommitted_crit: Option<String>,

    /// Process buffer time critical threshold in seconds (optional)
    #[arg(long = "pbtc", value_name = "FLOAT")]
    pub process_buffer_time_crit: Option<String>,

    /// Input buffer rate below critical threshold in events/second (optional)
    #[arg(long = "ibc", value_name = "FLOAT")]
    pub input_buffer_crit: Option<String>,

    /// Set request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Display version and license information
    #[arg(long)]
    pub version: bool,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[cfg(test)]
mod test_cli {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Cli::parse_from(["check_graylog", "-u", "admin", "-p", "secret"]);
        assert_eq!(args.url, "http://localhost:12900");
        assert_eq!(args.timeout, 10);
        assert!(args.index_warn.is_none());
        assert!(!args.version);
    }

    #[test]
    fn test_thresholds_are_raw_strings() {
        let args = Cli::parse_from([
            "check_graylog",
            "-u",
            "admin",
            "-p",
            "secret",
            "-w",
            "10",
            "-c",
            "100",
            "--uc",
            "1000",
            "--pbtc",
            "5",
            "--ibc",
            "10",
        ]);
        assert_eq!(args.index_warn.as_deref(), Some("10"));
        assert_eq!(args.index_crit.as_deref(), Some("100"));
        assert_eq!(args.uncommitted_crit.as_deref(), Some("1000"));
        assert_eq!(args.process_buffer_time_crit.as_deref(), Some("5"));
        assert_eq!(args.input_buffer_crit.as_deref(), Some("10"));
    }

    #[test]
    fn test_credentials_are_optional_at_parse_time() {
        let args = Cli::parse_from(["check_graylog", "--version"]);
        assert!(args.version);
        assert!(args.user.is_none());
        assert!(args.password.is_none());
    }
}
