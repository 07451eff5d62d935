use std::time::Duration;

use clap::{CommandFactory, Parser};

use check_graylog::checking::{Outcome, PerfData};
use check_graylog::checks::{parse_threshold, Thresholds};
use check_graylog::cli::Cli;
use check_graylog::http;
use check_graylog::output::Output;
use check_graylog::runner::{collect_check, CheckConfig};
use check_graylog::DEBUG_ENV;

const LICENSE: &str = "BSD";
const COPYRIGHT: &str = "\u{00A9}";
const YEAR: &str = "2016 - 2018";
const AUTHOR: &str = "Antonino Catinello";
const CONTRIBUTORS: &str = "kahluagenie, theherodied, mruediger";

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if args.version {
        println!(
            "Version: {} License: {} {} {} {}\nContributers: {}",
            env!("CARGO_PKG_VERSION"),
            LICENSE,
            COPYRIGHT,
            YEAR,
            AUTHOR,
            CONTRIBUTORS
        );
        std::process::exit(3);
    }

    let (Some(user), Some(password)) = (args.user.clone(), args.password.clone()) else {
        println!("API username and password are mandatory.");
        let _ = Cli::command().print_help();
        std::process::exit(3);
    };

    let thresholds = match resolve_thresholds(&args) {
        Ok(thresholds) => thresholds,
        Err(outcome) => report(outcome, PerfData::default()),
    };

    let base_url = match http::normalize_base_url(&args.url) {
        Ok(base_url) => base_url,
        Err(err) => report(Outcome::unknown(err.to_string()), PerfData::default()),
    };

    let debug = std::env::var(DEBUG_ENV).is_ok_and(|value| !value.is_empty());
    let config = CheckConfig {
        base_url,
        user,
        password,
        timeout: Duration::from_secs(args.timeout),
        debug,
    };

    let (outcome, perfdata) = collect_check(config, thresholds).await;
    report(outcome, perfdata)
}

fn resolve_thresholds(args: &Cli) -> Result<Thresholds, Outcome> {
    Ok(Thresholds {
        index_warn: parse_threshold(args.index_warn.as_deref(), "index warning error")?,
        index_crit: parse_threshold(args.index_crit.as_deref(), "index critical error")?,
        uncommitted_crit: parse_threshold(
            args.uncommitted_crit.as_deref(),
            "uncommited critical error",
        )?,
        process_buffer_time_crit: parse_threshold(
            args.process_buffer_time_crit.as_deref(),
            "process buffer time critical",
        )?,
        input_buffer_crit: parse_threshold(
            args.input_buffer_crit.as_deref(),
            "input buffer critical",
        )?,
    })
}

/// The sole place that writes the status line and exits.
fn report(outcome: Outcome, perfdata: PerfData) -> ! {
    let output = Output::new(outcome, perfdata);
    println!("{output}");
    std::process::exit(output.state().into());
}
