use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use farebox::config::{RuleChain, RuleToggles};
use farebox::report::FareReport;
use farebox::taplog::{load_tap_log, sample_taps};

const USAGE: &str = "usage: farebox [--json] [TAPLOG.json]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ if path.is_none() && !arg.starts_with('-') => path = Some(arg),
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        }
    }

    // Rule switches come from FAREBOX_* variables
    let toggles = match RuleToggles::from_env() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let taps = match &path {
        Some(p) => match load_tap_log(p) {
            Ok(taps) => taps,
            Err(e) => {
                eprintln!("Error: {p}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => sample_taps(),
    };

    let chain = RuleChain::standard(&toggles);
    let report = FareReport::build(&chain.engine(), &taps);

    if json {
        match report.to_json() {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Rules: {}", report.rules.join(", "));
    for entry in &report.entries {
        println!("{entry}");
    }
    println!();
    println!(
        "{} of {} computed fares match the charged amount",
        report.match_count(),
        report.len()
    );

    ExitCode::SUCCESS
}
