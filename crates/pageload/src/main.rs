//! Pageload - prints the loading events a page load produces
//!
//! Usage: pageload [OPTIONS] <url> [error-code]

use std::env;
use std::process::ExitCode;

use log::{info, warn};
use url::Url;

use pageload_core::{EngineErrorDomain, LoadStatus, LoadingInfo, LoadingObservers, NetError};
use pageload_net::codes;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Accepted range for positive error codes
const HTTP_STATUS_RANGE: std::ops::RangeInclusive<i32> = 100..=599;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "--help" | "-h" => {
            print_usage(&args[0]);
            return ExitCode::SUCCESS;
        }
        "--version" | "-V" => {
            println!("Pageload {}", VERSION);
            return ExitCode::SUCCESS;
        }
        "--stop" => {
            if args.len() < 3 {
                eprintln!("Usage: {} --stop <URL>", args[0]);
                return ExitCode::FAILURE;
            }
            run_stopped(&args[2])
        }
        url_str => run_load(url_str, args.get(2).map(String::as_str)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Pageload {} - loading status events for a page load

USAGE:
    {} [OPTIONS] <URL> [ERROR-CODE]

ERROR-CODE:
    0 or omitted      The load succeeds
    100 to 599        HTTP response status
    negative          Net error code (e.g. -105 for ERR_NAME_NOT_RESOLVED)

OPTIONS:
    -h, --help        Print this help message
    -V, --version     Print version information
    --stop <URL>      Stop the load after it starts

EXAMPLES:
    {} https://example.com
    {} https://example.com/missing 404
    {} https://example.invalid -105

"#,
        VERSION, program, program, program, program
    );
}

/// Observers that print every event as a JSON line
fn printing_observers() -> LoadingObservers {
    let mut observers = LoadingObservers::new();
    observers.add(|info: &LoadingInfo| match serde_json::to_string(info) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("Could not serialize loading info: {}", e),
    });
    observers
}

fn parse_url(url_str: &str) -> Result<Url, String> {
    Url::parse(url_str).map_err(|e| NetError::from(e).to_string())
}

/// Start a load and finish it according to `error_code`
fn run_load(url_str: &str, error_code: Option<&str>) -> Result<(), String> {
    let url = parse_url(url_str)?;
    let code = match error_code {
        Some(raw) => parse_error_code(raw)?,
        None => codes::OK,
    };

    let observers = printing_observers();
    observers.notify(&LoadingInfo::started(url.clone()));

    let finished = finish_load(url, code);
    info!(
        "Load {}: code {} in domain {}",
        finished.status(),
        finished.error_code(),
        finished.error_domain()
    );
    observers.notify(&finished);
    Ok(())
}

/// Parse an error code argument; positive codes must be HTTP statuses
fn parse_error_code(raw: &str) -> Result<i32, String> {
    let code = raw
        .parse::<i32>()
        .map_err(|e| format!("Invalid error code '{}': {}", raw, e))?;
    if code > 0 && !HTTP_STATUS_RANGE.contains(&code) {
        return Err(format!(
            "Invalid error code '{}': HTTP status must be within {}..={}",
            raw,
            HTTP_STATUS_RANGE.start(),
            HTTP_STATUS_RANGE.end()
        ));
    }
    Ok(code)
}

fn finish_load(url: Url, code: i32) -> LoadingInfo {
    if code == codes::OK {
        return LoadingInfo::succeeded(url);
    }

    if code > 0 {
        if (200..400).contains(&code) {
            return LoadingInfo::from_engine(
                url,
                LoadStatus::Succeeded,
                false,
                String::new(),
                code,
                EngineErrorDomain::HttpStatusCode,
            );
        }
        return match u16::try_from(code) {
            Ok(status) => LoadingInfo::failed(url, &NetError::HttpStatus { status }, true),
            Err(_) => LoadingInfo::from_engine(
                url,
                LoadStatus::Failed,
                true,
                format!("HTTP status {}", code),
                code,
                EngineErrorDomain::HttpStatusCode,
            ),
        };
    }

    let error_string = match codes::error_name(code) {
        Some(name) => format!("net::{}", name),
        None => format!("net error {}", code),
    };
    LoadingInfo::from_engine(
        url,
        LoadStatus::Failed,
        true,
        error_string,
        code,
        EngineErrorDomain::from_error_code(code),
    )
}

/// Start a load and stop it before it completes
fn run_stopped(url_str: &str) -> Result<(), String> {
    let url = parse_url(url_str)?;

    let observers = printing_observers();
    observers.notify(&LoadingInfo::started(url.clone()));
    observers.notify(&LoadingInfo::stopped(url));
    Ok(())
}
