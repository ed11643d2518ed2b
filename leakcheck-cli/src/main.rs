use std::io::{self, BufRead};
use std::time::Duration;

use clap::Parser;
use leakcheck::{MAX_SCORE, RangeClient, score};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "leakcheck")]
#[command(about = "Check a password against the breach corpus without revealing it")]
struct Args {
    /// Password to check. Read from stdin when omitted, which keeps the
    /// password out of shell history.
    password: Option<String>,

    /// Base URL of the range endpoint
    #[arg(long, default_value = RangeClient::DEFAULT_BASE_URL)]
    base_url: String,

    /// Timeout for the range request, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Only print the breach verdict, not the strength score
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Lookup(#[from] leakcheck::Error),

    #[error("failed to read password from stdin: {0}")]
    Stdin(#[from] io::Error),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let password = match args.password {
        Some(password) => password,
        None => read_password_line()?,
    };

    debug!(base_url = %args.base_url, timeout_secs = args.timeout_secs, "starting lookup");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .expect("Failed to create HTTP client");
    let client = RangeClient::with_base_url(http, args.base_url);

    // The score is a local heuristic and does not depend on the lookup
    // succeeding, so print it before surfacing any lookup error.
    let strength = score(&password);
    let lookup = client.lookup(&password).await;

    if !args.quiet {
        println!("strength: {strength}/{MAX_SCORE}");
    }

    let result = lookup?;
    if result.found {
        println!(
            "LEAKED: seen {} times in the breach corpus - you should change this password",
            result.occurrences
        );
    } else {
        println!("NOT FOUND in the breach corpus");
    }

    Ok(())
}

/// Reads one line from stdin and strips the trailing newline.
fn read_password_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
