//! Manga Translator API Tester - exercises the translator's HTTP endpoints
//!
//! Runs health, queue, results and translation checks against a running
//! server and reports pass/fail per check.

use clap::Parser;
use manga_api_tester::cli;
use manga_api_tester::commands::TestArgs;
use manga_api_tester::common::logging;

#[derive(Parser)]
#[command(
    name = "manga-api-tester",
    about = "Manga Image Translator API testing tool"
)]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: TestArgs,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    let strict = cli.args.strict;

    match cli::dispatch(cli.args).await {
        Ok(passed) => {
            if strict && !passed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
