use std::process::ExitCode;

use clap::Parser;
use log::info;

use rusty_resample::cli::{report_parse_error, Cli};
use rusty_resample::pipeline;

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(&err),
    };

    match pipeline::run(&cli) {
        Ok(summary) => {
            info!(
                "Done: {} rows in, {} rows out, {} columns",
                summary.input_rows, summary.output_rows, summary.columns
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", anyhow::Error::from(err));
            ExitCode::FAILURE
        }
    }
}
