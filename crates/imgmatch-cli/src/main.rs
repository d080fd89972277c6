use imgmatch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Logs go to the state dir; stdout is reserved for matched pairs.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("imgmatch error: {:#}", err);
        std::process::exit(1);
    }
}
