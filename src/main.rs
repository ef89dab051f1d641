mod cli;
mod logging;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and dispatch.
    match Cli::run_from_args() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("urlrec error: {:#}", err);
            std::process::exit(2);
        }
    }
}
