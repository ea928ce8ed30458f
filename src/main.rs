use telescope_output::cli::CliCommand;
use telescope_output::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging().expect("failed to initialize logging");

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("telescope-output error: {:#}", err);
        std::process::exit(1);
    }
}
