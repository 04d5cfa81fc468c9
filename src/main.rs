use clap::Parser;
use std::process;
use webpack_diff::cli::Cli;
use webpack_diff::cmd;

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.completions {
        Some(shell) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => cmd::cmd_compare(&cli.compare_args()),
    };

    if let Err(e) = result {
        use webpack_diff::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
