// react-tailwind-template
// Main CLI entry point

use clap::Parser;
use std::panic;
use std::process;
use react_tailwind_template::cli::{Cli, CliDispatcher};
use react_tailwind_template::utils::error::UserError;
use react_tailwind_template::utils::logging::init_logging;
use react_tailwind_template::utils::output;

/// Any unexpected fault still exits with 1
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        output::error("Unexpected error:");
        original_hook(panic_info);
        process::exit(1);
    }));
}

#[tokio::main]
async fn main() {
    init_logging();
    install_panic_hook();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout and exit 0
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    let result = CliDispatcher::execute(cli).await;

    if let Err(err) = result {
        tracing::debug!(error = ?err, "initialization failed");
        let user_error = UserError::from_init_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
