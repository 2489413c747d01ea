//! envseal-setup - create GitHub Actions secrets for a deployment.

use clap::Parser;

use envseal::cli::output;
use envseal::cli::setup::{execute, SetupArgs};

fn main() {
    let args = SetupArgs::parse();
    envseal::cli::init_logging(args.verbose);

    if let Err(e) = execute(args) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
