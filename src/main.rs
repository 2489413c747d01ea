//! envseal - generate, validate and publish application secrets.

use clap::Parser;

use envseal::cli::output;
use envseal::cli::{execute, init_logging, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
