mod cli;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let outcome = cli::run(cli);
    if let Err(e) = &outcome {
        eprintln!("Error: {}", e);
    }
    std::process::exit(cli::exit_code(&outcome));
}
