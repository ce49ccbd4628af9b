use clap::Parser;
use voyage::cli::commands::{Cli, Commands};
use voyage::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => {
            // Init is handled before workspace discovery
            if let Err(e) = handlers::cmd_init(args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        _ => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
