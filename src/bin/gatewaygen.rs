use clap::Parser;
use gatewaygen::cli::{run_cli, Cli};
use gatewaygen::logging::{init_logging, LogConfig};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&LogConfig::from_env()) {
        eprintln!("warning: {err:#}");
    }
    if let Err(err) = run_cli(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
