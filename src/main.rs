use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::process;

use vuemod_ls::lsp;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Language Server Protocol server (default)
    Server {
        /// Listen on a TCP port instead of stdio (useful for debugging)
        #[arg(long)]
        tcp: Option<u16>,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // stdout carries the LSP transport, logging must stay on stderr
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Some(Commands::Server { tcp: Some(port) }) => lsp::start_tcp_server(port).await,
        // Bare invocation serves stdio too, so editors can launch the
        // binary without arguments
        Some(Commands::Server { tcp: None }) | None => lsp::start_server().await,
    };

    if let Err(e) = result {
        log::error!("server error: {e}");
        process::exit(1);
    }
}
