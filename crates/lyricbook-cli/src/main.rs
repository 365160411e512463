//! lyricbook - Import and export a lyric study catalog as CSV/TSV
//!
//! Usage:
//!   lyricbook <command> [options]
//!   lyricbook --help       Show help

use tracing_subscriber::EnvFilter;

mod cli;
mod store;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        cli::print_help();
        return Ok(());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("lyricbook {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging();

    match cli::parse_args(&args) {
        Ok((command, options)) => cli::run(command, options),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            cli::print_help();
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    // Logs go to stderr so stdout stays clean for --json output
    let filter = EnvFilter::try_from_env("LYRICBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
