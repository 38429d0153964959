//! Bistro kiosk binary entry point.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bistro-kiosk")]
#[command(about = "Terminal ordering kiosk for Bistro")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    bistro_kiosk::init_tracing(args.verbose);

    if let Err(e) = bistro_kiosk::run(args.config).await {
        tracing::error!(error = %e, "kiosk failed");
        eprintln!("bistro-kiosk: {}", e);
        std::process::exit(1);
    }
}
