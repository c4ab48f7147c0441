//! X-Ray trace server binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "xray-server", about = "Execution trace recorder HTTP server")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080, env = "XRAY_PORT")]
    port: u16,

    /// Log filter directive, e.g. `info` or `xray_store=debug`.
    #[arg(long, default_value = "info", env = "XRAY_LOG")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .init();

    xray_server::serve::start_server(args.port).await
}
