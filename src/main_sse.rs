// src/main_sse.rs
use clap::Parser;
use mcp_stub_server::{logging, start_sse, ServerConfig};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    config.validate()?;
    logging::init(&config.log_filter);

    start_sse(config).await?;
    Ok(())
}
