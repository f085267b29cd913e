use anyhow::Result;
use notifyserver::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
