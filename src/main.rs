use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    weathervane::run().await
}
