use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    shopsense::run().await
}
