#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    apikey_auth::server::run().await
}
