use duel_client::run_with_config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Delegate to the client framework entry point.
    run_with_config().await
}
