#[tokio::main]
async fn main() -> luperly::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("luperly=info,serenity=warn"),
    )
    .init();
    log::info!("Starting LuperlyAI Discord bot");

    match luperly::run().await {
        Ok(_) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {}", e);
            Err(e)
        }
    }
}
