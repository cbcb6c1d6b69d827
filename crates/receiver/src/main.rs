use callback_receiver::{
    callback_core::{ReceiverConfig, RequireCode},
    CallbackServer,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let server = CallbackServer::bind(ReceiverConfig::default(), RequireCode).await?;
    server.serve().await?;

    Ok(())
}
