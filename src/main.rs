use std::sync::Arc;

use homework_notifier::config::Config;
use homework_notifier::services::monitor::MonitorEngine;
use homework_notifier::services::practicum::PracticumClient;
use homework_notifier::services::telegram::{Notifier, TelegramClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_notifier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing credentials are the only fatal condition; everything after
    // this point is reported and survived
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Startup aborted: {}", e);
            std::process::exit(1);
        }
    };

    let bot = Arc::new(TelegramClient::new(
        config.telegram_token.clone(),
        config.http_timeout(),
    ));
    let notifier = Notifier::new(bot, config.telegram_chat_id.clone());

    tracing::info!("Bot starting");
    if let Err(e) = notifier.notify("Bot started").await {
        tracing::error!("Startup notification failed: {}", e);
    }

    let api = Arc::new(PracticumClient::new(
        config.practicum_token.clone(),
        config.endpoint.clone(),
        config.http_timeout(),
    ));

    let mut engine = MonitorEngine::new(api, notifier, config.poll_interval());
    engine.run().await;
}
