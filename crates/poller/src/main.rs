use homework_common::config::AppConfig;
use homework_notifier::{Notifier, TelegramTransport};
use homework_poller::client::PracticumClient;
use homework_poller::poller::{HomeworkPoller, PollState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "homework_poller=info,homework_notifier=info,homework_decoders=debug".into()
            }),
        )
        .json()
        .init();

    tracing::info!("Homework status bot starting...");

    // Load configuration
    let config = AppConfig::from_env()?;
    let credentials = config.credentials.clone();

    let http = reqwest::Client::builder().build()?;

    let api = PracticumClient::new(
        http.clone(),
        config.practicum_endpoint.clone(),
        credentials.practicum_token.clone(),
    );
    let transport = TelegramTransport::new(
        http,
        config.telegram_api_url.clone(),
        credentials.telegram_token.clone(),
    );
    let notifier = Notifier::new(transport, credentials.telegram_chat_id.clone());

    let poller = HomeworkPoller::new(api, notifier, credentials, config.retry_interval());
    let mut state = PollState::starting_now();

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        result = poller.run(&mut state) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Homework poller exited with error");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Homework status bot stopped.");
    Ok(())
}
