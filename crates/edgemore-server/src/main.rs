use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use edgemore_mail::config::SmtpConfig;
use edgemore_mail::mailer::SmtpMailer;
use edgemore_server::config::ServerConfig;
use edgemore_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for the hosting platform's log drain
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let server = ServerConfig::from_env()?;
    let smtp = SmtpConfig::from_env()?;
    if smtp.host.is_empty() || smtp.recipient.is_empty() {
        tracing::warn!("SMTP_HOST or SEND_TO_EMAIL is unset; estimate emails will fail");
    }

    let state = AppState::new(SmtpMailer::new(smtp));
    let app = edgemore_server::router(state);

    let listener = TcpListener::bind(server.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
