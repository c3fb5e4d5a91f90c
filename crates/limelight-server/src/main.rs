use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use limelight_db::Database;
use limelight_mailer::Mailer;
use limelight_web::AppStateInner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "limelight=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("LIMELIGHT_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("LIMELIGHT_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let db_path = std::env::var("LIMELIGHT_DB_PATH").unwrap_or_else(|_| "limelight.db".into());
    let public_dir: PathBuf = std::env::var("LIMELIGHT_PUBLIC_DIR")
        .unwrap_or_else(|_| "public".into())
        .into();

    // Init database
    let db = Database::open(&PathBuf::from(&db_path))?;

    // Mailer runs disabled when SMTP credentials are absent; submissions are
    // still recorded, confirmations are just logged.
    let mailer = match (
        std::env::var("SMTP_HOST"),
        std::env::var("SMTP_USER"),
        std::env::var("SMTP_PASS"),
    ) {
        (Ok(smtp_host), Ok(user), Ok(pass)) => {
            let operator = std::env::var("OPERATOR_EMAIL").ok();
            Mailer::smtp(&smtp_host, &user, &pass, operator.as_deref())?
        }
        _ => {
            warn!("SMTP_HOST/SMTP_USER/SMTP_PASS not set, outbound mail disabled");
            Mailer::disabled()
        }
    };

    // Shared state
    let state = Arc::new(AppStateInner { db, mailer });

    let app = limelight_web::router(state)
        .fallback_service(ServeDir::new(&public_dir))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Limelight listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
