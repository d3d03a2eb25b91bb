mod db;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::catalog::PgCatalog;
use services::mail::{MailConfig, MailTransport, SmtpMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_config = db::DbConfig::from_env().expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&db_config)
        .await
        .expect("database init failed");

    // Mail is optional: count and catalog endpoints keep working without SMTP credentials.
    let mailer: Option<Arc<dyn MailTransport>> = match MailConfig::from_env() {
        Some(config) => {
            tracing::info!(host = %config.smtp_host, port = config.smtp_port, security = ?config.security(), user = %config.user, "SMTP mailer configured");
            Some(Arc::new(SmtpMailer::new(config)))
        }
        None => {
            tracing::warn!("EMAIL_USER / EMAIL_PASSWORD not set; sendEmail disabled");
            None
        }
    };

    let catalog = Arc::new(PgCatalog::new(pool));
    let state = state::AppState::new(catalog.clone(), catalog, mailer);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos site not configured; serving functions only");
            routes::app(state)
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "bookshelf functions listening");
    axum::serve(listener, app).await.expect("server failed");
}
