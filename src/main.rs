use staffdesk::api::{build_router, AppState};
use staffdesk::config::Config;
use staffdesk::database::Database;
use staffdesk::services::{AvailabilityService, CompanyClient, ReservationClient, RulesClient};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffdesk=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Arc::new(Database::connect(&config.database_url).await?);
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // Wire up sibling-service clients and the availability pipeline
    let company = CompanyClient::new(config.company.clone());
    let rules = RulesClient::new(config.rules.clone());
    let availability = AvailabilityService::new(db.clone(), db.clone(), company, rules);
    let reservations = ReservationClient::new(config.reservation_service_url.clone());

    let state = AppState {
        db,
        availability,
        reservations,
    };

    // Build router and start server
    let app = build_router(state);
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
