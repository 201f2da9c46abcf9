use bus_booking_system::build_rocket;
use bus_booking_system::config::AppConfig;
use bus_booking_system::db::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bus_booking_system=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(port = config.port, "starting bus booking service");

    // Connect to the database
    let db = Database::new(&config.database_url).await?;

    let _rocket = build_rocket(config, db.pool).launch().await?;
    Ok(())
}
