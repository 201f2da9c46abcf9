#![allow(dead_code)]

use bus_booking_system::build_rocket;
use bus_booking_system::config::AppConfig;
use bus_booking_system::db::Database;
use rocket::fairing::AdHoc;
use rocket::local::asynchronous::Client;
use sqlx::sqlite::SqlitePool as Pool;
use sqlx::Error;
use tokio::sync::oneshot;

#[derive(Debug)]
pub struct TestDb {
    pub pool: Pool,
}

impl TestDb {
    // Fresh in-memory database with the schema in place; every call is isolated
    pub async fn get_instance() -> Result<Pool, Error> {
        let db = Database::new("sqlite::memory:").await?;
        Ok(db.pool)
    }
}

// Rocket instance driven in-process; the tracked client keeps session cookies
pub async fn test_client() -> Client {
    let pool = TestDb::get_instance()
        .await
        .expect("Failed to get test database instance");

    Client::tracked(build_rocket(AppConfig::for_tests(), pool))
        .await
        .expect("valid rocket instance")
}

// Launch the full server on `port` and wait until it is accepting connections
pub async fn spawn_server(port: u16) -> String {
    let pool = TestDb::get_instance()
        .await
        .expect("Failed to get test database instance");

    let config = AppConfig {
        port,
        ..AppConfig::for_tests()
    };

    let (ready_tx, ready_rx) = oneshot::channel();
    let rocket = build_rocket(config, pool).attach(AdHoc::on_liftoff("test ready", |_| {
        Box::pin(async move {
            let _ = ready_tx.send(());
        })
    }));

    tokio::spawn(async move {
        if let Err(e) = rocket.launch().await {
            eprintln!("test server failed: {}", e);
        }
    });

    ready_rx.await.expect("server should lift off");
    format!("http://127.0.0.1:{}", port)
}
