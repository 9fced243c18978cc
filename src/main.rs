use std::net::SocketAddr;

use chrono::{Datelike, Local};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_backend::api::router;
use roster_backend::models::YearMonth;
use roster_backend::services::{RosterState, demo};
use roster_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "roster_backend=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let now = Local::now();
    let month = YearMonth::new(i64::from(now.year()), i64::from(now.month0()))
        .ok_or("current month is outside the supported calendar range")?;

    let mut roster = RosterState::with_thread_rng(month);
    if env_flag("ROSTER_DEMO") {
        demo::seed(&mut roster);
    }
    let state = AppState::new(roster);

    let app = router(state);

    let port: u16 = std::env::var("ROSTER_PORT")
        .ok()
        .map(|value| value.parse())
        .transpose()?
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn env_flag(name: &str) -> bool {
    matches!(
        std::env::var(name).ok().as_deref(),
        Some("1") | Some("true")
    )
}
