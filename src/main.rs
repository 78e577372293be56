//! Wiring & DI. Entry point: bootstrap adapters, inject into the service, run UI.
//! No business logic here.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use campus_sched::adapters::api::{DemoScheduleGateway, HttpScheduleGateway};
use campus_sched::adapters::persistence::FavoritesJson;
use campus_sched::adapters::ui::tui::TuiInputPort;
use campus_sched::ports::{FavoritesPort, InputPort, ScheduleGateway};
use campus_sched::shared::config::AppConfig;
use campus_sched::usecases::{ScheduleService, SharedSelection};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    campus_sched::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    tokio::fs::create_dir_all(&data_path)
        .await
        .map_err(|e| anyhow::anyhow!("create data dir: {}", e))?;

    // --- Favorites store (JSON file, durable across restarts) ---
    let favorites_store = FavoritesJson::new(data_path.join("favorites.json"));
    favorites_store
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let favorites: Arc<dyn FavoritesPort> = Arc::new(favorites_store);

    // --- Schedule gateway: real API when configured, demo otherwise ---
    let gateway: Arc<dyn ScheduleGateway> = if cfg.is_api_configured() {
        let base_url = cfg.api_base_url.clone().unwrap_or_default();
        info!(url = %base_url, "schedule API configured");
        let timeout = Duration::from_secs(cfg.http_timeout_secs_or_default());
        Arc::new(
            HttpScheduleGateway::new(&base_url, timeout)
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        warn!("CAMPUS_SCHED_API_BASE_URL not set, using demo gateway");
        Arc::new(DemoScheduleGateway::with_delay(
            cfg.demo_delay_ms_or_default(),
        ))
    };

    // --- Shared selection holder + coordinator ---
    let selection = SharedSelection::new();
    let service = Arc::new(ScheduleService::new(gateway, favorites, selection.clone()));

    // Bridge: selections published by any screen are replayed into the
    // coordinator; its own publishes are filtered out by the dedupe guard.
    {
        let service = Arc::clone(&service);
        let mut rx = selection.subscribe();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let name = rx.borrow_and_update().clone();
                if let Some(name) = name {
                    if let Err(e) = service.on_external_selection_changed(&name).await {
                        warn!(error = %e, "selection replay failed");
                    }
                }
            }
        });
    }

    // --- Run (main menu -> schedule / group picker / favorites) ---
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&service),
        selection.clone(),
        cfg.group.clone(),
    ));
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
