use crate::{
    adapters::{http::app_state::AppState, persistence::memory::InMemoryWaitlistStore},
    infra::{
        InfraError,
        config::{AppConfig, StorageBackend},
        postgres_persistence,
    },
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env();
    build_app_state(config).await
}

/// Wire use cases over the store chosen by `config`.
pub async fn build_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let waitlist_repo = select_waitlist_store(&config).await?;

    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

/// Pick the waitlist store for the lifetime of the process.
pub async fn select_waitlist_store(
    config: &AppConfig,
) -> Result<Arc<dyn WaitlistRepo>, InfraError> {
    let repo: Arc<dyn WaitlistRepo> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory waitlist store; entries are lost on restart");
            Arc::new(InMemoryWaitlistStore::new())
        }
        StorageBackend::Database => Arc::new(postgres_persistence(config).await?),
    };

    info!(backend = %config.storage_backend, "Waitlist store selected");
    Ok(repo)
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped if the file can't be created
    let json_layer = match File::create("app.log") {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(err) => {
            eprintln!("cannot create app.log, file logging disabled: {err}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
