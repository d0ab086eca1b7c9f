use alexicz::{router, AppState, Config};

use log::{info, LevelFilter};
use tokio::net::TcpListener;

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    let config = Config::load()?;
    init_logging(config.debug);

    let listen = config.listen.clone();
    let state = AppState::new(config)?;

    let listener = TcpListener::bind(&listen).await?;
    info!("Listening http://{listen}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_logging(debug: bool) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
