use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_site::{
    constants::START_TIME,
    cors,
    db::postgres::create_pool,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(config.is_production());

    tracing::info!("Loaded configuration: {:?}", config);
    once_cell::sync::Lazy::force(&START_TIME);

    let pool = create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to create content store connection pool")?;

    let server_addr = format!("{}:{}", config.host, config.port);
    let workers = config.worker_count.max(1);
    let app_state = web::Data::new(AppState::new(config, pool));

    tracing::info!(
        "Starting {} v{} on {} with {} workers",
        app_state.config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        workers
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(cors(&app_state.config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    tokio::select! {
        res = server => res.context("Server error")?,
        _ = shutdown_signal() => tracing::info!("Shutdown complete"),
    }

    Ok(())
}
