use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use reel_kitchen_api::{
    api::{create_router, AppState},
    cache::{create_redis_client, CacheWriterHandle, MemoryCache, RecipeCache, RedisCache},
    config::Config,
    services::{
        generators::{DraftTemplateGenerator, StockFootageRenderer},
        seed::spawn_initial_feed,
        GenerationPipeline,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reel_kitchen_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let (cache, cache_writer): (Arc<dyn RecipeCache>, Option<CacheWriterHandle>) =
        match &config.redis_url {
            Some(url) => {
                let (cache, handle) = RedisCache::new(create_redis_client(url)?);
                (Arc::new(cache), Some(handle))
            }
            None => (Arc::new(MemoryCache::new()), None),
        };
    tracing::info!(backend = cache.name(), "Draft cache ready");

    let pipeline = Arc::new(GenerationPipeline::new(
        Arc::new(DraftTemplateGenerator::new(config.generation_delay())),
        Arc::new(StockFootageRenderer::default()),
        cache,
        config.recipe_cache_ttl_secs,
    ));

    let state = AppState::new(pipeline);
    if config.seed_initial_feed {
        spawn_initial_feed(state.clone());
    }

    let app = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_writer {
        handle.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
