mod catalogue;
mod config;
mod contact;
mod content_loader;
mod error;
mod feeds;
mod hot_reload;
mod markdown;
mod models;
mod pages;
mod routes;
mod state;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::{net::TcpListener, sync::broadcast};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::content_loader::load_templates;
use crate::state::{AppState, RouterState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load site configuration")?;
    info!(
        site_url = %config.site_url,
        content_dir = %config.content_dir.display(),
        development = config.is_development,
        "configuration loaded"
    );

    let (layout_html, not_found_html) = load_templates(&config.content_dir).await;
    let port = config.port;
    let is_development = config.is_development;
    let state = Arc::new(AppState::new(Arc::new(config), layout_html, not_found_html));

    let (tx, _rx) = broadcast::channel(1);
    if is_development {
        info!("Hot reload enabled. Check logs for file change events.");
        hot_reload::start_content_watcher(tx.clone(), state.clone());
    }

    let app = routes::app(RouterState {
        app_state: state,
        broadcaster: tx,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "listening");
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
