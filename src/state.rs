use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::{broadcast, RwLock};

use crate::config::Config;

/// Tells connected browsers to reload. Only fed in development.
pub type RefreshBroadcaster = broadcast::Sender<()>;

/// Process-wide state. Posts are deliberately absent: they are read from disk
/// on every request.
pub struct AppState {
    pub config: Arc<Config>,
    pub layout_html: RwLock<String>,
    /// Supports the `{{ path }}` placeholder.
    pub not_found_html: RwLock<String>,
}

impl AppState {
    pub fn new(config: Arc<Config>, layout_html: String, not_found_html: String) -> Self {
        AppState {
            config,
            layout_html: RwLock::new(layout_html),
            not_found_html: RwLock::new(not_found_html),
        }
    }

    pub async fn replace_templates(&self, layout_html: String, not_found_html: String) {
        *self.layout_html.write().await = layout_html;
        *self.not_found_html.write().await = not_found_html;
    }
}

#[derive(Clone)]
pub struct RouterState {
    pub app_state: Arc<AppState>,
    pub broadcaster: RefreshBroadcaster,
}

impl FromRef<RouterState> for Arc<AppState> {
    fn from_ref(router_state: &RouterState) -> Self {
        Arc::clone(&router_state.app_state)
    }
}

impl FromRef<RouterState> for RefreshBroadcaster {
    fn from_ref(router_state: &RouterState) -> Self {
        router_state.broadcaster.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn templates_are_swapped_together() {
        let state = AppState::new(Arc::new(Config::default()), "old".into(), "gone".into());
        state.replace_templates("new".into(), "missing {{ path }}".into()).await;
        assert_eq!(*state.layout_html.read().await, "new");
        assert_eq!(*state.not_found_html.read().await, "missing {{ path }}");
    }
}
