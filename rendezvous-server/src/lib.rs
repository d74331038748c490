pub mod room;
pub mod signaling;
pub mod store;

pub use room::*;
pub use signaling::*;
pub use store::*;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Shared state behind the WebSocket gateway.
pub struct AppState {
    pub signaling: SignalingService,
    pub endpoint: RegistrationEndpoint,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        registry_config: RegistryConfig,
        endpoint_config: EndpointConfig,
    ) -> Self {
        let signaling = SignalingService::new();
        let registry = RoomRegistry::new(store, registry_config);
        let endpoint =
            RegistrationEndpoint::new(registry, Arc::new(signaling.clone()), endpoint_config);

        Self {
            signaling,
            endpoint,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}
