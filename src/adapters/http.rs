use crate::core::dashboard::{Dashboard, DashboardView};
use crate::domain::figure::ChartFigure;
use crate::domain::model::{ControlEvent, SelectionState};
use crate::utils::error::Result;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Body of `POST /api/events`: the client's current selection plus the
/// control change that just happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub state: SelectionState,
    pub event: ControlEvent,
}

pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/view", get(initial_view))
        .route("/api/events", post(handle_event))
        .route("/api/figure", get(figure))
        .with_state(dashboard)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

async fn initial_view(State(dashboard): State<Arc<Dashboard>>) -> Json<DashboardView> {
    tracing::debug!("Serving initial view");
    Json(dashboard.initial_view())
}

async fn handle_event(
    State(dashboard): State<Arc<Dashboard>>,
    Json(request): Json<EventRequest>,
) -> Json<DashboardView> {
    let view = dashboard.handle(&request.state, request.event);
    tracing::info!(
        "🔄 Re-rendered for make={} model={} ({} series)",
        view.state.make,
        view.state.model,
        view.figure.data.len()
    );
    Json(view)
}

async fn figure(
    State(dashboard): State<Arc<Dashboard>>,
    Query(selection): Query<SelectionState>,
) -> Json<ChartFigure> {
    tracing::debug!("Serving figure for {:?}", selection);
    Json(dashboard.figure(&selection))
}

/// 在已綁定的 listener 上提供服務，直到 `shutdown` 完成
pub async fn serve<F>(listener: TcpListener, dashboard: Arc<Dashboard>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;
    tracing::info!("🚀 Dashboard listening on http://{}", address);

    axum::serve(listener, router(dashboard))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("👋 Dashboard stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
