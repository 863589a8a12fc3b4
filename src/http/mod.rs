//! HTTP transport for the payroll service, built on axum.
//!
//! ## Routes
//!
//! - `GET /` - public entry point with links to the collections.
//! - `GET /user` - the authenticated caller.
//! - `/orders/...`, `/employees/...` - see [`routes`].
//!
//! Everything except `/` passes through [`auth::require_principal`]. Failures
//! are rendered by [`ApiError`] as problem documents.
//!
//! ## Example
//!
//! ```ignore
//! let app = system.router();
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! http::serve(listener, app, async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

pub mod auth;
pub mod error;
pub mod representation;
pub mod routes;

pub use error::ApiError;

use crate::clients::{EmployeeClient, OrderClient};
use crate::model::{Employee, Order};
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Json, Router};
use resource_framework::{Authorizer, Principal};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::info;

/// Everything the router needs from the running system.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub employees: EmployeeClient,
    pub authorizer: Arc<dyn Authorizer>,
    pub base_url: Arc<str>,
}

/// Build the axum `Router` for the whole service.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/user", get(user))
        .merge(routes::resource_routes::<Order, _>(state.orders))
        .merge(routes::resource_routes::<Employee, _>(state.employees))
        .route_layer(middleware::from_fn_with_state(
            state.authorizer,
            auth::require_principal,
        ));

    Router::new()
        .route("/", get(index))
        .with_state(state.base_url)
        .merge(protected)
        .layer(middleware::from_fn(log_request))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// `GET /` - links to everything a client can explore.
async fn index(State(base_url): State<Arc<str>>) -> Json<Value> {
    Json(json!({
        "_links": {
            "self": { "href": format!("{base_url}/") },
            "orders": { "href": format!("{base_url}/orders") },
            "employees": { "href": format!("{base_url}/employees") },
            "user": { "href": format!("{base_url}/user") },
        }
    }))
}

/// `GET /user` - returns `{ "name": ..., "organizations": [...] }`.
async fn user(Extension(principal): Extension<Principal>) -> Json<Value> {
    Json(json!({
        "name": principal.name,
        "organizations": principal.organizations,
    }))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}
