use crate::docs::openapi::ApiDoc;
use crate::handlers;
use crate::middleware::{metrics::record_metrics, trace_root::trace_root};
use crate::service::Service;
use axum::{middleware::from_fn, routing::get, Router};

use tower_http::trace::TraceLayer;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

fn todo_routes() -> OpenApiRouter<Service> {
    OpenApiRouter::new()
        .route(
            "/",
            get(handlers::todo::get_all).post(handlers::todo::create),
        )
        .route("/{todo_id}", get(handlers::todo::get))
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service) -> Router {
    let app_router = OpenApiRouter::new()
        .nest("/todos", todo_routes())
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(from_fn(record_metrics))
        .layer(from_fn(trace_root))
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(app_router)
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
