// --- File: crates/services/reservo_backend/src/app.rs ---
use axum::{routing::get, Json, Router};
use reservo_common::ReservoError;
use reservo_config::AppConfig;
use reservo_reservation::{routes as reservation_routes, ScheduleData};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Assembles the full application router under the `/api` prefix.
pub fn build_router(
    config: Arc<AppConfig>,
    schedule: Arc<ScheduleData>,
) -> Result<Router, ReservoError> {
    let reservation_router = reservation_routes(config, schedule)?;

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Reservo API!" }))
        .route("/health", get(health))
        .merge(reservation_router);

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use reservo_reservation::doc::ReservationApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Reservo API",
                version = "0.1.0",
                description = "Bookable timeslot service",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(ReservationApiDoc::openapi());
        tracing::info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    Ok(app.layer(TraceLayer::new_for_http()))
}
