mod doc;
mod dtos;
mod routes;
mod utils;

use crate::doc::ApiDoc;
use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let app = Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/rooms", get(routes::rooms::get_rooms))
        .route(
            "/rooms/{id}/schedules",
            get(routes::rooms::get_room_schedules),
        )
        .route(
            "/rooms/{id}/availability",
            get(routes::rooms::get_room_availability),
        )
        .route(
            "/courses/{id}/timetable",
            post(routes::timetable::generate_timetable),
        )
        .route(
            "/courses/{id}/schedules",
            post(routes::schedules::create_schedule),
        )
        .route(
            "/schedules/conflicts",
            post(routes::schedules::check_conflicts),
        )
        .route(
            "/teachers/{id}/courses",
            get(routes::courses::get_teacher_courses),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind listener");
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}
