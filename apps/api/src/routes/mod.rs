pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::guidance::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Questionnaire & skills
        .route("/api/v1/questions", get(handlers::handle_get_questions))
        .route(
            "/api/v1/interest-analysis",
            post(handlers::handle_interest_analysis),
        )
        .route(
            "/api/v1/skill-assessment",
            post(handlers::handle_skill_assessment),
        )
        // Recommendations
        .route(
            "/api/v1/career-recommendations",
            post(handlers::handle_career_recommendations),
        )
        // Roadmap
        .route("/api/v1/tracks", get(handlers::handle_list_tracks))
        .route("/api/v1/roadmap", post(handlers::handle_generate_roadmap))
        .route(
            "/api/v1/roadmap/progress",
            post(handlers::handle_roadmap_progress),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}
