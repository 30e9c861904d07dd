use axum::{extract::State, Json};
use chrono::Utc;
use guidance_engine::questionnaire::{
    compute_interests, questionnaire_progress, validate_answers, AnswerProgress, Answers,
    InterestVector, Question,
};
use guidance_engine::roadmap::{
    filter_phase, find_track, generate_roadmap, motivational_message, roadmap_progress,
    TOTAL_DAYS,
};
use guidance_engine::skills::{aggregate_skills, parse_ratings, SkillProfile};
use guidance_engine::{EngineConfig, EngineError};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::guidance::models::{
    CareerRecommendationsRequest, CareerRecommendationsResponse, InterestAnalysisRequest,
    InterestAnalysisResponse, RecommendationView, RoadmapProgressRequest,
    RoadmapProgressResponse, RoadmapRequest, RoadmapResponse, SkillAssessmentRequest,
    TrackSummary,
};
use crate::state::AppState;

/// GET /api/v1/questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.engine.questions().to_vec())
}

/// POST /api/v1/interest-analysis
pub async fn handle_interest_analysis(
    State(state): State<AppState>,
    Json(req): Json<InterestAnalysisRequest>,
) -> Result<Json<InterestAnalysisResponse>, AppError> {
    let (interests, progress) = analyze_answers(&state.engine, &req.answers)?;
    Ok(Json(InterestAnalysisResponse {
        interests,
        progress,
    }))
}

/// POST /api/v1/skill-assessment
pub async fn handle_skill_assessment(
    State(state): State<AppState>,
    Json(req): Json<SkillAssessmentRequest>,
) -> Result<Json<SkillProfile>, AppError> {
    Ok(Json(assess_skills(&state.engine, req)?))
}

/// POST /api/v1/career-recommendations
pub async fn handle_career_recommendations(
    State(state): State<AppState>,
    Json(req): Json<CareerRecommendationsRequest>,
) -> Result<Json<CareerRecommendationsResponse>, AppError> {
    let (interests, _) = analyze_answers(&state.engine, &req.answers)?;
    let skills = assess_skills(&state.engine, req.skills)?;

    let recommendations = state
        .ranker
        .rank(&interests, &skills.skill_vector(), state.engine.careers())?;

    info!(
        backend = state.ranker.backend(),
        top = recommendations.first().map(|r| r.role.as_str()).unwrap_or(""),
        "career recommendations ranked"
    );

    Ok(Json(CareerRecommendationsResponse {
        backend: state.ranker.backend(),
        catalog_version: state.engine.catalog_version().to_string(),
        interests,
        skills,
        recommendations: recommendations
            .into_iter()
            .map(RecommendationView::from)
            .collect(),
    }))
}

/// GET /api/v1/tracks
pub async fn handle_list_tracks(State(state): State<AppState>) -> Json<Vec<TrackSummary>> {
    Json(
        state
            .engine
            .tracks()
            .iter()
            .map(|t| TrackSummary {
                name: t.name.clone(),
                display_name: t.display_name.clone(),
                overview: t.overview.clone(),
            })
            .collect(),
    )
}

/// POST /api/v1/roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(req): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let track_name = req
        .track
        .as_deref()
        .unwrap_or(state.config.default_track.as_str());
    let track = find_track(state.engine.tracks(), track_name)?;

    // The engine has no clock; the service supplies today.
    let start_date = req.start_date.unwrap_or_else(|| Utc::now().date_naive());

    let days = generate_roadmap(start_date, &track.templates)?;
    let days = filter_phase(&days, req.phase);
    debug!(track = %track.name, %start_date, days = days.len(), "roadmap served");

    Ok(Json(RoadmapResponse {
        track: track.name.clone(),
        start_date,
        days,
        overview: track.overview.clone(),
    }))
}

/// POST /api/v1/roadmap/progress
pub async fn handle_roadmap_progress(
    State(state): State<AppState>,
    Json(req): Json<RoadmapProgressRequest>,
) -> Result<Json<RoadmapProgressResponse>, AppError> {
    let progress = roadmap_progress(&req.days);
    let day = progress.current_day.unwrap_or(TOTAL_DAYS);
    let message = motivational_message(day, state.engine.motivational_messages())?.to_string();

    Ok(Json(RoadmapProgressResponse { progress, message }))
}

// ──────────────────────────────────────────────
// Shared request processing
// ──────────────────────────────────────────────

/// Validates the submission and refuses it until every question is answered.
fn analyze_answers(
    engine: &EngineConfig,
    answers: &Answers,
) -> Result<(InterestVector, AnswerProgress), EngineError> {
    validate_answers(engine.questions(), answers)?;

    let progress = questionnaire_progress(engine.questions(), answers);
    if !progress.complete {
        return Err(EngineError::validation(
            "answers",
            format!(
                "{} of {} questions answered; all questions are required",
                progress.answered, progress.total
            ),
        ));
    }

    Ok((compute_interests(answers, engine.contributions()), progress))
}

fn assess_skills(
    engine: &EngineConfig,
    req: SkillAssessmentRequest,
) -> Result<SkillProfile, EngineError> {
    let technical = parse_ratings("technical", &req.technical)?;
    let soft = parse_ratings("soft", &req.soft)?;

    Ok(aggregate_skills(&technical, &soft, engine.skill_fields())
        .with_metadata(req.tools, req.technologies))
}
