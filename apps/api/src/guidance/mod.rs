// HTTP surface over the guidance engine: questionnaire, skills,
// recommendations and roadmap endpoints.

pub mod handlers;
pub mod models;
