// Interest Vector Calculator: questionnaire catalog, option contribution
// table and the answers → interest vector computation.

pub mod calculator;
pub mod contributions;
pub mod models;
pub mod validation;

pub use calculator::compute_interests;
pub use contributions::{ContributionTable, OptionContribution};
pub use models::{AnswerProgress, Answers, InterestDimension, InterestVector, Question};
pub use validation::{questionnaire_progress, validate_answers};
