use crate::errors::{EngineError, Result};
use crate::questionnaire::models::{AnswerProgress, Answers, Question};

/// Checks every answer against the question catalog.
///
/// `compute_interests` never calls this; it is for callers that want to
/// refuse malformed submissions before scoring them.
pub fn validate_answers(questions: &[Question], answers: &Answers) -> Result<()> {
    // Sorted so the first reported error does not depend on map order.
    let mut ids: Vec<&String> = answers.keys().collect();
    ids.sort();

    for id in ids {
        let question = questions
            .iter()
            .find(|q| &q.id == id)
            .ok_or_else(|| EngineError::validation(format!("answers.{id}"), "unknown question id"))?;

        let option = &answers[id];
        if !question.allows(option) {
            return Err(EngineError::validation(
                format!("answers.{id}"),
                format!("'{option}' is not one of the options for this question"),
            ));
        }
    }

    Ok(())
}

/// Counts answered catalog questions. Keys that are not catalog ids do not count.
pub fn questionnaire_progress(questions: &[Question], answers: &Answers) -> AnswerProgress {
    let total = questions.len();
    let answered = questions
        .iter()
        .filter(|q| answers.contains_key(&q.id))
        .count();

    let percent = if total > 0 {
        ((answered as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    AnswerProgress {
        answered,
        total,
        complete: total > 0 && answered == total,
        percent,
    }
}
