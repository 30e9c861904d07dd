use tracing::debug;

use crate::questionnaire::contributions::ContributionTable;
use crate::questionnaire::models::{Answers, InterestVector};

/// Turns a set of multiple-choice answers into an interest vector.
///
/// Total over arbitrary input: an option missing from the table adds nothing.
/// The result is an elementwise sum, so the iteration order of `answers`
/// never affects it.
pub fn compute_interests(answers: &Answers, table: &ContributionTable) -> InterestVector {
    let mut vector = InterestVector::new();

    for (question_id, option) in answers {
        match table.deltas(option) {
            Some(deltas) => {
                for (dimension, delta) in deltas {
                    vector.add(*dimension, *delta);
                }
            }
            None => {
                debug!(question_id = %question_id, option = %option, "unrecognised option, contributes nothing");
            }
        }
    }

    vector
}
