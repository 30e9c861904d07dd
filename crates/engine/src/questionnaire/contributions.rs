//! Option → dimension increment table.
//!
//! Many options may share the same increments ("Technology" and "Coding &
//! building" both add technology+2, analytical+1). Options are matched by
//! exact text; anything not in the table contributes nothing.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};
use crate::questionnaire::models::InterestDimension;

/// One row of the configured table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionContribution {
    pub option: String,
    pub deltas: BTreeMap<InterestDimension, u32>,
}

/// Immutable lookup built once from the configured rows.
#[derive(Debug, Clone, Default)]
pub struct ContributionTable {
    by_option: HashMap<String, BTreeMap<InterestDimension, u32>>,
}

impl ContributionTable {
    /// Builds the lookup. Blank or duplicated option text is rejected.
    pub fn from_rows(rows: &[OptionContribution]) -> Result<Self> {
        let mut by_option = HashMap::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            if row.option.trim().is_empty() {
                return Err(EngineError::validation_at(
                    "contributions.option",
                    i,
                    "option text cannot be blank",
                ));
            }
            if by_option
                .insert(row.option.clone(), row.deltas.clone())
                .is_some()
            {
                return Err(EngineError::validation_at(
                    "contributions.option",
                    i,
                    format!("duplicate option '{}'", row.option),
                ));
            }
        }

        Ok(Self { by_option })
    }

    /// Increments for an option, or `None` when the option is unrecognised.
    pub fn deltas(&self, option: &str) -> Option<&BTreeMap<InterestDimension, u32>> {
        self.by_option.get(option)
    }

    pub fn contains(&self, option: &str) -> bool {
        self.by_option.contains_key(option)
    }

    pub fn len(&self) -> usize {
        self.by_option.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_option.is_empty()
    }
}
