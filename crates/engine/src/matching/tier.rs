use serde::{Deserialize, Serialize};

/// Badge bucket for a match percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Strong,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    pub fn for_percentage(match_percentage: u32) -> Self {
        match match_percentage {
            p if p >= 90 => MatchTier::Excellent,
            p if p >= 85 => MatchTier::Strong,
            p if p >= 80 => MatchTier::Good,
            p if p >= 65 => MatchTier::Fair,
            _ => MatchTier::Low,
        }
    }

    /// Badge colour as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "#10B981",
            MatchTier::Strong => "#F59E0B",
            MatchTier::Good => "#06B6D4",
            MatchTier::Fair => "#8B5CF6",
            MatchTier::Low => "#6B7280",
        }
    }
}
