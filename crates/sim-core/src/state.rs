use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Resources owned by the startup plus the current week.
///
/// `cash` and `product_progress` have no floor: negative values are legal
/// between mutations and loss detection relies on them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupState {
    /// Cash on hand in USD.
    pub cash: i64,
    /// Team morale, at most 100. Zero or below is a burnout.
    pub morale: i32,
    /// MVP completion in percent, at most 100.
    pub product_progress: i32,
    /// Week currently being played, starting at 1.
    pub week: u32,
}

impl Default for StartupState {
    fn default() -> Self {
        Self {
            cash: START_CASH,
            morale: START_MORALE,
            product_progress: START_PRODUCT,
            week: START_WEEK,
        }
    }
}

/// Investor sentiment towards the startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorState {
    /// Confidence in percent, at most 100.
    pub confidence: i32,
}

impl Default for InvestorState {
    fn default() -> Self {
        Self {
            confidence: START_CONFIDENCE,
        }
    }
}

/// Cap morale, product progress and confidence at their maximums.
///
/// Only upper bounds are enforced; lower bounds are left to the end-condition
/// check. Applying this twice is the same as applying it once.
pub fn clamp_stats(startup: &mut StartupState, investor: &mut InvestorState) {
    startup.morale = startup.morale.min(MAX_MORALE);
    startup.product_progress = startup.product_progress.min(MAX_PRODUCT_PROGRESS);
    investor.confidence = investor.confidence.min(MAX_CONFIDENCE);
}
