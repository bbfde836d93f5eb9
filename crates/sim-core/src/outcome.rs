use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;
use crate::state::{InvestorState, StartupState};

/// Status of a run after a completed week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    /// Cash reached zero or below.
    LossCashDepleted,
    /// Morale reached zero or below.
    LossMoraleBurnout,
    /// MVP shipped with enough investor backing.
    Win,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn is_loss(self) -> bool {
        matches!(
            self,
            GameStatus::LossCashDepleted | GameStatus::LossMoraleBurnout
        )
    }

    /// Closing line for a finished run. `None` while the game is ongoing.
    pub fn headline(self, startup_name: &str) -> Option<String> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::LossCashDepleted => {
                Some(format!("{startup_name} ran out of cash. Game over!"))
            }
            GameStatus::LossMoraleBurnout => {
                Some(format!("Your team at {startup_name} burned out. Game over!"))
            }
            GameStatus::Win => Some(format!(
                "{startup_name} launched its MVP and secured investor support. You win!"
            )),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::LossCashDepleted => "out of cash",
            GameStatus::LossMoraleBurnout => "team burnout",
            GameStatus::Win => "win",
        };
        f.write_str(s)
    }
}

/// Classify the state after a full week. Losses take precedence over a win.
pub fn evaluate(startup: &StartupState, investor: &InvestorState) -> GameStatus {
    if startup.cash <= MIN_CASH {
        return GameStatus::LossCashDepleted;
    }
    if startup.morale <= MIN_MORALE {
        return GameStatus::LossMoraleBurnout;
    }
    if startup.product_progress >= MAX_PRODUCT_PROGRESS
        && investor.confidence >= WIN_CONFIDENCE_THRESHOLD
    {
        return GameStatus::Win;
    }
    GameStatus::Ongoing
}
