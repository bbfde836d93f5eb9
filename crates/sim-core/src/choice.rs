use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::state::{InvestorState, StartupState};
use crate::ValidationError;

/// The founder's single strategic action for a week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerChoice {
    /// Spend cash to move the product forward.
    HireDeveloper,
    /// Trade team morale for investor confidence.
    PitchInvestors,
    /// Trade team morale for product progress.
    PushOvertime,
}

impl PlayerChoice {
    /// All choices in menu order.
    pub const ALL: [PlayerChoice; 3] = [
        PlayerChoice::HireDeveloper,
        PlayerChoice::PitchInvestors,
        PlayerChoice::PushOvertime,
    ];

    /// Menu key the player types to select this choice.
    pub fn menu_key(self) -> char {
        match self {
            PlayerChoice::HireDeveloper => '1',
            PlayerChoice::PitchInvestors => '2',
            PlayerChoice::PushOvertime => '3',
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PlayerChoice::HireDeveloper => "Hire a Developer",
            PlayerChoice::PitchInvestors => "Pitch to Investors",
            PlayerChoice::PushOvertime => "Push Team Overtime",
        }
    }

    /// Story line shown after the choice is resolved.
    pub fn narrative(self, startup_name: &str) -> String {
        match self {
            PlayerChoice::HireDeveloper => {
                format!("{startup_name} hired a developer. Product progress increased!")
            }
            PlayerChoice::PitchInvestors => {
                "You pitched to investors. Confidence increased, but your team is stressed."
                    .to_string()
            }
            PlayerChoice::PushOvertime => {
                "You pushed for overtime. Progress improved, but morale dropped.".to_string()
            }
        }
    }
}

impl fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for PlayerChoice {
    type Err = ValidationError;

    /// Parse a menu key ("1", "2" or "3"), ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        PlayerChoice::ALL
            .into_iter()
            .find(|c| key.len() == 1 && key.starts_with(c.menu_key()))
            .ok_or_else(|| ValidationError::UnknownChoice(key.to_string()))
    }
}

/// Apply the effect of the week's decision. Decisions never fail, even when
/// cash or morale are already insufficient.
pub fn apply_choice(startup: &mut StartupState, investor: &mut InvestorState, choice: PlayerChoice) {
    match choice {
        PlayerChoice::HireDeveloper => {
            startup.cash -= HIRE_DEV_COST;
            startup.product_progress += HIRE_DEV_GAIN;
        }
        PlayerChoice::PitchInvestors => {
            investor.confidence += PITCH_CONFIDENCE_GAIN;
            startup.morale -= PITCH_MORALE_COST;
        }
        PlayerChoice::PushOvertime => {
            startup.product_progress += OVERTIME_PRODUCT_GAIN;
            startup.morale -= OVERTIME_MORALE_PENALTY;
        }
    }
    tracing::debug!(?choice, week = startup.week, "applied choice");
}
