#![deny(warnings)]

//! Turn orchestration for the Startup Survival Simulator.
//!
//! A [`Simulation`] owns the startup and investor state for one run and
//! resolves each week in a fixed order: choice, random event, cash-reserve
//! check, morale recovery, clamping, week increment, end-condition check.

use serde::{Deserialize, Serialize};
use sim_core::{
    apply_choice, cash_reserve_check, clamp_stats, evaluate, morale_recovery, validate_config,
    validate_startup_name, GameStatus, InvestorState, PlayerChoice, SimConfig, StartupState,
    ValidationError,
};
use sim_events::{maybe_trigger_event, EventDice, EventOutcome, SeededDice};
use std::convert::Infallible;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while driving a run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// A week was requested after the run reached a terminal status.
    #[error("the game is already over ({0})")]
    AlreadyOver(GameStatus),
    /// The decision source could not produce a choice.
    #[error("decision source failed: {0}")]
    Decision(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Supplies the weekly choice and receives the result of each week.
pub trait DecisionSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Pick the choice for the upcoming week given the current state.
    fn decide(
        &mut self,
        startup_name: &str,
        startup: &StartupState,
        investor: &InvestorState,
    ) -> Result<PlayerChoice, Self::Error>;

    /// Called once after every resolved week.
    fn observe(&mut self, _startup_name: &str, _report: &TurnReport) {}
}

/// Lets the `sim-ai` heuristic play every week.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoPilot;

impl DecisionSource for AutoPilot {
    type Error = Infallible;

    fn decide(
        &mut self,
        _startup_name: &str,
        startup: &StartupState,
        investor: &InvestorState,
    ) -> Result<PlayerChoice, Self::Error> {
        Ok(sim_ai::choose(startup, investor))
    }
}

/// Everything that happened during one resolved week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The week that was played (before the counter advanced).
    pub week: u32,
    pub choice: PlayerChoice,
    /// The random event, if one fired.
    pub event: Option<EventOutcome>,
    /// Whether low cash cost investor confidence this week.
    pub low_cash_penalty: bool,
    /// Whether the periodic morale recovery applied.
    pub morale_recovered: bool,
    /// Status after the end-condition check.
    pub status: GameStatus,
}

impl TurnReport {
    /// Story lines for the week in the order they happened.
    pub fn narrative(&self, startup_name: &str) -> Vec<String> {
        let mut lines = vec![self.choice.narrative(startup_name)];
        if let Some(event) = self.event {
            lines.push(event.narrative(startup_name));
        }
        if self.low_cash_penalty {
            lines.push(format!(
                "Cash reserves are dangerously low. Confidence -{}%",
                sim_core::constants::LOW_CASH_CONFIDENCE_PENALTY
            ));
        }
        if self.morale_recovered {
            lines.push("Your team had a balanced week and regained some morale".to_string());
        }
        if let Some(headline) = self.status.headline(startup_name) {
            lines.push(headline);
        }
        lines
    }
}

/// Final numbers of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub startup_name: String,
    /// Week counter at the end of the run (one past the last week played).
    pub final_week: u32,
    pub weeks_played: u32,
    pub cash: i64,
    pub morale: i32,
    pub product_progress: i32,
    pub confidence: i32,
    pub status: GameStatus,
}

/// One run of the simulation: state, identity and the event dice.
#[derive(Debug)]
pub struct Simulation<D> {
    startup_name: String,
    startup: StartupState,
    investor: InvestorState,
    status: GameStatus,
    dice: D,
}

impl Simulation<SeededDice> {
    /// Start a run with seeded ChaCha8 dice.
    pub fn from_config(cfg: &SimConfig) -> Result<Self, RuntimeError> {
        validate_config(cfg)?;
        info!(name = %cfg.startup_name, seed = cfg.rng_seed, "starting simulation");
        Simulation::new(cfg.startup_name.clone(), SeededDice::seeded(cfg.rng_seed))
    }
}

impl<D: EventDice> Simulation<D> {
    /// Start a run from the standard initial state.
    pub fn new(startup_name: impl Into<String>, dice: D) -> Result<Self, RuntimeError> {
        Self::from_state(
            startup_name,
            StartupState::default(),
            InvestorState::default(),
            dice,
        )
    }

    /// Start a run from an arbitrary state. The status begins as ongoing: the
    /// end-condition check only runs after a played week.
    pub fn from_state(
        startup_name: impl Into<String>,
        startup: StartupState,
        investor: InvestorState,
        dice: D,
    ) -> Result<Self, RuntimeError> {
        let startup_name = startup_name.into();
        validate_startup_name(&startup_name)?;
        Ok(Self {
            startup_name,
            startup,
            investor,
            status: GameStatus::Ongoing,
            dice,
        })
    }

    pub fn startup_name(&self) -> &str {
        &self.startup_name
    }

    pub fn startup(&self) -> &StartupState {
        &self.startup
    }

    pub fn investor(&self) -> &InvestorState {
        &self.investor
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Resolve one week with the given choice.
    pub fn play_week(&mut self, choice: PlayerChoice) -> Result<TurnReport, RuntimeError> {
        if self.status.is_terminal() {
            return Err(RuntimeError::AlreadyOver(self.status));
        }
        let week = self.startup.week;

        apply_choice(&mut self.startup, &mut self.investor, choice);
        let event = maybe_trigger_event(&mut self.dice, &mut self.startup, &mut self.investor);
        let low_cash_penalty = cash_reserve_check(&self.startup, &mut self.investor);
        let morale_recovered = morale_recovery(&mut self.startup, choice);
        clamp_stats(&mut self.startup, &mut self.investor);
        self.startup.week += 1;
        self.status = evaluate(&self.startup, &self.investor);

        debug!(
            week,
            cash = self.startup.cash,
            morale = self.startup.morale,
            product = self.startup.product_progress,
            confidence = self.investor.confidence,
            "week resolved"
        );
        if self.status.is_terminal() {
            info!(week, status = %self.status, "simulation ended");
        }

        Ok(TurnReport {
            week,
            choice,
            event,
            low_cash_penalty,
            morale_recovered,
            status: self.status,
        })
    }

    /// Play weeks until a terminal status, asking `source` for each choice.
    pub fn run<S: DecisionSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<GameSummary, RuntimeError> {
        while !self.status.is_terminal() {
            let choice = source
                .decide(&self.startup_name, &self.startup, &self.investor)
                .map_err(|e| RuntimeError::Decision(Box::new(e)))?;
            let report = self.play_week(choice)?;
            source.observe(&self.startup_name, &report);
        }
        Ok(self.summary())
    }

    /// Snapshot of the current numbers, usable at any point of the run.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            startup_name: self.startup_name.clone(),
            final_week: self.startup.week,
            weeks_played: self.startup.week.saturating_sub(sim_core::constants::START_WEEK),
            cash: self.startup.cash,
            morale: self.startup.morale,
            product_progress: self.startup.product_progress,
            confidence: self.investor.confidence,
            status: self.status,
        }
    }
}
