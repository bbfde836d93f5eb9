#![deny(warnings)]

//! Random weekly events for the Startup Survival Simulator.
//!
//! This crate provides:
//! - The six mutually exclusive events and their effects
//! - An injectable dice abstraction (`EventDice`) for the two random draws
//! - A seeded ChaCha8 implementation for play and a scripted one for tests

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sim_core::constants::*;
use sim_core::{format_usd, InvestorState, StartupState};
use std::collections::VecDeque;
use std::fmt;

/// A stochastic perturbation applied after the week's choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RandomEvent {
    DevQuits,
    NewsletterFeature,
    EmergencyRepair,
    MeetupBoost,
    InvestorVisit,
    Grant,
}

impl RandomEvent {
    /// All events in roll order; index `i` corresponds to a roll of `i + 1`.
    pub const ALL: [RandomEvent; RANDOM_EVENT_COUNT] = [
        RandomEvent::DevQuits,
        RandomEvent::NewsletterFeature,
        RandomEvent::EmergencyRepair,
        RandomEvent::MeetupBoost,
        RandomEvent::InvestorVisit,
        RandomEvent::Grant,
    ];

    fn index(self) -> usize {
        match self {
            RandomEvent::DevQuits => 0,
            RandomEvent::NewsletterFeature => 1,
            RandomEvent::EmergencyRepair => 2,
            RandomEvent::MeetupBoost => 3,
            RandomEvent::InvestorVisit => 4,
            RandomEvent::Grant => 5,
        }
    }
}

impl fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RandomEvent::DevQuits => "developer quits",
            RandomEvent::NewsletterFeature => "newsletter feature",
            RandomEvent::EmergencyRepair => "emergency repair",
            RandomEvent::MeetupBoost => "meetup talk",
            RandomEvent::InvestorVisit => "investor visit",
            RandomEvent::Grant => "startup grant",
        };
        f.write_str(s)
    }
}

/// What actually happened when an event fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    DevQuits,
    NewsletterFeature,
    EmergencyRepair,
    MeetupBoost,
    /// A past investor checked in; `impressed` when product progress had
    /// reached the visit threshold.
    InvestorVisit { impressed: bool },
    Grant,
}

impl EventOutcome {
    pub fn event(self) -> RandomEvent {
        match self {
            EventOutcome::DevQuits => RandomEvent::DevQuits,
            EventOutcome::NewsletterFeature => RandomEvent::NewsletterFeature,
            EventOutcome::EmergencyRepair => RandomEvent::EmergencyRepair,
            EventOutcome::MeetupBoost => RandomEvent::MeetupBoost,
            EventOutcome::InvestorVisit { .. } => RandomEvent::InvestorVisit,
            EventOutcome::Grant => RandomEvent::Grant,
        }
    }

    /// Story line describing the event and its effect.
    pub fn narrative(self, startup_name: &str) -> String {
        match self {
            EventOutcome::DevQuits => format!(
                "{startup_name}'s developer quit for a competitor. Product progress -{DEV_QUIT_PENALTY}%"
            ),
            EventOutcome::NewsletterFeature => format!(
                "{startup_name} got featured in a major newsletter! Investor confidence +{NEWSLETTER_CONFIDENCE_BOOST}%"
            ),
            EventOutcome::EmergencyRepair => format!(
                "Unexpected business emergency at {startup_name}! You had to spend {} to keep things running.",
                format_usd(EMERGENCY_REPAIR_COST)
            ),
            EventOutcome::MeetupBoost => {
                format!("A team member spoke at a local meetup. Morale +{MEETUP_MORALE_BOOST}")
            }
            EventOutcome::InvestorVisit { impressed: true } => format!(
                "A past investor made a surprise check-in. They are impressed! Confidence +{INVESTOR_VISIT_CONFIDENCE_DELTA}% and Morale +{INVESTOR_VISIT_MORALE_DELTA}"
            ),
            EventOutcome::InvestorVisit { impressed: false } => format!(
                "A past investor made a surprise check-in. They are disappointed by the lack of progress! Confidence -{INVESTOR_VISIT_CONFIDENCE_DELTA}% and Morale -{INVESTOR_VISIT_MORALE_DELTA}"
            ),
            EventOutcome::Grant => format!(
                "{startup_name} won a competitive startup grant. +{} in funding",
                format_usd(GRANT_AMOUNT)
            ),
        }
    }
}

/// Source of the two random draws made each week.
pub trait EventDice {
    /// Uniform value in `[0, 1)` deciding whether an event fires.
    fn roll_fire(&mut self) -> f64;
    /// Uniform index in `0..RANDOM_EVENT_COUNT` selecting the event.
    fn roll_event(&mut self) -> usize;
}

/// Dice backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// The dice used for real play.
pub type SeededDice = RngDice<ChaCha8Rng>;

impl RngDice<ChaCha8Rng> {
    /// Reproducible dice: equal seeds yield equal event sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> EventDice for RngDice<R> {
    fn roll_fire(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn roll_event(&mut self) -> usize {
        self.rng.gen_range(0..RANDOM_EVENT_COUNT)
    }
}

/// Dice that replay a fixed script, one entry per week.
///
/// `Some(event)` forces that event to fire; `None` (or an exhausted script)
/// means a quiet week.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<Option<RandomEvent>>,
}

impl ScriptedDice {
    pub fn new<I: IntoIterator<Item = Option<RandomEvent>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Dice that never fire an event.
    pub fn quiet() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EventDice for ScriptedDice {
    fn roll_fire(&mut self) -> f64 {
        match self.script.front().copied() {
            Some(Some(_)) => 0.0,
            Some(None) => {
                self.script.pop_front();
                1.0 - f64::EPSILON
            }
            None => 1.0 - f64::EPSILON,
        }
    }

    fn roll_event(&mut self) -> usize {
        match self.script.pop_front() {
            Some(Some(event)) => event.index(),
            _ => 0,
        }
    }
}

/// Apply the effect of one event and report what happened.
pub fn apply_event(
    event: RandomEvent,
    startup: &mut StartupState,
    investor: &mut InvestorState,
) -> EventOutcome {
    match event {
        RandomEvent::DevQuits => {
            startup.product_progress -= DEV_QUIT_PENALTY;
            EventOutcome::DevQuits
        }
        RandomEvent::NewsletterFeature => {
            investor.confidence += NEWSLETTER_CONFIDENCE_BOOST;
            EventOutcome::NewsletterFeature
        }
        RandomEvent::EmergencyRepair => {
            startup.cash -= EMERGENCY_REPAIR_COST;
            EventOutcome::EmergencyRepair
        }
        RandomEvent::MeetupBoost => {
            startup.morale += MEETUP_MORALE_BOOST;
            EventOutcome::MeetupBoost
        }
        RandomEvent::InvestorVisit => {
            let impressed = startup.product_progress >= INVESTOR_VISIT_PROGRESS_THRESHOLD;
            if impressed {
                investor.confidence += INVESTOR_VISIT_CONFIDENCE_DELTA;
                startup.morale += INVESTOR_VISIT_MORALE_DELTA;
            } else {
                investor.confidence -= INVESTOR_VISIT_CONFIDENCE_DELTA;
                startup.morale -= INVESTOR_VISIT_MORALE_DELTA;
            }
            EventOutcome::InvestorVisit { impressed }
        }
        RandomEvent::Grant => {
            startup.cash += GRANT_AMOUNT;
            EventOutcome::Grant
        }
    }
}

/// Roll for this week's event and apply it if one fires.
///
/// Fires with probability `RANDOM_EVENT_CHANCE`; when it does, exactly one of
/// the six events is selected uniformly.
pub fn maybe_trigger_event<D: EventDice + ?Sized>(
    dice: &mut D,
    startup: &mut StartupState,
    investor: &mut InvestorState,
) -> Option<EventOutcome> {
    let roll = dice.roll_fire();
    if roll >= RANDOM_EVENT_CHANCE {
        return None;
    }
    // Out-of-range indices from a misbehaving dice fold back into range.
    let event = RandomEvent::ALL[dice.roll_event() % RANDOM_EVENT_COUNT];
    let outcome = apply_event(event, startup, investor);
    tracing::debug!(week = startup.week, ?outcome, "random event");
    Some(outcome)
}
