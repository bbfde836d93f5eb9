#![deny(warnings)]

//! Heuristic autoplay: scores the weekly choices and picks the best one.
//!
//! Scoring searches every choice sequence over the next few weeks using only
//! the deterministic rules; random events are ignored.

use sim_core::constants::*;
use sim_core::{
    apply_choice, cash_reserve_check, clamp_stats, evaluate, morale_recovery, GameStatus,
    InvestorState, PlayerChoice, StartupState,
};

/// Utility of a state: higher is better. Dead states score negative infinity.
pub fn utility(startup: &StartupState, investor: &InvestorState) -> f32 {
    if startup.cash <= MIN_CASH || startup.morale <= MIN_MORALE {
        return f32::NEG_INFINITY;
    }
    let product = ratio(startup.product_progress, MAX_PRODUCT_PROGRESS);
    let confidence = ratio(investor.confidence, MAX_CONFIDENCE);
    let morale = ratio(startup.morale, MAX_MORALE);
    let runway = (startup.cash as f32 / START_CASH as f32).clamp(0.0, 1.0);

    let mut u = (product * 0.5) + (confidence * 0.2) + (morale * 0.15) + (runway * 0.15);
    if startup.cash < LOW_CASH_WARNING {
        u -= 0.1;
    }
    if investor.confidence < WIN_CONFIDENCE_THRESHOLD {
        u -= 0.1;
    }
    u
}

fn ratio(value: i32, max: i32) -> f32 {
    value.clamp(0, max) as f32 / max as f32
}

/// Weeks the autopilot looks ahead when scoring a choice.
pub const LOOKAHEAD_WEEKS: u32 = 3;

/// Score of a win found on the last looked-ahead week. Earlier wins score
/// higher; losses mirror this below zero, so later losses are preferred.
pub const WIN_SCORE: f32 = 1_000.0;

fn step(
    startup: &StartupState,
    investor: &InvestorState,
    choice: PlayerChoice,
) -> (StartupState, InvestorState, GameStatus) {
    let mut s = startup.clone();
    let mut inv = investor.clone();
    apply_choice(&mut s, &mut inv, choice);
    cash_reserve_check(&s, &mut inv);
    morale_recovery(&mut s, choice);
    clamp_stats(&mut s, &mut inv);
    s.week += 1;
    let status = evaluate(&s, &inv);
    (s, inv, status)
}

fn plan(
    startup: &StartupState,
    investor: &InvestorState,
    choice: PlayerChoice,
    weeks_left: u32,
) -> f32 {
    let (s, inv, status) = step(startup, investor, choice);
    let urgency = weeks_left as f32;
    match status {
        GameStatus::Win => WIN_SCORE + urgency,
        GameStatus::LossCashDepleted | GameStatus::LossMoraleBurnout => -(WIN_SCORE + urgency),
        GameStatus::Ongoing if weeks_left <= 1 => utility(&s, &inv),
        GameStatus::Ongoing => PlayerChoice::ALL
            .into_iter()
            .map(|next| plan(&s, &inv, next, weeks_left - 1))
            .fold(f32::NEG_INFINITY, f32::max),
    }
}

/// Score a choice by the best deterministic continuation over the next
/// `LOOKAHEAD_WEEKS` weeks. Random events are ignored.
pub fn score_choice(
    startup: &StartupState,
    investor: &InvestorState,
    choice: PlayerChoice,
) -> f32 {
    plan(startup, investor, choice, LOOKAHEAD_WEEKS)
}

/// Pick the highest-scoring choice. Ties go to the earlier menu entry.
pub fn choose(startup: &StartupState, investor: &InvestorState) -> PlayerChoice {
    let mut best = PlayerChoice::ALL[0];
    let mut best_score = f32::NEG_INFINITY;
    for choice in PlayerChoice::ALL {
        let score = score_choice(startup, investor, choice);
        tracing::trace!(?choice, score, "scored choice");
        if score > best_score {
            best = choice;
            best_score = score;
        }
    }
    tracing::debug!(week = startup.week, choice = ?best, score = best_score, "autoplay decision");
    best
}
