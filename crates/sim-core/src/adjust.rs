//! Deterministic end-of-week adjustments applied after the random event.

use crate::choice::PlayerChoice;
use crate::constants::*;
use crate::state::{InvestorState, StartupState};

/// Penalize confidence when cash is below the warning threshold.
///
/// Applies every week cash stays low, with no cooldown. Returns whether the
/// penalty was applied.
pub fn cash_reserve_check(startup: &StartupState, investor: &mut InvestorState) -> bool {
    if startup.cash < LOW_CASH_WARNING {
        investor.confidence -= LOW_CASH_CONFIDENCE_PENALTY;
        tracing::debug!(cash = startup.cash, "low cash reserve penalty");
        return true;
    }
    false
}

/// Restore some morale on every recovery-interval week, unless the team was
/// pushed into overtime that week.
///
/// Uses `startup.week` as the week just played, so it must run before the week
/// counter is advanced. Returns whether morale was restored.
pub fn morale_recovery(startup: &mut StartupState, choice: PlayerChoice) -> bool {
    if startup.week % MORALE_RECOVERY_INTERVAL == 0 && choice != PlayerChoice::PushOvertime {
        startup.morale += MORALE_RECOVERY_AMOUNT;
        tracing::debug!(week = startup.week, "morale recovery");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::apply_choice;
    use proptest::prelude::*;

    #[test]
    fn low_cash_costs_confidence() {
        let s = StartupState {
            cash: 10_000,
            ..StartupState::default()
        };
        let mut inv = InvestorState { confidence: 80 };
        assert!(cash_reserve_check(&s, &mut inv));
        assert_eq!(inv.confidence, 70);
    }

    #[test]
    fn threshold_is_strict() {
        let s = StartupState {
            cash: LOW_CASH_WARNING,
            ..StartupState::default()
        };
        let mut inv = InvestorState { confidence: 80 };
        assert!(!cash_reserve_check(&s, &mut inv));
        assert_eq!(inv.confidence, 80);
    }

    #[test]
    fn low_cash_penalty_stacks_across_weeks() {
        let s = StartupState {
            cash: 1_000,
            ..StartupState::default()
        };
        let mut inv = InvestorState { confidence: 50 };
        for _ in 0..3 {
            cash_reserve_check(&s, &mut inv);
        }
        assert_eq!(inv.confidence, 20);
    }

    #[test]
    fn pitch_on_recovery_week_nets_minus_seven() {
        let mut s = StartupState {
            week: 4,
            morale: 60,
            ..StartupState::default()
        };
        let mut inv = InvestorState::default();
        apply_choice(&mut s, &mut inv, PlayerChoice::PitchInvestors);
        assert!(morale_recovery(&mut s, PlayerChoice::PitchInvestors));
        assert_eq!(s.morale, 53);
    }

    #[test]
    fn no_recovery_off_interval() {
        let mut s = StartupState {
            week: 5,
            morale: 60,
            ..StartupState::default()
        };
        assert!(!morale_recovery(&mut s, PlayerChoice::HireDeveloper));
        assert_eq!(s.morale, 60);
    }

    proptest! {
        #[test]
        fn overtime_never_recovers(k in 1u32..500, morale in -50i32..100) {
            let mut s = StartupState {
                week: k * MORALE_RECOVERY_INTERVAL,
                morale,
                ..StartupState::default()
            };
            prop_assert!(!morale_recovery(&mut s, PlayerChoice::PushOvertime));
            prop_assert_eq!(s.morale, morale);
        }

        #[test]
        fn cash_check_ignores_choice_and_morale(cash in -50_000i64..LOW_CASH_WARNING,
                                                morale in -50i32..100) {
            let s = StartupState { cash, morale, ..StartupState::default() };
            let mut inv = InvestorState { confidence: 40 };
            prop_assert!(cash_reserve_check(&s, &mut inv));
            prop_assert_eq!(inv.confidence, 30);
        }
    }
}
