//! Fixed balance parameters. Values are part of the game rules and are not
//! configurable at runtime.

// Cash
pub const START_CASH: i64 = 100_000;
pub const HIRE_DEV_COST: i64 = 10_000;
pub const EMERGENCY_REPAIR_COST: i64 = 6_000;
pub const LOW_CASH_WARNING: i64 = 15_000;
pub const GRANT_AMOUNT: i64 = 20_000;

// Product progress (percent)
pub const START_PRODUCT: i32 = 0;
pub const HIRE_DEV_GAIN: i32 = 10;
pub const OVERTIME_PRODUCT_GAIN: i32 = 5;
pub const DEV_QUIT_PENALTY: i32 = 10;
/// Product progress at which a visiting investor is impressed.
pub const INVESTOR_VISIT_PROGRESS_THRESHOLD: i32 = 30;

// Morale
pub const START_MORALE: i32 = 100;
pub const PITCH_MORALE_COST: i32 = 10;
pub const OVERTIME_MORALE_PENALTY: i32 = 20;
pub const MEETUP_MORALE_BOOST: i32 = 10;
pub const INVESTOR_VISIT_MORALE_DELTA: i32 = 5;
pub const MORALE_RECOVERY_AMOUNT: i32 = 3;
/// Recovery applies on weeks divisible by this interval.
pub const MORALE_RECOVERY_INTERVAL: u32 = 4;

// Investor confidence (percent)
pub const START_CONFIDENCE: i32 = 100;
pub const PITCH_CONFIDENCE_GAIN: i32 = 10;
pub const NEWSLETTER_CONFIDENCE_BOOST: i32 = 15;
pub const INVESTOR_VISIT_CONFIDENCE_DELTA: i32 = 5;
pub const LOW_CASH_CONFIDENCE_PENALTY: i32 = 10;

// Bounds and end conditions
pub const MAX_PRODUCT_PROGRESS: i32 = 100;
pub const MAX_MORALE: i32 = 100;
pub const MAX_CONFIDENCE: i32 = 100;
pub const WIN_CONFIDENCE_THRESHOLD: i32 = 70;
pub const MIN_MORALE: i32 = 0;
pub const MIN_CASH: i64 = 0;

/// Probability that a random event fires in a given week.
pub const RANDOM_EVENT_CHANCE: f64 = 0.40;
/// Number of distinct random events, selected uniformly when one fires.
pub const RANDOM_EVENT_COUNT: usize = 6;

pub const START_WEEK: u32 = 1;
