//! Formula constants and the worked example parameter set.

/// Upper bound of the holding-time multiplier.
pub const HOLDING_MULTIPLIER_CAP: f64 = 1.0;

/// Lower bound of a clamped proportional share.
pub const SHARE_FLOOR: f64 = 0.0;

/// Upper bound of a clamped proportional share.
pub const SHARE_CEILING: f64 = 1.0;

/// Prefix for environment variables that override reward parameters.
pub const ENV_PREFIX: &str = "DRAF";

// Worked example used by the `demo` command. `max_share` is tiny relative to
// the holding, so the proportional share lands far above 1 and the reward
// goes negative under the unclamped policy.

pub const EXAMPLE_REWARD_POOL: f64 = 10_000.0;
pub const EXAMPLE_TOKEN_HOLDING: f64 = 1_000.0;
pub const EXAMPLE_TOTAL_WEIGHTED_TOKENS: f64 = 50_000.0;
pub const EXAMPLE_BETA_MIN: f64 = 0.05;
pub const EXAMPLE_BETA_MAX: f64 = 0.15;
pub const EXAMPLE_ALPHA_MIN: f64 = 0.02;
pub const EXAMPLE_ALPHA_MAX: f64 = 0.10;
/// Months.
pub const EXAMPLE_HOLDING_TIME: f64 = 6.0;
/// Months.
pub const EXAMPLE_MAX_HOLDING_TIME: f64 = 12.0;
pub const EXAMPLE_MAX_SHARE: f64 = 0.2;

/// Reward produced by the example set under the unclamped policy.
pub const EXAMPLE_REWARD: f64 = -269_660.999_999_999_94;
