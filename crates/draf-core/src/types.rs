//! Parameter and result types for a single reward computation.
//!
//! Every quantity is an `f64`. Intermediate values keep the exact operation
//! order of the reference formula so results are bit-for-bit reproducible.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    EXAMPLE_ALPHA_MAX, EXAMPLE_ALPHA_MIN, EXAMPLE_BETA_MAX, EXAMPLE_BETA_MIN,
    EXAMPLE_HOLDING_TIME, EXAMPLE_MAX_HOLDING_TIME, EXAMPLE_MAX_SHARE, EXAMPLE_REWARD_POOL,
    EXAMPLE_TOKEN_HOLDING, EXAMPLE_TOTAL_WEIGHTED_TOKENS, SHARE_CEILING, SHARE_FLOOR,
};

/// Inputs describing one participant and the system-wide totals.
///
/// All fields are required; there are no defaults. Deserializing from a
/// config source fails if any field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardParams {
    /// Total reward available for distribution.
    pub reward_pool: f64,
    /// Participant's token amount.
    pub token_holding: f64,
    /// Sum of weighted tokens across all participants.
    pub total_weighted_tokens: f64,
    /// Progressive bonus at a proportional share of 1.
    pub beta_min: f64,
    /// Progressive bonus at a proportional share of 0.
    pub beta_max: f64,
    /// Regressive penalty at a proportional share of 0.
    pub alpha_min: f64,
    /// Regressive penalty at a proportional share of 1.
    pub alpha_max: f64,
    /// Duration the tokens have been held.
    pub holding_time: f64,
    /// Holding time at which the time multiplier saturates.
    pub max_holding_time: f64,
    /// Divisor normalizing `token_holding` into a proportional share.
    pub max_share: f64,
}

impl RewardParams {
    /// The worked example parameter set.
    ///
    /// # Examples
    ///
    /// ```
    /// use draf_core::types::RewardParams;
    /// let p = RewardParams::example();
    /// assert_eq!(p.reward_pool, 10_000.0);
    /// assert_eq!(p.max_share, 0.2);
    /// ```
    pub fn example() -> Self {
        Self {
            reward_pool: EXAMPLE_REWARD_POOL,
            token_holding: EXAMPLE_TOKEN_HOLDING,
            total_weighted_tokens: EXAMPLE_TOTAL_WEIGHTED_TOKENS,
            beta_min: EXAMPLE_BETA_MIN,
            beta_max: EXAMPLE_BETA_MAX,
            alpha_min: EXAMPLE_ALPHA_MIN,
            alpha_max: EXAMPLE_ALPHA_MAX,
            holding_time: EXAMPLE_HOLDING_TIME,
            max_holding_time: EXAMPLE_MAX_HOLDING_TIME,
            max_share: EXAMPLE_MAX_SHARE,
        }
    }

    /// All fields paired with their names, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("reward_pool", self.reward_pool),
            ("token_holding", self.token_holding),
            ("total_weighted_tokens", self.total_weighted_tokens),
            ("beta_min", self.beta_min),
            ("beta_max", self.beta_max),
            ("alpha_min", self.alpha_min),
            ("alpha_max", self.alpha_max),
            ("holding_time", self.holding_time),
            ("max_holding_time", self.max_holding_time),
            ("max_share", self.max_share),
        ]
    }
}

/// The three parameters used as divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denominator {
    MaxShare,
    MaxHoldingTime,
    TotalWeightedTokens,
}

impl Denominator {
    pub const ALL: [Denominator; 3] = [
        Denominator::MaxShare,
        Denominator::MaxHoldingTime,
        Denominator::TotalWeightedTokens,
    ];

    /// Field name in [`RewardParams`].
    pub fn field_name(self) -> &'static str {
        match self {
            Denominator::MaxShare => "max_share",
            Denominator::MaxHoldingTime => "max_holding_time",
            Denominator::TotalWeightedTokens => "total_weighted_tokens",
        }
    }

    /// Value of this denominator in `params`.
    pub fn value_in(self, params: &RewardParams) -> f64 {
        match self {
            Denominator::MaxShare => params.max_share,
            Denominator::MaxHoldingTime => params.max_holding_time,
            Denominator::TotalWeightedTokens => params.total_weighted_tokens,
        }
    }
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// How the proportional share is bounded before it drives the bonus and
/// penalty curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioPolicy {
    /// Use the raw share. Values above 1 invert the incentive curves.
    #[default]
    Unclamped,
    /// Clamp the share into `[0, 1]`.
    Clamped,
}

/// A proportional share with its bounding policy made explicit.
///
/// # Examples
///
/// ```
/// use draf_core::types::{Ratio, RatioPolicy};
/// let r = Ratio::new(5_000.0, RatioPolicy::Unclamped);
/// assert_eq!(r.value(), 5_000.0);
/// assert!(r.overflowed());
///
/// let r = Ratio::new(5_000.0, RatioPolicy::Clamped);
/// assert_eq!(r.value(), 1.0);
/// assert!(r.overflowed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    raw: f64,
    value: f64,
    policy: RatioPolicy,
}

impl Ratio {
    pub fn new(raw: f64, policy: RatioPolicy) -> Self {
        let value = match policy {
            RatioPolicy::Unclamped => raw,
            RatioPolicy::Clamped => raw.clamp(SHARE_FLOOR, SHARE_CEILING),
        };
        Self { raw, value, policy }
    }

    /// The value fed into the formula.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The share before any policy was applied.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn policy(&self) -> RatioPolicy {
        self.policy
    }

    /// Whether the raw share fell outside `[0, 1]`, whatever the policy.
    pub fn overflowed(&self) -> bool {
        !(SHARE_FLOOR..=SHARE_CEILING).contains(&self.raw)
    }
}

/// Every intermediate of one reward computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub proportional_share: Ratio,
    /// Progressive bonus.
    pub beta: f64,
    /// Regressive penalty.
    pub alpha: f64,
    pub holding_multiplier: f64,
    pub weighted_tokens: f64,
    pub reward: f64,
}

impl RewardBreakdown {
    /// Net incentive factor `1 + beta - alpha`.
    pub fn net_incentive(&self) -> f64 {
        1.0 + self.beta - self.alpha
    }
}
