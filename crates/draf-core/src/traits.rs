//! Trait abstraction for reward calculators.
//!
//! Implementors supply the individual sub-calculations; composition into
//! weighted tokens, the full breakdown, and the final reward is provided.

use crate::error::RewardError;
use crate::types::{Denominator, Ratio, RewardBreakdown, RewardParams};

/// Reject a zero divisor before IEEE-754 turns it into an infinity or NaN.
pub fn checked_div(
    numerator: f64,
    denominator: f64,
    which: Denominator,
) -> Result<f64, RewardError> {
    if denominator == 0.0 {
        return Err(RewardError::DivisionByZero { denominator: which });
    }
    Ok(numerator / denominator)
}

/// Computes one participant's reward from a shared pool.
///
/// Every method is pure. Implementations must be deterministic: identical
/// inputs give bit-identical outputs.
pub trait RewardCalculator: Send + Sync {
    /// `token_holding / max_share`, bounded according to the implementor's policy.
    fn proportional_share(
        &self,
        token_holding: f64,
        max_share: f64,
    ) -> Result<Ratio, RewardError>;

    /// Progressive bonus, falling linearly from `beta_max` at share 0 to
    /// `beta_min` at share 1.
    fn progressive_bonus(&self, beta_min: f64, beta_max: f64, share: Ratio) -> f64;

    /// Regressive penalty, rising linearly from `alpha_min` at share 0 to
    /// `alpha_max` at share 1.
    fn regressive_penalty(&self, alpha_min: f64, alpha_max: f64, share: Ratio) -> f64;

    /// `min(holding_time / max_holding_time, 1)`. No lower clamp.
    fn holding_multiplier(
        &self,
        holding_time: f64,
        max_holding_time: f64,
    ) -> Result<f64, RewardError>;

    /// Token holding adjusted by net incentive and time bonus.
    ///
    /// Does not touch `total_weighted_tokens`, so callers can use it to build
    /// a consistent total across participants.
    fn weighted_tokens(&self, params: &RewardParams) -> Result<f64, RewardError> {
        Ok(weigh(self, params)?.weighted_tokens)
    }

    /// All intermediates plus the final reward.
    fn breakdown(&self, params: &RewardParams) -> Result<RewardBreakdown, RewardError> {
        compose_breakdown(self, params)
    }

    /// `reward_pool * weighted_tokens / total_weighted_tokens`.
    ///
    /// May be negative or exceed `reward_pool` when the inputs are
    /// inconsistent; no cross-participant check is made.
    fn compute_reward(&self, params: &RewardParams) -> Result<f64, RewardError> {
        Ok(self.breakdown(params)?.reward)
    }
}

struct Weighing {
    share: Ratio,
    beta: f64,
    alpha: f64,
    multiplier: f64,
    weighted_tokens: f64,
}

fn weigh<C: RewardCalculator + ?Sized>(
    calc: &C,
    params: &RewardParams,
) -> Result<Weighing, RewardError> {
    let share = calc.proportional_share(params.token_holding, params.max_share)?;
    let beta = calc.progressive_bonus(params.beta_min, params.beta_max, share);
    let alpha = calc.regressive_penalty(params.alpha_min, params.alpha_max, share);
    let multiplier = calc.holding_multiplier(params.holding_time, params.max_holding_time)?;
    let weighted_tokens = params.token_holding * (1.0 + beta - alpha) * (1.0 + multiplier);
    Ok(Weighing {
        share,
        beta,
        alpha,
        multiplier,
        weighted_tokens,
    })
}

/// Run every sub-calculation of `calc` in order and allocate from the pool.
///
/// The provided [`RewardCalculator::breakdown`] delegates here; implementors
/// that override `breakdown` (to add logging, say) can call it directly.
pub fn compose_breakdown<C: RewardCalculator + ?Sized>(
    calc: &C,
    params: &RewardParams,
) -> Result<RewardBreakdown, RewardError> {
    let w = weigh(calc, params)?;
    let reward = params.reward_pool
        * checked_div(
            w.weighted_tokens,
            params.total_weighted_tokens,
            Denominator::TotalWeightedTokens,
        )?;
    Ok(RewardBreakdown {
        proportional_share: w.share,
        beta: w.beta,
        alpha: w.alpha,
        holding_multiplier: w.multiplier,
        weighted_tokens: w.weighted_tokens,
        reward,
    })
}
