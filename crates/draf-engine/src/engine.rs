//! Reward engine implementing the [`RewardCalculator`] trait.
//!
//! Every sub-calculation keeps the reference operation order so results are
//! bit-identical to the published formula. Zero denominators are rejected up
//! front; every other input is accepted as-is.

use draf_core::constants::HOLDING_MULTIPLIER_CAP;
use draf_core::error::RewardError;
use draf_core::traits::{checked_div, compose_breakdown, RewardCalculator};
use draf_core::types::{Denominator, Ratio, RatioPolicy, RewardBreakdown, RewardParams};
use tracing::{debug, trace};

use crate::curve::{lerp, lerp_descending};

/// The production reward calculator.
///
/// Stateless apart from its [`RatioPolicy`]; safe to copy and share across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrafEngine {
    policy: RatioPolicy,
}

impl DrafEngine {
    /// Create an engine with the unclamped reference behaviour.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RatioPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RatioPolicy {
        self.policy
    }
}

impl RewardCalculator for DrafEngine {
    fn proportional_share(
        &self,
        token_holding: f64,
        max_share: f64,
    ) -> Result<Ratio, RewardError> {
        let raw = checked_div(token_holding, max_share, Denominator::MaxShare)?;
        let share = Ratio::new(raw, self.policy);
        if share.overflowed() {
            trace!(
                raw,
                value = share.value(),
                policy = ?share.policy(),
                "proportional share outside [0, 1]"
            );
        }
        Ok(share)
    }

    fn progressive_bonus(&self, beta_min: f64, beta_max: f64, share: Ratio) -> f64 {
        lerp_descending(beta_min, beta_max, share.value())
    }

    fn regressive_penalty(&self, alpha_min: f64, alpha_max: f64, share: Ratio) -> f64 {
        lerp(alpha_min, alpha_max, share.value())
    }

    fn holding_multiplier(
        &self,
        holding_time: f64,
        max_holding_time: f64,
    ) -> Result<f64, RewardError> {
        let ratio = checked_div(holding_time, max_holding_time, Denominator::MaxHoldingTime)?;
        // Written as a comparison rather than f64::min so a NaN ratio stays NaN.
        Ok(if HOLDING_MULTIPLIER_CAP < ratio {
            HOLDING_MULTIPLIER_CAP
        } else {
            ratio
        })
    }

    fn breakdown(&self, params: &RewardParams) -> Result<RewardBreakdown, RewardError> {
        let b = compose_breakdown(self, params)?;
        debug!(
            share = b.proportional_share.value(),
            beta = b.beta,
            alpha = b.alpha,
            holding_multiplier = b.holding_multiplier,
            weighted_tokens = b.weighted_tokens,
            reward = b.reward,
            "reward computed"
        );
        Ok(b)
    }
}
