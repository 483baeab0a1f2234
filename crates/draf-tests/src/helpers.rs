//! Shared parameter builders for integration tests.

use draf_core::traits::RewardCalculator;
use draf_core::types::RewardParams;

/// Parameters whose share stays inside `[0, 1]` and whose net incentive
/// `beta - alpha` is non-negative.
pub fn well_behaved(token_holding: f64, holding_time: f64) -> RewardParams {
    RewardParams {
        reward_pool: 10_000.0,
        token_holding,
        total_weighted_tokens: 50_000.0,
        beta_min: 0.10,
        beta_max: 0.30,
        alpha_min: 0.0,
        alpha_max: 0.10,
        holding_time,
        max_holding_time: 12.0,
        max_share: 1_000.0,
    }
}

/// `params` with `total_weighted_tokens` set to the participant's own
/// weighted tokens, as if they were the only participant.
pub fn sole_participant<C: RewardCalculator>(calc: &C, params: RewardParams) -> RewardParams {
    let weighted = calc
        .weighted_tokens(&params)
        .expect("denominators are non-zero");
    RewardParams {
        total_weighted_tokens: weighted,
        ..params
    }
}
