//! Fixed scenarios: the worked example, denominator faults, and a small
//! multi-participant round assembled by the caller.

use draf_core::constants::EXAMPLE_REWARD;
use draf_core::error::{RewardError, ValidationError};
use draf_core::traits::RewardCalculator;
use draf_core::types::{Denominator, RatioPolicy, RewardParams};
use draf_core::validation::validate_params;
use draf_engine::DrafEngine;
use draf_tests::helpers::well_behaved;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Worked example
// ---------------------------------------------------------------------------

#[test]
fn worked_example_matches_reference_output() {
    let reward = DrafEngine::new()
        .compute_reward(&RewardParams::example())
        .unwrap();
    assert_eq!(reward, EXAMPLE_REWARD);
    assert_eq!(
        format!("Reward for the participant: {reward:.2}"),
        "Reward for the participant: -269661.00"
    );
}

#[test]
fn worked_example_passes_validation_despite_inverted_incentive() {
    // Every field is in range; only the share overflows.
    assert_eq!(validate_params(&RewardParams::example()), Ok(()));
    let b = DrafEngine::new().breakdown(&RewardParams::example()).unwrap();
    assert!(b.proportional_share.overflowed());
    assert!(b.reward < 0.0);
}

// ---------------------------------------------------------------------------
// Denominator faults
// ---------------------------------------------------------------------------

#[test]
fn every_zero_denominator_is_reported() {
    let engine = DrafEngine::new();
    for d in Denominator::ALL {
        let mut p = well_behaved(100.0, 6.0);
        match d {
            Denominator::MaxShare => p.max_share = 0.0,
            Denominator::MaxHoldingTime => p.max_holding_time = 0.0,
            Denominator::TotalWeightedTokens => p.total_weighted_tokens = 0.0,
        }
        assert_eq!(
            engine.compute_reward(&p),
            Err(RewardError::DivisionByZero { denominator: d })
        );
        assert_eq!(validate_params(&p), Err(ValidationError::ZeroDenominator(d)));
    }
}

#[test]
fn zero_max_share_fails_weighted_tokens_too() {
    let p = RewardParams {
        max_share: 0.0,
        ..well_behaved(100.0, 6.0)
    };
    assert_eq!(
        DrafEngine::new().weighted_tokens(&p),
        Err(RewardError::DivisionByZero {
            denominator: Denominator::MaxShare
        })
    );
}

// ---------------------------------------------------------------------------
// Caller-assembled round
// ---------------------------------------------------------------------------

#[test]
fn consistent_total_distributes_whole_pool() {
    let engine = DrafEngine::new();
    let mut rng = StdRng::seed_from_u64(0xD5AF);

    let participants: Vec<RewardParams> = (0..20)
        .map(|_| well_behaved(rng.gen_range(0.0..1_000.0), rng.gen_range(0.0..24.0)))
        .collect();

    let total: f64 = participants
        .iter()
        .map(|p| engine.weighted_tokens(p).unwrap())
        .sum();

    let distributed: f64 = participants
        .iter()
        .map(|p| {
            let p = RewardParams {
                total_weighted_tokens: total,
                ..*p
            };
            engine.compute_reward(&p).unwrap()
        })
        .sum();

    assert!(
        (distributed - 10_000.0).abs() < 1e-6,
        "distributed {distributed}"
    );
}

#[test]
fn larger_holders_get_larger_rewards_in_range() {
    let engine = DrafEngine::new();
    let small = engine.compute_reward(&well_behaved(100.0, 6.0)).unwrap();
    let large = engine.compute_reward(&well_behaved(900.0, 6.0)).unwrap();
    assert!(large > small);
}

#[test]
fn clamping_restores_positive_incentive() {
    let over = RewardParams {
        token_holding: 5_000.0,
        ..well_behaved(0.0, 6.0)
    };
    let unclamped = DrafEngine::new().breakdown(&over).unwrap();
    let clamped = DrafEngine::with_policy(RatioPolicy::Clamped)
        .breakdown(&over)
        .unwrap();
    assert!(unclamped.beta < over.beta_min);
    assert_eq!(clamped.beta, over.beta_min);
    assert!(clamped.net_incentive() > 0.0);
}
