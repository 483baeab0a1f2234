//! Opt-in validation pre-step for reward parameters.
//!
//! The calculator itself only rejects zero denominators. Callers that want a
//! descriptive configuration error instead of a nonsensical reward run
//! [`validate_params`] first.
//!
//! Contract: negative `token_holding` or `holding_time` are accepted by the
//! calculator and rejected here.

use crate::error::ValidationError;
use crate::types::{Denominator, RewardParams};

/// Check every constraint on `params`, reporting the first violation.
///
/// Order: finiteness, zero denominators, positivity, non-negativity, bounds.
pub fn validate_params(params: &RewardParams) -> Result<(), ValidationError> {
    for (field, value) in params.fields() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field });
        }
    }

    check_denominators(params)?;

    require_positive("reward_pool", params.reward_pool)?;
    for d in Denominator::ALL {
        require_positive(d.field_name(), d.value_in(params))?;
    }

    require_non_negative("token_holding", params.token_holding)?;
    require_non_negative("holding_time", params.holding_time)?;

    if params.beta_max < params.beta_min {
        return Err(ValidationError::InvertedBounds {
            lower: "beta_min",
            upper: "beta_max",
        });
    }
    if params.alpha_max < params.alpha_min {
        return Err(ValidationError::InvertedBounds {
            lower: "alpha_min",
            upper: "alpha_max",
        });
    }

    Ok(())
}

/// Reject any zero divisor.
pub fn check_denominators(params: &RewardParams) -> Result<(), ValidationError> {
    match Denominator::ALL
        .into_iter()
        .find(|d| d.value_in(params) == 0.0)
    {
        Some(d) => Err(ValidationError::ZeroDenominator(d)),
        None => Ok(()),
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative { field, value })
    }
}
