//! Error types for reward allocation.
use thiserror::Error;

use crate::types::Denominator;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardError {
    #[error("division by zero: {denominator} is zero")] DivisionByZero { denominator: Denominator },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is not finite")] NonFinite { field: &'static str },
    #[error("{field} must be positive, got {value}")] NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")] Negative { field: &'static str, value: f64 },
    #[error("inverted bounds: {upper} < {lower}")] InvertedBounds { lower: &'static str, upper: &'static str },
    #[error("zero denominator: {0}")] ZeroDenominator(Denominator),
}

#[derive(Error, Debug)]
pub enum DrafError {
    #[error(transparent)] Reward(#[from] RewardError),
    #[error(transparent)] Validation(#[from] ValidationError),
    #[error("config: {0}")] Config(String),
}
