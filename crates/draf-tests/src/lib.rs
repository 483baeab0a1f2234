//! Integration test suite for the reward allocation formula.
//!
//! Checks the formula's observable properties end to end through
//! [`draf_engine::DrafEngine`]: pool exhaustion, holding-time monotonicity,
//! multiplier saturation, the zero-holding and zero-denominator cases, and the
//! worked example.

pub mod helpers;
