//! # draf-engine — Dynamic Reward Allocation Formula.
//!
//! A participant's reward is their slice of a shared pool, weighted by:
//! - **Proportional share**: `token_holding / max_share`, unclamped by default.
//! - **Progressive bonus** (beta): favours small holders, linear in the share.
//! - **Regressive penalty** (alpha): penalises large holders, linear in the share.
//! - **Holding-time multiplier**: `min(holding_time / max_holding_time, 1)`.
//!
//! `weighted = holding * (1 + beta - alpha) * (1 + multiplier)` and
//! `reward = pool * weighted / total_weighted_tokens`.

pub mod curve;
pub mod engine;

pub use curve::{lerp, lerp_descending};
pub use engine::DrafEngine;
