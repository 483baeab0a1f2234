//! # draf-core
//! Foundation types and traits for the Dynamic Reward Allocation Formula.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
pub mod validation;
