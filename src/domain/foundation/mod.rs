//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the river basin game.

mod attribute;
mod coalition;
mod errors;
mod outcome;
mod percentile;
mod role;
mod strategy;

pub use attribute::{Attribute, AttributeVector, AttributeWeights};
pub use coalition::Coalition;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use outcome::{Cell, Outcome, OutcomeSpace};
pub use percentile::RiskPercentile;
pub use role::Role;
pub use strategy::{Strategy, StrategySet};
