//! Literal Tables Source Port - interface for loading per-attribute payoff tables.

use crate::domain::foundation::DomainError;
use crate::domain::payoff::LiteralTables;

/// Port for loading literal attribute tables.
///
/// Implementations validate strategy labels while loading; completeness of
/// the tables is checked later when the payoff model is built.
pub trait LiteralTablesSource {
    fn load_tables(&self) -> Result<LiteralTables, DomainError>;
}
