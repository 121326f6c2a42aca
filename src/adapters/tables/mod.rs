//! Literal tables adapters.

mod yaml_tables_file;

pub use yaml_tables_file::{BuiltinExampleTables, YamlTablesFile};
