//! YAML literal tables adapter.
//!
//! ```yaml
//! upstream_strategies: [NP, PT, IL]
//! downstream_strategies: [DN, IL, RE]
//! entries:
//!   - upstream: PT
//!     downstream: RE
//!     upstream_attributes: { economic: -1, safety: 1, environmental: 2 }
//!     downstream_attributes: { economic: -2, safety: 3, environmental: 1 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::payoff::{LiteralTables, LiteralTablesDocument};
use crate::ports::LiteralTablesSource;

/// Literal tables stored as a YAML file.
#[derive(Debug, Clone)]
pub struct YamlTablesFile {
    path: PathBuf,
}

impl YamlTablesFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Writes `tables` to the file.
    pub fn save(&self, tables: &LiteralTables) -> Result<(), DomainError> {
        let yaml = serde_yaml::to_string(&tables.to_document()).map_err(|e| {
            DomainError::new(ErrorCode::IoError, format!("Failed to serialize tables: {}", e))
        })?;
        fs::write(&self.path, yaml).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, err: std::io::Error) -> DomainError {
        DomainError::new(ErrorCode::IoError, format!("{}: {}", self.path.display(), err))
            .with_detail("path", self.path.display().to_string())
    }
}

impl LiteralTablesSource for YamlTablesFile {
    fn load_tables(&self) -> Result<LiteralTables, DomainError> {
        let yaml = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let doc: LiteralTablesDocument = serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::validation("tables", format!("Malformed literal tables: {}", e))
                .with_detail("path", self.path.display().to_string())
        })?;
        let tables = LiteralTables::from_document(doc)?;
        tracing::debug!(
            path = %self.path.display(),
            outcomes = tables.space().len(),
            "Loaded literal tables"
        );
        Ok(tables)
    }
}

/// The built-in planting/levee/relocation example, needing no file.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinExampleTables;

impl LiteralTablesSource for BuiltinExampleTables {
    fn load_tables(&self) -> Result<LiteralTables, DomainError> {
        Ok(LiteralTables::river_example())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AttributeVector, Outcome};
    use tempfile::TempDir;

    #[test]
    fn loads_hand_written_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tables.yaml");
        fs::write(
            &path,
            "\
upstream_strategies: [A, B]
downstream_strategies: [X]
entries:
  - upstream: A
    downstream: X
    upstream_attributes: { economic: 1.0, safety: 2.0, environmental: 3.0 }
    downstream_attributes: { economic: 0.0, safety: 0.0, environmental: 0.0 }
",
        )
        .unwrap();

        let tables = YamlTablesFile::new(&path).load_tables().unwrap();
        assert_eq!(
            tables.get(&Outcome::new("A", "X")).unwrap().upstream,
            AttributeVector::new(1.0, 2.0, 3.0)
        );
        assert_eq!(tables.missing_outcomes(), vec![Outcome::new("B", "X")]);
    }

    #[test]
    fn saved_example_loads_back() {
        let dir = TempDir::new().unwrap();
        let file = YamlTablesFile::new(dir.path().join("example.yaml"));

        file.save(&LiteralTables::river_example()).unwrap();
        assert_eq!(file.load_tables().unwrap(), LiteralTables::river_example());
    }

    #[test]
    fn unknown_label_in_entry_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(
            &path,
            "\
upstream_strategies: [A]
downstream_strategies: [X]
entries:
  - upstream: A
    downstream: Z
    upstream_attributes: { economic: 1.0, safety: 2.0, environmental: 3.0 }
    downstream_attributes: { economic: 0.0, safety: 0.0, environmental: 0.0 }
",
        )
        .unwrap();

        let err = YamlTablesFile::new(&path).load_tables().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownStrategy);
    }

    #[test]
    fn repeated_entry_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("twice.yaml");
        fs::write(
            &path,
            "\
upstream_strategies: [A]
downstream_strategies: [X]
entries:
  - upstream: A
    downstream: X
    upstream_attributes: { economic: 1.0, safety: 2.0, environmental: 3.0 }
    downstream_attributes: { economic: 0.0, safety: 0.0, environmental: 0.0 }
  - upstream: A
    downstream: X
    upstream_attributes: { economic: 9.0, safety: 9.0, environmental: 9.0 }
    downstream_attributes: { economic: 0.0, safety: 0.0, environmental: 0.0 }
",
        )
        .unwrap();

        let err = YamlTablesFile::new(&path).load_tables().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn malformed_yaml_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "entries: 3\n").unwrap();

        let err = YamlTablesFile::new(&path).load_tables().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn builtin_example_is_complete() {
        let tables = BuiltinExampleTables.load_tables().unwrap();
        assert!(tables.missing_outcomes().is_empty());
    }
}
