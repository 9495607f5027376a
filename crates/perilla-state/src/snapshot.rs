//! Snapshot format and operations.

use std::collections::HashMap;
use std::path::Path;

use perilla_core::Parameters;
use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Named capture of a processor's scaled parameter values.
///
/// Snapshots are sparse and tolerant by design: values are keyed by
/// parameter name, [`apply`](Snapshot::apply) skips names it cannot
/// match, and extra keys are ignored. Old state restored into a newer
/// processor simply leaves unknown parameters at their current values.
///
/// # TOML Format
///
/// ```toml
/// name = "Gain Stage"
///
/// [params]
/// Gain = 3.25
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Name of the processor the snapshot was taken from.
    pub name: String,

    /// Scaled parameter values keyed by parameter name.
    #[serde(default)]
    pub params: HashMap<String, f32>,
}

impl Snapshot {
    /// Create a new empty snapshot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: HashMap::new(),
        }
    }

    /// Capture the scaled value of every parameter of `source`.
    pub fn capture<P: Parameters + ?Sized>(name: impl Into<String>, source: &P) -> Self {
        let mut snapshot = Self::new(name);
        for index in 0..source.param_count() {
            if let Some(param) = source.param(index) {
                snapshot.params.insert(param.name().to_string(), param.value());
            }
        }
        snapshot
    }

    /// Restore captured values into `target`.
    ///
    /// For each parameter of `target`, looks up its name in the
    /// snapshot; on a hit, sets the scaled value and snaps smoothing so
    /// restored state does not audibly glide in. Parameters without a
    /// matching key keep their current values. Never fails.
    ///
    /// Returns the number of parameters that were updated.
    pub fn apply<P: Parameters + ?Sized>(&self, target: &mut P) -> usize {
        let mut applied = 0;
        for index in 0..target.param_count() {
            if let Some(param) = target.param_mut(index)
                && let Some(&value) = self.params.get(param.name())
            {
                param.set_value(value);
                param.snap_to_value();
                applied += 1;
            }
        }
        applied
    }

    /// Add or overwrite a value by parameter name.
    pub fn insert(&mut self, name: impl Into<String>, value: f32) {
        self.params.insert(name.into(), value);
    }

    /// Get a captured value by parameter name.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.params.get(name).copied()
    }

    /// Number of captured values.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the snapshot holds no values.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Load a snapshot from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| StateError::read_file(path, e))?;
        let snapshot: Snapshot = toml::from_str(&content)?;
        Ok(snapshot)
    }

    /// Load a snapshot from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, StateError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the snapshot to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StateError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StateError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| StateError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the snapshot to a TOML string.
    pub fn to_toml(&self) -> Result<String, StateError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_empty() {
        let snapshot = Snapshot::new("Test");
        assert_eq!(snapshot.name, "Test");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut snapshot = Snapshot::new("Test");
        snapshot.insert("Gain", 3.25);
        assert_eq!(snapshot.get("Gain"), Some(3.25));
        assert_eq!(snapshot.get("Cutoff"), None);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn from_toml_parses_params_table() {
        let toml = r#"
name = "Gain Stage"

[params]
Gain = 3.25
"#;
        let snapshot = Snapshot::from_toml(toml).unwrap();
        assert_eq!(snapshot.name, "Gain Stage");
        assert_eq!(snapshot.get("Gain"), Some(3.25));
    }

    #[test]
    fn params_table_is_optional() {
        let snapshot = Snapshot::from_toml("name = \"Bare\"").unwrap();
        assert_eq!(snapshot.name, "Bare");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        let err = Snapshot::from_toml("[params]\nGain = 1.0").unwrap_err();
        assert!(matches!(err, StateError::TomlParse(_)));
    }

    #[test]
    fn to_toml_round_trips() {
        let mut original = Snapshot::new("Roundtrip");
        original.insert("Gain", 3.25);
        original.insert("Cutoff", 440.0);

        let toml = original.to_toml().unwrap();
        let parsed = Snapshot::from_toml(&toml).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn default_snapshot() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.name, "Untitled");
        assert!(snapshot.is_empty());
    }
}
