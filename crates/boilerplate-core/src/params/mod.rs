//! Parameter dictionary consumed by the template engine
//!
//! The dictionary is a flat map from parameter name to scalar value. Values
//! derived from other parameters are computed once by
//! [`ParameterDictionary::with_derived_values`] and stored as ordinary
//! entries, so resolution never special-cases them.

pub(crate) mod spec;
mod validate;

pub use spec::ParamSpec;
pub use validate::{validate_port, validate_project_name};

use crate::error::{BoilerplateError, Result};
use std::path::Path;
use toml::{Table, Value};

/// Name of the parameter every archetype is rooted at
pub const PROJECT_NAME: &str = "ProjectName";
/// Package-safe variant of the project name (`-` removed)
pub const PROJECT_PACKAGE_NAME: &str = "ProjectPackageName";
/// Environment variable prefix (upper-cased project name)
pub const ENV_PREFIX: &str = "EnvPrefix";

/// Mapping of parameter name to scalar value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterDictionary {
    values: Table,
}

impl ParameterDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a value only if it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy every entry of `other` into `self`; `other` wins on conflicts
    pub fn merge(&mut self, other: ParameterDictionary) {
        for (key, value) in other.values {
            self.values.insert(key, value);
        }
    }

    /// Parse a flat TOML document of scalar values
    ///
    /// Arrays and tables are rejected: every parameter must be usable as a
    /// placeholder substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let values: Table = toml::from_str(content)
            .map_err(|e| BoilerplateError::ParamsInvalid(e.to_string()))?;

        for (key, value) in &values {
            if matches!(value, Value::Array(_) | Value::Table(_)) {
                return Err(BoilerplateError::ParamsInvalid(format!(
                    "parameter '{}' must be a string, number or boolean",
                    key
                )));
            }
        }

        Ok(Self { values })
    }

    /// Load a params file (TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BoilerplateError::filesystem(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            BoilerplateError::ParamsInvalid(reason) => {
                BoilerplateError::ParamsInvalid(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }

    /// Parse a `KEY=VALUE` assignment
    ///
    /// The value is always taken as a string; everything after the first `=`
    /// belongs to it.
    pub fn parse_assignment(assignment: &str) -> Result<(String, String)> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            BoilerplateError::ParamsInvalid(format!(
                "expected KEY=VALUE, got '{}'",
                assignment
            ))
        })?;

        let key = key.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(BoilerplateError::ParamsInvalid(format!(
                "invalid parameter name '{}'",
                key
            )));
        }

        Ok((key.to_string(), value.to_string()))
    }

    /// Fill in values derived from other parameters
    ///
    /// Only absent keys are filled; caller-supplied values always win.
    /// - `ProjectPackageName`: `ProjectName` without `-`
    /// - `EnvPrefix`: `ProjectName` upper-cased, `-` replaced by `_`
    /// - `ServerShortDesc` / `ServerLongDesc`: copied from the project descriptions
    pub fn with_derived_values(mut self) -> Self {
        if let Some(name) = self.get_str(PROJECT_NAME).map(str::to_string) {
            self.insert_if_absent(PROJECT_PACKAGE_NAME, package_name(&name));
            self.insert_if_absent(ENV_PREFIX, env_prefix(&name));
        }

        for (target, source) in [
            ("ServerShortDesc", "ProjectShortDesc"),
            ("ServerLongDesc", "ProjectLongDesc"),
        ] {
            if let Some(value) = self.get(source).cloned() {
                self.insert_if_absent(target, value);
            }
        }

        self
    }

    fn insert_if_absent(&mut self, key: &str, value: impl Into<Value>) {
        if !self.values.contains_key(key) {
            self.values.insert(key.to_string(), value.into());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterDictionary
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterDictionary::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Package-safe form of a project name
pub fn package_name(project_name: &str) -> String {
    project_name.replace('-', "")
}

/// Environment variable prefix for a project name
pub fn env_prefix(project_name: &str) -> String {
    project_name.replace('-', "_").to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boilerplate_testkit::temp_dir_in_workspace;

    #[test]
    fn test_insert_and_get() {
        let mut params = ParameterDictionary::new();
        assert!(params.is_empty());
        params.insert("ProjectName", "demo");
        params.insert("Port", 8080);

        assert_eq!(params.get_str("ProjectName"), Some("demo"));
        assert_eq!(params.get("Port"), Some(&Value::Integer(8080)));
        assert_eq!(params.get_str("Port"), None);
        assert_eq!(params.len(), 2);
        assert!(params.contains_key("Port"));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut params = ParameterDictionary::new().with("ProjectName", "old");
        let previous = params.insert("ProjectName", "new");
        assert_eq!(previous, Some(Value::String("old".to_string())));
        assert_eq!(params.get_str("ProjectName"), Some("new"));
    }

    #[test]
    fn test_merge_right_side_wins() {
        let mut base = ParameterDictionary::new()
            .with("ProjectName", "base")
            .with("OwnerName", "Owner");
        base.merge(ParameterDictionary::new().with("ProjectName", "override"));
        assert_eq!(base.get_str("ProjectName"), Some("override"));
        assert_eq!(base.get_str("OwnerName"), Some("Owner"));
    }

    #[test]
    fn test_derived_values() {
        let params = ParameterDictionary::new()
            .with("ProjectName", "my-cool-service")
            .with("ProjectShortDesc", "short")
            .with_derived_values();

        assert_eq!(params.get_str(PROJECT_PACKAGE_NAME), Some("mycoolservice"));
        assert_eq!(params.get_str(ENV_PREFIX), Some("MY_COOL_SERVICE"));
        assert_eq!(params.get_str("ServerShortDesc"), Some("short"));
        assert!(!params.contains_key("ServerLongDesc"));
    }

    #[test]
    fn test_derived_values_never_override() {
        let params = ParameterDictionary::new()
            .with("ProjectName", "demo-svc")
            .with(ENV_PREFIX, "CUSTOM")
            .with_derived_values();

        assert_eq!(params.get_str(ENV_PREFIX), Some("CUSTOM"));
        assert_eq!(params.get_str(PROJECT_PACKAGE_NAME), Some("demosvc"));
    }

    #[test]
    fn test_derived_values_without_project_name() {
        let params = ParameterDictionary::new().with_derived_values();
        assert!(params.is_empty());
    }

    #[test]
    fn test_from_toml_str() {
        let params = ParameterDictionary::from_toml_str(
            r#"
ProjectName = "demo"
DefaultServerPort = 8080
Verbose = true
"#,
        )
        .unwrap();
        assert_eq!(params.get_str("ProjectName"), Some("demo"));
        assert_eq!(params.get("DefaultServerPort"), Some(&Value::Integer(8080)));
        assert_eq!(params.get("Verbose"), Some(&Value::Boolean(true)));
    }

    #[test]
    fn test_from_toml_str_rejects_arrays_and_tables() {
        let err = ParameterDictionary::from_toml_str("Authors = [\"a\"]").unwrap_err();
        assert!(err.to_string().contains("Authors"));

        let err = ParameterDictionary::from_toml_str("[nested]\nkey = 1").unwrap_err();
        assert!(matches!(err, BoilerplateError::ParamsInvalid(_)));
    }

    #[test]
    fn test_from_toml_str_rejects_invalid_toml() {
        let err = ParameterDictionary::from_toml_str("ProjectName = ").unwrap_err();
        assert!(matches!(err, BoilerplateError::ParamsInvalid(_)));
    }

    #[test]
    fn test_from_file() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("params.toml");
        std::fs::write(&path, "ProjectName = \"from-file\"\n").unwrap();

        let params = ParameterDictionary::from_file(&path).unwrap();
        assert_eq!(params.get_str("ProjectName"), Some("from-file"));
    }

    #[test]
    fn test_from_file_missing() {
        let temp = temp_dir_in_workspace();
        let err = ParameterDictionary::from_file(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, BoilerplateError::Filesystem { .. }));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            ParameterDictionary::parse_assignment("ProjectPackage=example.com/a=b").unwrap(),
            ("ProjectPackage".to_string(), "example.com/a=b".to_string())
        );
        assert_eq!(
            ParameterDictionary::parse_assignment("ProjectLongDesc=").unwrap(),
            ("ProjectLongDesc".to_string(), String::new())
        );
        assert!(ParameterDictionary::parse_assignment("no-equals").is_err());
        assert!(ParameterDictionary::parse_assignment("=value").is_err());
        assert!(ParameterDictionary::parse_assignment("bad key=value").is_err());
    }

    #[test]
    fn test_from_iterator() {
        let params: ParameterDictionary =
            [("ProjectName", "demo"), ("OwnerName", "me")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["OwnerName", "ProjectName"]);
    }
}
