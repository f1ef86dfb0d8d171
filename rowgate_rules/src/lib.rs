//! Loader for rowgate rule documents (YAML/TOML formats).
//!
//! This crate turns a declarative rule file into a compiled `RuleSet`:
//! the document is parsed into `rowgate_core::RuleDocument`, then every
//! pattern is compiled once, before any row is processed. Loading
//! failures are fatal to a run; they are the only fatal errors in the
//! engine.
//!
//! # Example
//!
//! ```rust
//! use rowgate_rules::{RuleSet, parse_yaml};
//!
//! let yaml = r#"
//! fields:
//!   title:
//!     required: true
//!     type: string
//!   issued:
//!     type: date
//!     regex: '\d{4}-\d{2}-\d{2}'
//! "#;
//!
//! let doc = parse_yaml(yaml).expect("failed to parse rules");
//! let rules = RuleSet::compile(doc).expect("failed to compile rules");
//! assert_eq!(rules.len(), 2);
//! ```

use regex::Regex;
use rowgate_core::{FieldType, RuleDocument};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a rule set.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Rule file does not exist
    #[error("Rule file not found: {0}")]
    NotFound(String),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML rules: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML rules: {0}")]
    Toml(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A rule declared a pattern that is not a valid regex
    #[error("Invalid regex for field '{field}': {error}")]
    InvalidPattern {
        /// Field whose rule carries the broken pattern
        field: String,
        /// Regex compiler diagnostic
        error: String,
    },

    /// Unsupported rule file format
    #[error("Unsupported rule file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, RulesError>;

/// Supported rule file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// One field's contract with its pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Whether a failure of this field discards the whole row
    pub required: bool,

    /// Expected semantic type
    pub field_type: FieldType,

    /// Compiled pattern, anchored over the whole canonical text
    pub pattern: Option<Regex>,

    /// The pattern as declared in the document, for reporting
    pub pattern_text: Option<String>,
}

/// A compiled rule set: field name → compiled rule.
///
/// Built once per validation run and immutable afterward. Type dispatch
/// and pattern compilation are resolved here, not re-derived per row.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, CompiledRule>,
}

impl RuleSet {
    /// Creates a rule set with no rules. Every row passes unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles a parsed rule document.
    ///
    /// Patterns are anchored as `^(?:pattern)$` so a rule regex must
    /// match the entire canonical text of a value, not a substring.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidPattern` if any declared regex fails
    /// to compile; a syntactically broken document aborts the run.
    pub fn compile(doc: RuleDocument) -> Result<Self> {
        let mut rules = HashMap::with_capacity(doc.fields.len());

        for (name, rule) in doc.fields {
            let pattern = match &rule.pattern {
                Some(text) => {
                    let anchored = format!("^(?:{text})$");
                    let regex =
                        Regex::new(&anchored).map_err(|e| RulesError::InvalidPattern {
                            field: name.clone(),
                            error: e.to_string(),
                        })?;
                    Some(regex)
                }
                None => None,
            };

            rules.insert(
                name,
                CompiledRule {
                    required: rule.required,
                    field_type: rule.field_type,
                    pattern,
                    pattern_text: rule.pattern,
                },
            );
        }

        Ok(Self { rules })
    }

    /// Looks up the rule for a field, if any.
    pub fn get(&self, field: &str) -> Option<&CompiledRule> {
        self.rules.get(field)
    }

    /// Returns the number of ruled fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no field carries a rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over `(field name, rule)` pairs. Order is unspecified;
    /// validation outcomes do not depend on it.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CompiledRule)> {
        self.rules.iter()
    }
}

/// Parse a rule document from a YAML string.
///
/// # Example
///
/// ```rust
/// use rowgate_rules::parse_yaml;
///
/// let doc = parse_yaml("fields:\n  title:\n    required: true\n").unwrap();
/// assert!(doc.fields["title"].required);
/// ```
pub fn parse_yaml(content: &str) -> Result<RuleDocument> {
    let doc: RuleDocument = serde_yaml_ng::from_str(content)?;
    Ok(doc)
}

/// Parse a rule document from a TOML string.
///
/// # Example
///
/// ```rust
/// use rowgate_rules::parse_toml;
///
/// let toml = r#"
/// [fields.title]
/// required = true
/// type = "string"
/// "#;
///
/// let doc = parse_toml(toml).unwrap();
/// assert!(doc.fields["title"].required);
/// ```
pub fn parse_toml(content: &str) -> Result<RuleDocument> {
    let doc: RuleDocument =
        toml::from_str(content).map_err(|e| RulesError::Toml(e.to_string()))?;
    Ok(doc)
}

/// Detect the rule file format from its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `RuleFormat::Yaml`
/// * `.toml` → `RuleFormat::Toml`
///
/// # Errors
///
/// Returns `RulesError::InvalidExtension` if the file has no extension.
/// Returns `RulesError::UnsupportedFormat` if the extension is not
/// recognized.
pub fn detect_format(path: &Path) -> Result<RuleFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(RulesError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(RuleFormat::Yaml),
        "toml" => Ok(RuleFormat::Toml),
        other => Err(RulesError::UnsupportedFormat(other.to_string())),
    }
}

/// Load and compile a rule set from a file, detecting the format from
/// the extension.
///
/// # Errors
///
/// A missing file is `RulesError::NotFound`; a structurally malformed
/// document surfaces as `Yaml`/`Toml`; a broken pattern as
/// `InvalidPattern`. All are fatal to the run.
///
/// # Example
///
/// ```no_run
/// use rowgate_rules::load_file;
/// use std::path::Path;
///
/// let rules = load_file(Path::new("configs/validation_rules.yaml")).unwrap();
/// println!("loaded {} field rule(s)", rules.len());
/// ```
pub fn load_file(path: &Path) -> Result<RuleSet> {
    if !path.exists() {
        return Err(RulesError::NotFound(path.display().to_string()));
    }

    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    let doc = match format {
        RuleFormat::Yaml => parse_yaml(&content)?,
        RuleFormat::Toml => parse_toml(&content)?,
    };

    RuleSet::compile(doc)
}
