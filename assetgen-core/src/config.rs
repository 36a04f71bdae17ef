//! Generator configuration, optionally loaded from a TOML file.
//!
//! ```toml
//! root = "nfsd/ui"
//! registry_type = "std::shared_ptr<RestRegistry>"
//! registry_param = "restreg"
//! ```

use std::path::{Path, PathBuf};

use miette::SourceSpan;
use serde::Deserialize;

use crate::{Error, Result};

/// Asset root used when none is configured.
pub const DEFAULT_ROOT: &str = "nfsd/ui";

/// C++ type of the registry handle parameter.
pub const DEFAULT_REGISTRY_TYPE: &str = "std::shared_ptr<RestRegistry>";

/// Name of the registry handle parameter.
pub const DEFAULT_REGISTRY_PARAM: &str = "restreg";

/// Settings that shape the generated function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory prefix stripped from every input path to form its key.
    pub root: PathBuf,
    /// Type of the single parameter of the generated function.
    pub registry_type: String,
    /// Name of that parameter; every registration calls `<param>->add(...)`.
    pub registry_param: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            registry_type: DEFAULT_REGISTRY_TYPE.to_string(),
            registry_param: DEFAULT_REGISTRY_PARAM.to_string(),
        }
    }
}

impl Config {
    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// Check a config assembled outside a file, such as one overridden by
    /// command-line flags. Errors carry no span.
    pub fn validated(self) -> Result<Self> {
        self.validate("", "command line")?;
        Ok(self)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::validation(
                "root must not be empty",
                src,
                filename,
                find_key_span(src, "root"),
            ));
        }

        if !is_c_identifier(&self.registry_param) {
            return Err(Error::validation(
                format!(
                    "registry_param '{}' is not a valid C++ identifier",
                    self.registry_param
                ),
                src,
                filename,
                find_key_span(src, "registry_param"),
            ));
        }

        if self.registry_type.trim().is_empty() {
            return Err(Error::validation(
                "registry_type must not be empty",
                src,
                filename,
                find_key_span(src, "registry_type"),
            ));
        }

        Ok(())
    }
}

/// Letters, digits and underscores, not starting with a digit.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Span of the first `key =` line, for pointing diagnostics at it.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_key = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            let indent = line.len() - trimmed.len();
            let len = line.trim_end().len() - indent;
            return Some(SourceSpan::from((offset + indent, len)));
        }
        offset += line.len();
    }
    None
}
