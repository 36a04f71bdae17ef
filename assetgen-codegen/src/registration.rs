//! The generated registration function and its per-asset statements.

use assetgen_core::{Asset, Config, ContentType, EscapedLiteral, escape};

use crate::builder::{CodeFragment, Renderable};

/// One `<param>->add(key, literal, content type, mtime);` statement.
#[derive(Debug, Clone)]
pub struct Registration<'a> {
    param: &'a str,
    key: EscapedLiteral,
    literal: EscapedLiteral,
    content_type: ContentType,
    modified: i64,
}

impl<'a> Registration<'a> {
    /// Escape `asset` for registration through `param`.
    pub fn new(param: &'a str, asset: &Asset) -> Self {
        Self {
            param,
            key: escape(asset.key.as_bytes()),
            literal: escape(&asset.content),
            content_type: asset.content_type,
            modified: asset.modified,
        }
    }

    /// Size of the escaped content literal in bytes.
    pub fn literal_len(&self) -> usize {
        self.literal.len()
    }
}

impl Renderable for Registration<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(quoted(
                &format!("{}->add(", self.param),
                &self.key,
                ",",
            )),
            CodeFragment::indent(vec![
                CodeFragment::line(quoted("", &self.literal, ",")),
                CodeFragment::line(format!("\"{}\",", self.content_type)),
                CodeFragment::line(format!("{});", self.modified)),
            ]),
        ]
    }
}

/// `prefix"literal"suffix`
fn quoted(prefix: &str, literal: &EscapedLiteral, suffix: &str) -> Vec<u8> {
    let mut line = Vec::with_capacity(prefix.len() + literal.len() + suffix.len() + 2);
    line.extend_from_slice(prefix.as_bytes());
    line.push(b'"');
    line.extend_from_slice(literal.as_bytes());
    line.push(b'"');
    line.extend_from_slice(suffix.as_bytes());
    line
}

/// Signature of the generated function: `void <name>(<type> <param>) {`.
#[derive(Debug, Clone)]
pub struct RegistrationFunction {
    pub name: String,
    pub registry_type: String,
    pub registry_param: String,
}

impl RegistrationFunction {
    pub fn new(name: impl Into<String>, config: &Config) -> Self {
        Self {
            name: name.into(),
            registry_type: config.registry_type.clone(),
            registry_param: config.registry_param.clone(),
        }
    }

    pub fn header(&self) -> String {
        format!(
            "void {}({} {}) {{",
            self.name, self.registry_type, self.registry_param
        )
    }

    pub fn footer(&self) -> &'static str {
        "}"
    }

    pub fn registration<'a>(&'a self, asset: &Asset) -> Registration<'a> {
        Registration::new(&self.registry_param, asset)
    }
}
