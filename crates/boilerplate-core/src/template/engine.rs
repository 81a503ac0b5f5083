//! Template engine implementation

use crate::params::ParameterDictionary;
use crate::template::error::TemplateError;
use crate::template::tokenize::{Segment, TokenStream};
use toml::Value;

/// Template engine resolving placeholders against a parameter dictionary
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a template with the given parameters
    pub fn render(
        &self,
        template: &str,
        params: &ParameterDictionary,
    ) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(template.len());

        for segment in TokenStream::new(template) {
            match segment? {
                Segment::Text(text) => output.push_str(text),
                Segment::Placeholder { expr, line } => {
                    let key = parse_key(expr, line)?;
                    let value = params
                        .get(key)
                        .ok_or_else(|| TemplateError::UndefinedKey {
                            key: key.to_string(),
                            line,
                        })?;
                    output.push_str(&stringify_value(value, key, line)?);
                }
            }
        }

        Ok(output)
    }
}

/// Convenience function to render a template
pub fn render(template: &str, params: &ParameterDictionary) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, params)
}

/// Validate a placeholder expression and return the parameter name
fn parse_key(expr: &str, line: usize) -> Result<&str, TemplateError> {
    let key = expr.trim();

    if key.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: "Empty placeholder".to_string(),
            line,
        });
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(TemplateError::MalformedSyntax {
            message: format!(
                "Invalid placeholder '{{{{{}}}}}': names may only contain ASCII letters, digits and '_'",
                key
            ),
            line,
        });
    }

    Ok(key)
}

/// Stringify a scalar parameter for template output
fn stringify_value(value: &Value, key: &str, line: usize) -> Result<String, TemplateError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(dt) => Ok(dt.to_string()),
        Value::Array(_) | Value::Table(_) => Err(TemplateError::NonScalarValue {
            key: key.to_string(),
            line,
        }),
    }
}
