//! Configuration files for templates
//!
//! A config file bundles bindings, the default literal style and the missing
//! placeholder policy in one TOML document, so the same template can be
//! rendered against different value sets.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::style::{Span, Style};
use crate::template::Fallback;
use crate::value::{Bindings, Fragment, Primitive, Value};
use crate::RenderConfig;

/// Errors that can occur when loading or parsing config files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// What to render for a placeholder with no binding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingMode {
    /// Re-emit `{name}`
    #[default]
    Keep,
    /// Render nothing
    Blank,
    /// Render a `[missing: name]` badge
    Mark,
}

/// A binding value as written in TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Inline table: `{ text = "Hero", bold = true }`
    Styled {
        text: String,
        #[serde(flatten)]
        style: Style,
    },
}

impl From<&ConfigValue> for Value<Span> {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::Str(s) => Value::Primitive(Primitive::Str(s.clone())),
            ConfigValue::Int(n) => Value::Primitive(Primitive::Int(*n)),
            ConfigValue::Float(x) => Value::Primitive(Primitive::Float(*x)),
            ConfigValue::Bool(b) => Value::Primitive(Primitive::Bool(*b)),
            ConfigValue::Styled { text, style } => Value::Node(Span::styled(text, style.clone())),
        }
    }
}

/// A loaded config file
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional name for the config
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Style applied to literal text
    pub style: Style,
    pub missing: MissingMode,
    /// Style of the `mark` badge
    pub missing_style: Style,
    /// Binding values by placeholder name
    pub values: BTreeMap<String, ConfigValue>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            style: Style::default(),
            missing: MissingMode::default(),
            missing_style: default_missing_style(),
            values: BTreeMap::new(),
        }
    }
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
struct TomlConfig {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    missing: MissingMode,
    #[serde(default)]
    style: Style,
    missing_style: Option<Style>,
    #[serde(default)]
    values: BTreeMap<String, ConfigValue>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Badge colors used by `mark` when the config sets no `missing_style`
fn default_missing_style() -> Style {
    Style::new()
        .with_background("#f8d7da")
        .with_color("#721c24")
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        Ok(Config {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            style: parsed.style,
            missing: parsed.missing,
            missing_style: parsed.missing_style.unwrap_or_else(default_missing_style),
            values: parsed.values,
        })
    }

    /// Bindings for every configured value
    pub fn bindings(&self) -> Bindings<Span> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), Value::from(value)))
            .collect()
    }

    /// Fallback for the configured missing mode
    pub fn fallback(&self) -> Fallback<Span> {
        fallback_for(self.missing, &self.missing_style)
    }

    /// Render configuration with this config's style and missing mode
    pub fn render_config(&self) -> RenderConfig<Span> {
        RenderConfig::new()
            .with_default_style(self.style.clone())
            .with_fallback(self.fallback())
    }
}

/// Fallback implementing `mode`; `mark_style` styles the `mark` badge
pub fn fallback_for(mode: MissingMode, mark_style: &Style) -> Fallback<Span> {
    match mode {
        MissingMode::Keep => Fallback::keep(),
        MissingMode::Blank => Fallback::blank(),
        MissingMode::Mark => {
            let style = mark_style.clone();
            Fallback::new(move |name| {
                Fragment::Node(Span::styled(format!("[missing: {}]", name), style.clone()))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r##"
missing = "mark"

[metadata]
name = "Quest log"
description = "Messages for the quest screen"

[style]
color = "#333"
font_family = "monospace"

[missing_style]
color = "red"

[values]
name = "World"
count = 0
ratio = 0.5
ready = true
hero = { text = "Hero", bold = true, color = "green" }
"##;
        let config = Config::from_str(toml_str).expect("Should parse");
        assert_eq!(config.name, Some("Quest log".to_string()));
        assert_eq!(config.description, Some("Messages for the quest screen".to_string()));
        assert_eq!(config.missing, MissingMode::Mark);
        assert_eq!(config.style, Style::new().with_color("#333").with_font_family("monospace"));
        assert_eq!(config.missing_style, Style::new().with_color("red"));
        assert_eq!(config.values["name"], ConfigValue::Str("World".to_string()));
        assert_eq!(config.values["count"], ConfigValue::Int(0));
        assert_eq!(config.values["ratio"], ConfigValue::Float(0.5));
        assert_eq!(config.values["ready"], ConfigValue::Bool(true));
        assert_eq!(
            config.values["hero"],
            ConfigValue::Styled {
                text: "Hero".to_string(),
                style: Style::new().with_bold(true).with_color("green"),
            }
        );
    }

    #[test]
    fn test_defaults_when_sections_absent() {
        let config = Config::from_str("").expect("Should parse");
        assert_eq!(config.name, None);
        assert_eq!(config.missing, MissingMode::Keep);
        assert!(config.style.is_empty());
        assert_eq!(config.missing_style, default_missing_style());
        assert!(config.values.is_empty());
    }

    #[test]
    fn test_bindings_from_values() {
        let config = Config::from_str("[values]\nhp = 30\nhero = { text = \"Hero\" }").expect("Should parse");
        let bindings = config.bindings();
        assert_eq!(bindings.len(), 2);
        assert!(matches!(bindings.get("hp"), Some(Value::Primitive(Primitive::Int(30)))));
        assert!(matches!(
            bindings.get("hero"),
            Some(Value::Node(span)) if span.text == "Hero" && span.style.is_empty()
        ));
    }

    #[test]
    fn test_fallback_modes() {
        let style = Style::new().with_color("red");
        assert_eq!(
            fallback_for(MissingMode::Keep, &style).call("x"),
            Fragment::Text("{x}".to_string())
        );
        assert_eq!(
            fallback_for(MissingMode::Blank, &style).call("x"),
            Fragment::Text(String::new())
        );
        assert_eq!(
            fallback_for(MissingMode::Mark, &style).call("x"),
            Fragment::Node(Span::styled("[missing: x]", style.clone()))
        );
    }

    #[test]
    fn test_unknown_missing_mode_error() {
        let result = Config::from_str("missing = \"explode\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Config::from_str(invalid);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_error() {
        let result = Config::from_file(Path::new("/nonexistent/variable-text.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
