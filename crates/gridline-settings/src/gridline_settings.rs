//! Gridline Settings
//!
//! Grid behavior read from a TOML file:
//! - Classifier settings (boolean literals, how much evidence a column needs)
//! - Filter settings (term separator, wildcard, case sensitivity)
//! - Layout settings (hidden columns, highlight column, numeric format)
//!
//! Every section and key is optional; anything missing takes its default.

use anyhow::{Context, Result};
use gridline_filter::{FilterOptions, FilterSyntax};
use gridline_schema::{ClassifierOptions, LayoutOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod settings_file;

pub use settings_file::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridSettings {
    pub classifier: ClassifierOptions,
    pub filter: FilterSettings,
    pub layout: LayoutOptions,
}

impl GridSettings {
    /// Load from the default settings file. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&settings_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse settings from {:?}", path))
    }

    /// Like [`GridSettings::load`], but falls back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load grid settings, using defaults: {:#}", err);
            Self::default()
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        std::fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        tracing::info!("Saved grid settings to {:?}", path);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Separates several terms in one search box
    pub separator: char,
    /// Marks a term as a pattern
    pub wildcard: char,
    pub case_sensitive: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        let syntax = FilterSyntax::default();
        Self {
            separator: syntax.separator,
            wildcard: syntax.wildcard,
            case_sensitive: FilterOptions::default().case_sensitive,
        }
    }
}

impl FilterSettings {
    pub fn syntax(&self) -> FilterSyntax {
        FilterSyntax {
            separator: self.separator,
            wildcard: self.wildcard,
        }
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            case_sensitive: self.case_sensitive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_schema::BooleanEvidence;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(GridSettings::from_toml_str("").unwrap(), GridSettings::default());
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [classifier]
            evidence = "any_literal"

            [classifier.boolean_tokens]
            true_value = "Y"
            false_value = "N"

            [filter]
            separator = "|"
            case_sensitive = true
        "#;
        let settings = GridSettings::from_toml_str(toml).unwrap();

        assert_eq!(settings.classifier.evidence, BooleanEvidence::AnyLiteral);
        assert_eq!(settings.classifier.boolean_tokens.true_value, "Y");
        assert_eq!(settings.classifier.boolean_tokens.indeterminate_value, "FALSE");
        assert_eq!(settings.filter.syntax().separator, '|');
        assert_eq!(settings.filter.syntax().wildcard, '%');
        assert!(settings.filter.options().case_sensitive);
        assert_eq!(settings.layout, LayoutOptions::default());
    }

    #[test]
    fn test_syntax_from_settings() {
        let settings = FilterSettings {
            wildcard: '*',
            case_sensitive: true,
            ..Default::default()
        };
        assert_eq!(settings.syntax().wildcard, '*');
        assert_eq!(settings.syntax().separator, ';');
        assert!(settings.options().case_sensitive);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        assert!(GridSettings::from_toml_str("[filter]\nseparator = \"||\"").is_err());
        assert!(GridSettings::from_toml_str("[classifier]\nevidence = \"most\"").is_err());
    }

    #[test]
    fn test_settings_file_location() {
        if let Ok(path) = settings_file() {
            assert!(path.ends_with("gridline/grid.toml"));
        }
    }
}
