use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::labels::LabelRule;
use crate::stats::ttest::TTestVariant;

pub const DEFAULT_ID_COLUMN: &str = "Name";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no scoring methods configured")]
    NoMethods,
    #[error("scoring method name is empty")]
    EmptyMethodName,
    #[error("duplicate scoring method: {0}")]
    DuplicateMethod(String),
    #[error("identifier column name is empty")]
    EmptyIdColumn,
    #[error("invalid color: {0} (use a named color or #rrggbb)")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let v = value.trim().to_ascii_lowercase();
        let named = match v.as_str() {
            "blue" => Some(Color::rgb(0, 0, 255)),
            "green" => Some(Color::rgb(0, 128, 0)),
            "red" => Some(Color::rgb(255, 0, 0)),
            "black" => Some(Color::rgb(0, 0, 0)),
            "orange" => Some(Color::rgb(255, 165, 0)),
            "purple" => Some(Color::rgb(128, 0, 128)),
            "cyan" => Some(Color::rgb(0, 191, 191)),
            "magenta" => Some(Color::rgb(191, 0, 191)),
            "gray" | "grey" => Some(Color::rgb(128, 128, 128)),
            _ => None,
        };
        if let Some(color) = named {
            return Ok(color);
        }
        let hex = v
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ConfigError::InvalidColor(value.to_string()))
        };
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[serde(alias = "-")]
    Solid,
    #[serde(alias = "--")]
    Dashed,
    #[serde(alias = "-.")]
    DashDot,
    #[serde(alias = ":")]
    Dotted,
}

impl LineStyle {
    /// Dash length and gap in pixels; `None` for strokes without dashes.
    pub fn dash(self) -> Option<(u32, u32)> {
        match self {
            LineStyle::Solid | LineStyle::Dotted => None,
            LineStyle::Dashed => Some((10, 6)),
            LineStyle::DashDot => Some((10, 8)),
        }
    }

    pub fn has_dots(self) -> bool {
        matches!(self, LineStyle::DashDot | LineStyle::Dotted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodStyle {
    pub name: String,
    pub color: Color,
    pub line_style: LineStyle,
}

impl MethodStyle {
    pub fn new(name: &str, color: Color, line_style: LineStyle) -> Self {
        Self {
            name: name.to_string(),
            color,
            line_style,
        }
    }

    /// Style taken from the fallback palette by position.
    pub fn from_palette(name: &str, index: usize) -> Self {
        const COLORS: [Color; 8] = [
            Color::rgb(0, 0, 255),
            Color::rgb(0, 128, 0),
            Color::rgb(255, 0, 0),
            Color::rgb(255, 165, 0),
            Color::rgb(128, 0, 128),
            Color::rgb(0, 191, 191),
            Color::rgb(191, 0, 191),
            Color::rgb(128, 128, 128),
        ];
        const STYLES: [LineStyle; 4] = [
            LineStyle::Dashed,
            LineStyle::Solid,
            LineStyle::DashDot,
            LineStyle::Dotted,
        ];
        Self::new(
            name,
            COLORS[index % COLORS.len()],
            STYLES[index % STYLES.len()],
        )
    }
}

pub fn default_methods() -> Vec<MethodStyle> {
    vec![
        MethodStyle::new("Vina", Color::rgb(0, 0, 255), LineStyle::Dashed),
        MethodStyle::new("PLANET", Color::rgb(0, 128, 0), LineStyle::Solid),
        MethodStyle::new("Autodock-gpu", Color::rgb(255, 0, 0), LineStyle::DashDot),
    ]
}

/// Everything a run needs to know about the dataset layout and the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub id_column: String,
    pub sheet: Option<String>,
    pub methods: Vec<MethodStyle>,
    pub label_rule: LabelRule,
    pub ttest: TTestVariant,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            id_column: DEFAULT_ID_COLUMN.to_string(),
            sheet: None,
            methods: default_methods(),
            label_rule: LabelRule::default(),
            ttest: TTestVariant::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AnalysisConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_column.trim().is_empty() {
            return Err(ConfigError::EmptyIdColumn);
        }
        if self.methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }
        let mut seen = BTreeSet::new();
        for method in &self.methods {
            if method.name.trim().is_empty() {
                return Err(ConfigError::EmptyMethodName);
            }
            if !seen.insert(method.name.as_str()) {
                return Err(ConfigError::DuplicateMethod(method.name.clone()));
            }
        }
        Ok(())
    }

    /// Replaces the method list, keeping configured styles for names that already exist.
    pub fn with_method_names(mut self, names: &[String]) -> Self {
        if names.is_empty() {
            return self;
        }
        let methods = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                self.methods
                    .iter()
                    .find(|m| &m.name == name)
                    .cloned()
                    .unwrap_or_else(|| MethodStyle::from_palette(name, idx))
            })
            .collect();
        self.methods = methods;
        self
    }

    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
