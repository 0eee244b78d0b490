//! Workbook presentation settings
//!
//! A [`Theme`] holds every font, color, width-independent size and row height
//! the Excel renderer applies. Reports name a [`StylePreset`]; the renderer
//! resolves it to a theme unless one is supplied explicitly.
//!
//! Themes can be tuned from a TOML file. Keys absent from the file keep the
//! value of the base theme they are laid over:
//!
//! ```toml
//! font_name = "SimSun"
//! header_fill = 0x2F5597
//! row_height = 60
//! ```

use std::path::Path;

use planbook_core::StylePreset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme loading error
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid theme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Theme encoding failed: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Presentation settings for a schedule workbook. Colors are `0xRRGGBB`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Font family for every cell; workbook default when unset
    pub font_name: Option<String>,
    pub body_size: f64,

    pub title_size: f64,
    pub title_font_color: Option<u32>,
    pub title_fill: Option<u32>,
    pub title_height: Option<f64>,

    pub subtitle_size: f64,
    pub subtitle_fill: Option<u32>,
    pub subtitle_height: Option<f64>,

    pub header_size: f64,
    pub header_font_color: u32,
    pub header_fill: u32,
    pub header_height: Option<f64>,

    pub group_size: f64,
    pub group_fill: u32,
    pub holiday_fill: u32,
    /// Bold the period column
    pub period_bold: bool,

    /// Height of every schedule data row
    pub row_height: f64,

    pub footnote_size: f64,
    pub footnote_color: u32,

    pub note_heading_size: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Filled dark-blue title banner on the default workbook font
    pub fn classic() -> Self {
        Self {
            font_name: None,
            body_size: 11.0,
            title_size: 18.0,
            title_font_color: Some(0xFFFFFF),
            title_fill: Some(0x2B579A),
            title_height: Some(30.0),
            subtitle_size: 12.0,
            subtitle_fill: Some(0xE7E6E6),
            subtitle_height: Some(25.0),
            header_size: 12.0,
            header_font_color: 0xFFFFFF,
            header_fill: 0x4472C4,
            header_height: Some(30.0),
            group_size: 11.0,
            group_fill: 0xD9E2F3,
            holiday_fill: 0xFFC000,
            period_bold: true,
            row_height: 80.0,
            footnote_size: 10.0,
            footnote_color: 0x666666,
            note_heading_size: 11.0,
        }
    }

    /// Microsoft YaHei throughout with a plain title
    pub fn yahei() -> Self {
        Self {
            font_name: Some("Microsoft YaHei".into()),
            body_size: 10.0,
            title_size: 16.0,
            title_font_color: None,
            title_fill: None,
            title_height: None,
            subtitle_size: 12.0,
            subtitle_fill: None,
            subtitle_height: None,
            header_size: 12.0,
            header_font_color: 0xFFFFFF,
            header_fill: 0x4F81BD,
            header_height: None,
            group_size: 10.0,
            group_fill: 0xD9E1F2,
            holiday_fill: 0xFFC000,
            period_bold: false,
            row_height: 80.0,
            footnote_size: 10.0,
            footnote_color: 0x666666,
            note_heading_size: 11.0,
        }
    }

    pub fn for_preset(preset: StylePreset) -> Self {
        match preset {
            StylePreset::Classic => Self::classic(),
            StylePreset::YaHei => Self::yahei(),
        }
    }

    /// Lay the keys of a TOML document over this theme
    pub fn overlay_toml(&self, text: &str) -> Result<Theme, ThemeError> {
        let overrides: toml::Table = toml::from_str(text)?;
        let mut merged = match toml::Value::try_from(self)? {
            toml::Value::Table(table) => table,
            _ => toml::Table::new(),
        };
        merged.extend(overrides);
        Ok(toml::Value::Table(merged).try_into()?)
    }

    /// Read a TOML theme file and lay it over `base`
    pub fn load_over(path: &Path, base: &Theme) -> Result<Theme, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        base.overlay_toml(&text)
    }

    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn presets_resolve() {
        assert_eq!(Theme::for_preset(StylePreset::Classic), Theme::classic());
        assert_eq!(Theme::for_preset(StylePreset::YaHei), Theme::yahei());
        assert_eq!(Theme::default(), Theme::classic());
    }

    #[test]
    fn presets_share_row_height() {
        assert_eq!(Theme::classic().row_height, 80.0);
        assert_eq!(Theme::yahei().row_height, 80.0);
        assert_eq!(Theme::yahei().font_name.as_deref(), Some("Microsoft YaHei"));
        assert!(Theme::classic().font_name.is_none());
    }

    #[test]
    fn overlay_replaces_only_given_keys() {
        let theme = Theme::classic()
            .overlay_toml("font_name = \"SimSun\"\nrow_height = 60\nheader_fill = 0x2F5597\n")
            .unwrap();

        assert_eq!(theme.font_name.as_deref(), Some("SimSun"));
        assert_eq!(theme.row_height, 60.0);
        assert_eq!(theme.header_fill, 0x2F5597);
        assert_eq!(theme.title_fill, Some(0x2B579A));
        assert_eq!(theme.group_fill, 0xD9E2F3);
    }

    #[test]
    fn overlay_keeps_unset_options_of_base() {
        let theme = Theme::yahei().overlay_toml("body_size = 9.5").unwrap();
        assert_eq!(theme.body_size, 9.5);
        assert_eq!(theme.title_fill, None);
        assert_eq!(theme.title_height, None);
        assert_eq!(theme.font_name.as_deref(), Some("Microsoft YaHei"));
    }

    #[test]
    fn empty_overlay_is_identity() {
        assert_eq!(Theme::yahei().overlay_toml("").unwrap(), Theme::yahei());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Theme::classic().overlay_toml("header_colour = 1").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = Theme::classic().overlay_toml("row_height = ").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let text = Theme::yahei().to_toml().unwrap();
        let parsed: Theme = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Theme::yahei());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "group_fill = 0xFCE4D6\nperiod_bold = true\n").unwrap();

        let theme = Theme::load_over(&path, &Theme::yahei()).unwrap();
        assert_eq!(theme.group_fill, 0xFCE4D6);
        assert!(theme.period_bold);
        assert_eq!(theme.header_fill, 0x4F81BD);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::load_over(&dir.path().join("absent.toml"), &Theme::classic()).unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
