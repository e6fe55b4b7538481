//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is deep-merged on top, so
//! a config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml     # Site config (optional)
//! ├── content.toml    # Page copy (optional, see `content`)
//! └── assets/         # Copied verbatim to the output root
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! title = "QalimTech Farms"
//! lang = "en"
//! description = "Premium poultry and pork from Lagos, Nigeria"
//!
//! [navigation]
//! scroll_threshold = 50       # px scrolled before the navbar turns solid
//! sections = ["home", "about", "gallery", "products", "testimonials", "contact"]
//!
//! [gallery]
//! lightbox = true
//!
//! [contact]
//! outbox = "outbox/contact.jsonl"
//! newsletter_outbox = "outbox/newsletter.jsonl"
//! endpoint = ""               # browser POST target, empty = simulated
//!
//! [colors]
//! background = "#111827"
//! surface = "#1f2937"
//! text = "#f9fafb"
//! text_muted = "#9ca3af"
//! border = "#374151"
//! accent = "#f59e0b"
//! accent_hover = "#d97706"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::nav::DEFAULT_SCROLL_THRESHOLD;
use crate::section::SectionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

pub const CONFIG_FILE: &str = "config.toml";

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document metadata.
    pub site: SiteMeta,
    /// Scroll-spy and section order.
    pub navigation: NavigationConfig,
    /// Gallery behaviour.
    pub gallery: GalleryConfig,
    /// Where form submissions are stored by the CLI.
    pub contact: ContactConfig,
    /// CSS custom properties.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.navigation.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Validation(
                "navigation.scroll_threshold must be a non-negative number".into(),
            ));
        }
        if self.navigation.sections.is_empty() {
            return Err(ConfigError::Validation(
                "navigation.sections must not be empty".into(),
            ));
        }
        let mut seen = BTreeSet::new();
        for id in &self.navigation.sections {
            if !seen.insert(*id) {
                return Err(ConfigError::Validation(format!(
                    "navigation.sections lists \"{id}\" more than once"
                )));
            }
        }
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    pub title: String,
    pub lang: String,
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "QalimTech Farms".to_string(),
            lang: "en".to_string(),
            description: "Premium poultry and pork, ethically raised in Lagos, Nigeria"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Pixels scrolled before the navbar switches to its solid style.
    pub scroll_threshold: f64,
    /// Sections mounted on the page, in document order.
    pub sections: Vec<SectionId>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            sections: vec![
                SectionId::Home,
                SectionId::About,
                SectionId::Gallery,
                SectionId::Products,
                SectionId::Testimonials,
                SectionId::Contact,
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Click-to-enlarge overlay on gallery images.
    pub lightbox: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { lightbox: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// JSON-lines file receiving contact messages (relative to the source dir).
    pub outbox: String,
    /// JSON-lines file receiving newsletter signups.
    pub newsletter_outbox: String,
    /// URL the browser posts both forms to as JSON. Empty means the page
    /// simulates a successful submission.
    pub endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            outbox: "outbox/contact.jsonl".to_string(),
            newsletter_outbox: "outbox/newsletter.jsonl".to_string(),
            endpoint: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    /// Cards, form panels, scrolled navbar.
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    /// Headings, active nav link, buttons.
    pub accent: String,
    pub accent_hover: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#111827".to_string(),
            surface: "#1f2937".to_string(),
            text: "#f9fafb".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            accent: "#f59e0b".to_string(),
            accent_hover: "#d97706".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `file_name` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it is not TOML.
pub fn load_raw_toml(dir: &Path, file_name: &str) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join(file_name);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `config.toml` from the given directory on top of stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_toml(root, CONFIG_FILE)?;
    if overlay.is_none() {
        tracing::debug!(dir = %root.display(), "no config.toml, using stock defaults");
    }
    resolve_config(stock_defaults_value()?, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# QalimTech Farms site configuration
# ==================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
title = "QalimTech Farms"
lang = "en"
description = "Premium poultry and pork, ethically raised in Lagos, Nigeria"

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[navigation]
# Pixels scrolled before the navbar switches from transparent to solid.
scroll_threshold = 50.0

# Sections mounted on the page, top to bottom. Any subset of:
# home, about, products, gallery, testimonials, contact
sections = ["home", "about", "gallery", "products", "testimonials", "contact"]

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# Click a gallery image to view it enlarged.
lightbox = true

# ---------------------------------------------------------------------------
# Form submissions
# ---------------------------------------------------------------------------
[contact]
# Files the `contact` and `subscribe` commands append to (JSON lines).
outbox = "outbox/contact.jsonl"
newsletter_outbox = "outbox/newsletter.jsonl"

# URL the published page posts both forms to as JSON.
# Leave empty to have the page simulate a successful submission.
endpoint = ""

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#111827"
surface = "#1f2937"       # Cards, form panels, scrolled navbar
text = "#f9fafb"
text_muted = "#9ca3af"
border = "#374151"
accent = "#f59e0b"        # Headings, active nav link, buttons
accent_hover = "#d97706"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-accent: {accent};
    --color-accent-hover: {accent_hover};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        accent = colors.accent,
        accent_hover = colors.accent_hover,
    )
}
