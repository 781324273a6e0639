use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HubError, Result};

/// A pinned entry appended after a card's chronological items.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedItem {
    #[serde(default)]
    pub title: String,
    pub url: String,
}

/// Display metadata for one card. Array position in the config is the
/// card's display order.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    pub id: String,
    pub title: String,
    pub short_title: String,
    /// Inline SVG markup, passed through untouched.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub bg_color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub fixed_items: Vec<FixedItem>,
}

/// Tuning for the compose step. Defaults match the generator's
/// historical behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Cap on the flat "new content" feed.
    pub recent_limit: usize,
    /// Only entries this many days old or newer reach the flat feed.
    pub recent_window_days: i64,
    /// Cap on chronological items per card; fixed items don't count.
    pub per_card_limit: usize,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self { recent_limit: 5, recent_window_days: 3, per_card_limit: 5 }
    }
}

/// The site configuration: announcements plus one `[[media]]` table per
/// card, in display order.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub announcements: Vec<String>,
    #[serde(default)]
    pub media: Vec<MediaConfig>,
    #[serde(default)]
    pub compose: ComposeConfig,
}

impl SiteConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| HubError::Config(e.to_string()))
    }
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    let raw = fs::read_to_string(path)?;
    SiteConfig::from_toml_str(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_tables_keep_authored_order() {
        let cfg = SiteConfig::from_toml_str(
            r#"
            announcements = ["latest news"]

            [[media]]
            id = "hellog"
            title = "hellog blog"
            short_title = "hellog"
            link = "https://example.com/hellog/"

            [[media.fixed_items]]
            title = "full archive"
            url = "https://example.com/hellog/archive.html"

            [[media]]
            id = "heldio"
            title = "heldio radio"
            short_title = "heldio"
            "#,
        )
        .unwrap();

        let ids: Vec<&str> = cfg.media.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["hellog", "heldio"]);
        assert_eq!(cfg.media[0].fixed_items.len(), 1);
        assert!(cfg.media[1].fixed_items.is_empty());
        assert_eq!(cfg.announcements.len(), 1);
    }

    #[test]
    fn compose_tuning_defaults_apply() {
        let cfg = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.compose.recent_limit, 5);
        assert_eq!(cfg.compose.recent_window_days, 3);
        assert_eq!(cfg.compose.per_card_limit, 5);

        let cfg = SiteConfig::from_toml_str("[compose]\nrecent_limit = 10\n").unwrap();
        assert_eq!(cfg.compose.recent_limit, 10);
        assert_eq!(cfg.compose.recent_window_days, 3);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = SiteConfig::from_toml_str("media = 3").unwrap_err();
        assert!(matches!(err, HubError::Config(_)));
    }
}
