use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{MediaConfig, SiteConfig};
use crate::data::{Card, CardContentItem, ContentItem, Dataset};
use crate::error::{HubError, Result};

/// One row of the editorial content log: a published piece tagged with
/// its source channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub media: String,
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// Read the content log (a JSON list of feed entries).
pub fn load_feed_entries(path: &Path) -> Result<Vec<FeedEntry>> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| HubError::Config(format!("malformed content log: {e}")))
}

/// Build a complete dataset revision from the site config and the
/// content log. The structure is rebuilt from scratch every run; there
/// are no partial edits. `now` anchors the recency window so callers
/// (and tests) stay deterministic.
pub fn compose(config: &SiteConfig, entries: &[FeedEntry], now: DateTime<Utc>) -> Result<Dataset> {
    let opts = &config.compose;
    let known: HashSet<&str> = config.media.iter().map(|m| m.id.as_str()).collect();

    // Newest first; the sort is stable, so same-instant entries keep
    // their authored order.
    let mut ordered: Vec<&FeedEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if known.contains(entry.media.as_str()) {
            ordered.push(entry);
        } else {
            warn!(
                media = %entry.media,
                title = %entry.title,
                "entry matches no configured media, skipping"
            );
        }
    }
    ordered.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let cutoff = now - Duration::days(opts.recent_window_days);
    let new_content: Vec<ContentItem> = ordered
        .iter()
        .filter(|e| e.published_at >= cutoff)
        .take(opts.recent_limit)
        .map(|e| ContentItem { media: e.media.clone(), title: e.title.clone(), url: e.url.clone() })
        .collect();

    let cards: Vec<Card> = config
        .media
        .iter()
        .map(|m| build_card(m, &ordered, opts.per_card_limit))
        .collect();

    info!(
        entries = ordered.len(),
        recent = new_content.len(),
        cards = cards.len(),
        "composed dataset revision"
    );

    Dataset::new(config.announcements.clone(), new_content, cards)
}

// A card carries its newest entries regardless of the flat feed's
// recency window, then the configured pinned items.
fn build_card(media: &MediaConfig, ordered: &[&FeedEntry], per_card_limit: usize) -> Card {
    let mut items: Vec<CardContentItem> = ordered
        .iter()
        .filter(|e| e.media == media.id)
        .take(per_card_limit)
        .map(|e| CardContentItem { title: e.title.clone(), url: e.url.clone(), is_fixed: None })
        .collect();

    items.extend(media.fixed_items.iter().map(|f| CardContentItem {
        title: f.title.clone(),
        url: f.url.clone(),
        is_fixed: Some(true),
    }));

    Card {
        id: media.id.clone(),
        title: media.title.clone(),
        short_title: media.short_title.clone(),
        icon: media.icon.clone(),
        bg_color: media.bg_color.clone(),
        description: media.description.clone(),
        link: media.link.clone(),
        content_items: items,
    }
}
