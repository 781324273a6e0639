use serde::{Deserialize, Serialize};

use crate::error::{HubError, Result};

// --- Document shape ---
//
// Field names follow the portal's existing camelCase document; the data
// layer treats `icon` as an opaque markup string and never parses it.

/// One entry in the flat "new content" feed. `media` tags the source
/// channel and correlates the entry to a card id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub media: String,
    pub title: String,
    pub url: String,
}

/// One entry on a card. Pinned entries (`isFixed: true`) are
/// non-chronological links such as "see full archive" and may carry an
/// empty title or the `"#"` placeholder url.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardContentItem {
    pub title: String,
    pub url: String,
    #[serde(rename = "isFixed", skip_serializing_if = "Option::is_none")]
    pub is_fixed: Option<bool>,
}

impl CardContentItem {
    pub fn fixed(&self) -> bool {
        self.is_fixed == Some(true)
    }
}

/// A topical section: display metadata plus its recent items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(rename = "shortTitle")]
    pub short_title: String,
    pub icon: String,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "contentItems")]
    pub content_items: Vec<CardContentItem>,
}

/// The whole content snapshot. Immutable once constructed; an editorial
/// update replaces the value wholesale. Fields are private so the only
/// way in is a validating constructor or loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub(crate) announcements: Vec<String>,
    #[serde(rename = "newContent")]
    pub(crate) new_content: Vec<ContentItem>,
    pub(crate) cards: Vec<Card>,
}

impl Dataset {
    /// Validating constructor; rejects duplicate card ids and non-fixed
    /// items with placeholder urls.
    pub fn new(
        announcements: Vec<String>,
        new_content: Vec<ContentItem>,
        cards: Vec<Card>,
    ) -> Result<Self> {
        let ds = Self { announcements, new_content, cards };
        crate::validate::validate(&ds)?;
        Ok(ds)
    }

    /// All announcements in authored order (newest first by convention).
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    /// The flat feed, front = most recent. `limit` truncates to the N
    /// most recent entries; a limit past the end returns the whole feed.
    pub fn recent_content(&self, limit: Option<usize>) -> &[ContentItem] {
        match limit {
            Some(n) => &self.new_content[..n.min(self.new_content.len())],
            None => &self.new_content,
        }
    }

    /// All cards in authored display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by its unique id. Exact match only.
    pub fn card(&self, id: &str) -> Result<&Card> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| HubError::CardNotFound(id.to_string()))
    }

    /// Convenience accessor for `card(id)?.content_items`.
    pub fn card_content_items(&self, id: &str) -> Result<&[CardContentItem]> {
        Ok(&self.card(id)?.content_items)
    }

    // --- emission ---

    /// Pretty JSON with the portal's 4-space indentation. Non-ASCII text
    /// is written verbatim.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        self.serialize(&mut ser)
            .map_err(|e| HubError::Validation(format!("serializing dataset: {e}")))?;
        Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
    }

    /// The portal's on-disk script form: a plain assignment the site
    /// includes directly.
    pub fn to_js_string(&self) -> Result<String> {
        Ok(format!("const helData = {};", self.to_json_string()?))
    }
}
