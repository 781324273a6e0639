use std::collections::HashSet;

use tracing::warn;
use url::Url;

use crate::data::Dataset;
use crate::error::{HubError, Result};

/// Schema contract enforced at every construction boundary. Malformed
/// data fails here, loudly, rather than surfacing partial content to a
/// renderer later.
pub(crate) fn validate(ds: &Dataset) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(ds.cards.len());
    for card in &ds.cards {
        if !seen.insert(card.id.as_str()) {
            return Err(HubError::Validation(format!(
                "duplicate card id: {}",
                card.id
            )));
        }
    }

    for (i, entry) in ds.new_content.iter().enumerate() {
        check_url(&entry.url, false, &format!("newContent[{i}]"))?;
        // Advisory: the flat feed's media tags usually correlate to card
        // ids, but the document never guaranteed it.
        if !seen.contains(entry.media.as_str()) {
            warn!(
                media = %entry.media,
                title = %entry.title,
                "flat feed entry matches no card id"
            );
        }
    }

    for card in &ds.cards {
        for (i, item) in card.content_items.iter().enumerate() {
            check_url(&item.url, item.fixed(), &format!("card '{}' item {i}", card.id))?;
        }
    }

    Ok(())
}

fn check_url(url: &str, fixed: bool, location: &str) -> Result<()> {
    if fixed {
        // Pinned entries may carry the "#" placeholder.
        return Ok(());
    }
    if url.is_empty() || url == "#" {
        return Err(HubError::Validation(format!(
            "{location}: non-fixed item has placeholder url"
        )));
    }
    if Url::parse(url).is_err() {
        // Advisory only; relative urls have shown up in hand-edited revisions.
        warn!(%url, "{location}: url is not an absolute url");
    }
    Ok(())
}
