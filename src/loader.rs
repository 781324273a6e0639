use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::data::Dataset;
use crate::error::{HubError, Result};

// One-time scoped acquisition: read, parse, validate, freeze. Nothing is
// held open afterwards and the returned value needs no synchronization.

impl Dataset {
    /// Parse a plain JSON document and validate it.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let ds: Dataset = serde_json::from_str(s)
            .map_err(|e| HubError::Validation(format!("malformed dataset document: {e}")))?;
        crate::validate::validate(&ds)?;
        Ok(ds)
    }

    /// Parse the portal's script form (`const helData = { ... };`) by
    /// stripping the assignment wrapper and trailing semicolon. The
    /// identifier and declaration keyword are not checked, so
    /// `export const`, `var` and renamed bindings all load.
    pub fn from_js_str(s: &str) -> Result<Self> {
        Self::from_json_str(strip_js_wrapper(s)?)
    }
}

fn strip_js_wrapper(s: &str) -> Result<&str> {
    let trimmed = s.trim();
    let eq = trimmed.find('=').ok_or_else(|| {
        HubError::Validation("script form has no `= {...}` assignment".to_string())
    })?;
    let body = trimmed[eq + 1..].trim();
    Ok(body.strip_suffix(';').unwrap_or(body).trim_end())
}

fn is_js(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("js"))
}

/// Load a dataset file. `.js` gets the wrapper treatment, anything else
/// is parsed as plain JSON.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let raw = fs::read_to_string(path)?;
    let ds = if is_js(path) {
        Dataset::from_js_str(&raw)?
    } else {
        Dataset::from_json_str(&raw)?
    };
    debug!(path = %path.display(), cards = ds.cards().len(), "dataset loaded");
    Ok(ds)
}

/// Write a dataset revision; the extension picks the form, as in
/// `load_dataset`.
pub fn write_dataset(path: &Path, ds: &Dataset) -> Result<()> {
    let out = if is_js(path) {
        ds.to_js_string()?
    } else {
        ds.to_json_string()?
    };
    fs::write(path, out)?;
    Ok(())
}

/// Conventional location of the site's working copy: a file in the
/// user's data directory.
pub fn default_dataset_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "helhub", "helhub")
        .ok_or_else(|| HubError::Config("unable to determine a data directory".to_string()))?;
    Ok(proj.data_dir().join("hel-data.js"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ContentItem;

    const MINIMAL: &str = r##"{
        "announcements": ["hello"],
        "newContent": [
            { "media": "hellog", "title": "post", "url": "https://example.com/p" }
        ],
        "cards": [
            {
                "id": "hellog",
                "title": "hellog blog",
                "shortTitle": "hellog",
                "icon": "<svg/>",
                "bgColor": "bg-amber-50",
                "description": "daily blog",
                "link": "https://example.com/",
                "contentItems": [
                    { "title": "post", "url": "https://example.com/p" },
                    { "title": "archive", "url": "#", "isFixed": true }
                ]
            }
        ]
    }"##;

    #[test]
    fn plain_json_loads() {
        let ds = Dataset::from_json_str(MINIMAL).unwrap();
        assert_eq!(ds.cards().len(), 1);
        assert_eq!(ds.announcements(), ["hello"]);
    }

    #[test]
    fn script_wrapper_is_stripped() {
        let js = format!("const helData = {MINIMAL};");
        let ds = Dataset::from_js_str(&js).unwrap();
        assert_eq!(ds.cards()[0].short_title, "hellog");
    }

    #[test]
    fn script_wrapper_tolerates_export_and_missing_semicolon() {
        let js = format!("export const siteData = {MINIMAL}");
        assert!(Dataset::from_js_str(&js).is_ok());
    }

    #[test]
    fn wrong_container_shape_is_a_validation_error() {
        let err = Dataset::from_json_str(r#"{ "announcements": "not a list" }"#).unwrap_err();
        assert!(matches!(err, HubError::Validation(_)));
    }

    #[test]
    fn duplicate_ids_fail_at_load_not_first_lookup() {
        let doc = r#"{
            "announcements": [],
            "newContent": [],
            "cards": [
                { "id": "x", "title": "", "shortTitle": "", "icon": "", "bgColor": "",
                  "description": "", "link": "", "contentItems": [] },
                { "id": "x", "title": "", "shortTitle": "", "icon": "", "bgColor": "",
                  "description": "", "link": "", "contentItems": [] }
            ]
        }"#;
        let err = Dataset::from_json_str(doc).unwrap_err();
        assert!(matches!(err, HubError::Validation(_)));
    }

    #[test]
    fn file_round_trip_through_both_forms() {
        let ds = Dataset::new(
            vec!["a".into()],
            vec![ContentItem {
                media: "m".into(),
                title: "t".into(),
                url: "https://example.com/t".into(),
            }],
            vec![],
        )
        .unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let js_path = tmp.path().join("hel-data.js");
        let json_path = tmp.path().join("hel-data.json");

        write_dataset(&js_path, &ds).unwrap();
        write_dataset(&json_path, &ds).unwrap();

        let from_js = load_dataset(&js_path).unwrap();
        let from_json = load_dataset(&json_path).unwrap();
        assert_eq!(from_js.recent_content(None)[0].title, "t");
        assert_eq!(from_json.recent_content(None)[0].url, "https://example.com/t");
    }

    #[test]
    fn missing_file_is_io_not_validation() {
        let err = load_dataset(Path::new("/definitely/not/here.js")).unwrap_err();
        assert!(matches!(err, HubError::Io(_)));
    }
}
