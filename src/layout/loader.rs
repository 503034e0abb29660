use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{info, warn};

use super::store::{DocumentStore, LayoutError, LayoutResult};
use super::types::{LaunchItem, LoadedLayout, NetworkIndicator};

/// Loads the layout from `store`, falling back to the built-in layout on any failure.
/// Startup never blocks on a bad or missing document.
pub fn load(store: &dyn DocumentStore) -> LoadedLayout {
    let location = store.describe();
    match store.fetch().and_then(|text| parse_document(&text)) {
        Ok(layout) => {
            info!(
                source = %location,
                items = layout.items.len(),
                indicators = layout.network_indicators.len(),
                "layout loaded"
            );
            layout
        }
        Err(error) => {
            warn!(source = %location, %error, "layout unavailable, using built-in defaults");
            LoadedLayout::builtin()
        }
    }
}

/// Parses a layout document. Missing or malformed fields fall back one at a time;
/// only entries without a usable id are dropped.
pub fn parse_document(text: &str) -> LayoutResult<LoadedLayout> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Object(fields) = document else {
        return Err(LayoutError::Parse(serde_json::Error::custom(
            "layout document must be an object",
        )));
    };

    Ok(LoadedLayout {
        items: parse_items(fields.get("icons")),
        network_indicators: parse_indicators(fields.get("networkIcons")),
        initial_focus_index: parse_focus_hint(fields.get("initialFocusIndex")),
    })
}

fn parse_focus_hint(value: Option<&Value>) -> usize {
    match value {
        None | Some(Value::Null) => 0,
        Some(raw) => raw
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .unwrap_or_else(|| {
                warn!(value = %raw, "invalid initialFocusIndex, using 0");
                0
            }),
    }
}

fn entries(value: Option<&Value>, field: &str) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries.clone(),
        Some(other) => {
            warn!(field, value = %other, "expected a list, ignoring field");
            Vec::new()
        }
    }
}

/// Entries need a non-blank string `id`; every other field falls back on its own
fn parse_entry<T: DeserializeOwned>(entry: Value, kind: &str) -> Option<T> {
    match serde_json::from_value::<T>(entry) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            warn!(%error, kind, "dropping entry without a usable id");
            None
        }
    }
}

fn label_or_id(label: &mut String, id: &str) {
    if label.trim().is_empty() {
        *label = id.to_string();
    }
}

fn parse_items(value: Option<&Value>) -> Vec<LaunchItem> {
    let mut seen = HashSet::new();
    entries(value, "icons")
        .into_iter()
        .filter_map(|entry| parse_entry::<LaunchItem>(entry, "icon"))
        .filter(|item| !item.id.trim().is_empty())
        .filter(|item| {
            let fresh = seen.insert(item.id.clone());
            if !fresh {
                warn!(id = %item.id, "dropping duplicate icon id");
            }
            fresh
        })
        .map(|mut item| {
            label_or_id(&mut item.label, &item.id);
            item
        })
        .collect()
}

fn parse_indicators(value: Option<&Value>) -> Vec<NetworkIndicator> {
    entries(value, "networkIcons")
        .into_iter()
        .filter_map(|entry| parse_entry::<NetworkIndicator>(entry, "network icon"))
        .filter(|indicator| !indicator.id.trim().is_empty())
        .map(|mut indicator| {
            label_or_id(&mut indicator.label, &indicator.id);
            indicator
        })
        .collect()
}
