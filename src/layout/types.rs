use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Action tags that open the settings panel instead of launching an app.
/// Both spellings appear in shipped layout documents.
const OPEN_SETTINGS_TAGS: [&str; 2] = ["open-settings", "open_settings"];

/// Item id that always opens the settings panel
const SETTINGS_ID: &str = "settings";

/// Any non-string value reads as empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_string(deserializer)?.unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    if let Value::String(text) = Value::deserialize(deserializer)? {
        Ok(Some(text))
    } else {
        Ok(None)
    }
}

/// A launchable entry on the rail.
/// Only `id` is required; the loader fills a blank label with the id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchItem {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub asset: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub action: Option<String>,
}

impl LaunchItem {
    pub fn new(id: &str, label: &str, asset: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            asset: asset.to_string(),
            action: None,
        }
    }

    /// Sets the action tag
    #[must_use]
    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    /// Whether selecting this item opens the settings panel
    #[must_use]
    pub fn opens_settings(&self) -> bool {
        self.id == SETTINGS_ID
            || self
                .action
                .as_deref()
                .is_some_and(|action| OPEN_SETTINGS_TAGS.contains(&action))
    }
}

/// Link state reported by a network indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Connected,
    Disconnected,
}

impl NetworkStatus {
    /// Anything other than `connected` reads as disconnected
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("connected") {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }

    #[must_use]
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}

impl<'de> Deserialize<'de> for NetworkStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = lenient_optional_string(deserializer)?;
        Ok(tag.map_or(Self::Disconnected, |tag| Self::from_tag(&tag)))
    }
}

fn default_status() -> NetworkStatus {
    NetworkStatus::Disconnected
}

/// A status badge shown next to the rail (Wi-Fi, Bluetooth)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkIndicator {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(default = "default_status")]
    pub status: NetworkStatus,
}

impl NetworkIndicator {
    pub fn new(id: &str, label: &str, status: NetworkStatus) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            status,
        }
    }

    /// Accessible text, e.g. `Wi-Fi: Connected`
    #[must_use]
    pub fn description(&self) -> String {
        format!("{}: {}", self.label, self.status.display_name())
    }
}

/// Everything the rail needs at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLayout {
    pub items: Vec<LaunchItem>,
    pub network_indicators: Vec<NetworkIndicator>,
    pub initial_focus_index: usize,
}

impl LoadedLayout {
    /// Built-in layout used whenever no document can be loaded
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            items: vec![
                LaunchItem::new("netflix", "Netflix", "assets/icons/netflix.svg"),
                LaunchItem::new("prime", "Prime Video", "assets/icons/prime_video.svg"),
                LaunchItem::new("hulu", "Hulu", "assets/icons/hulu.svg"),
                LaunchItem::new("disney", "Disney+", "assets/icons/disney_plus.svg"),
                LaunchItem::new("youtube", "YouTube", "assets/icons/youtube.svg"),
                LaunchItem::new("settings", "Settings", "assets/icons/settings.svg")
                    .with_action("open-settings"),
            ],
            network_indicators: vec![
                NetworkIndicator::new("wifi", "Wi-Fi", NetworkStatus::Connected),
                NetworkIndicator::new("bluetooth", "Bluetooth", NetworkStatus::Disconnected),
            ],
            initial_focus_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_settings_by_action_tag() {
        let item = LaunchItem::new("prefs", "Prefs", "p.svg").with_action("open-settings");
        assert!(item.opens_settings());
        let item = LaunchItem::new("prefs", "Prefs", "p.svg").with_action("open_settings");
        assert!(item.opens_settings());
    }

    #[test]
    fn test_opens_settings_by_id() {
        assert!(LaunchItem::new("settings", "Settings", "s.svg").opens_settings());
        assert!(!LaunchItem::new("hulu", "Hulu", "h.svg").opens_settings());
        assert!(!LaunchItem::new("hulu", "Hulu", "h.svg")
            .with_action("play")
            .opens_settings());
    }

    #[test]
    fn test_network_status_from_tag() {
        assert_eq!(NetworkStatus::from_tag("connected"), NetworkStatus::Connected);
        assert_eq!(NetworkStatus::from_tag(" Connected "), NetworkStatus::Connected);
        assert_eq!(NetworkStatus::from_tag("disconnected"), NetworkStatus::Disconnected);
        assert_eq!(NetworkStatus::from_tag("flaky"), NetworkStatus::Disconnected);
    }

    #[test]
    fn test_wrongly_typed_fields_fall_back() {
        let item: LaunchItem =
            serde_json::from_str(r#"{ "id": "settings", "label": 5, "action": 7 }"#).unwrap();
        assert_eq!(item.label, "");
        assert_eq!(item.asset, "");
        assert_eq!(item.action, None);
        assert!(item.opens_settings());

        let wifi: NetworkIndicator =
            serde_json::from_str(r#"{ "id": "wifi", "label": "Wi-Fi", "status": true }"#).unwrap();
        assert_eq!(wifi.status, NetworkStatus::Disconnected);
    }

    #[test]
    fn test_indicator_description() {
        let wifi = NetworkIndicator::new("wifi", "Wi-Fi", NetworkStatus::Connected);
        assert_eq!(wifi.description(), "Wi-Fi: Connected");
        let bt = NetworkIndicator::new("bluetooth", "Bluetooth", NetworkStatus::Disconnected);
        assert_eq!(bt.description(), "Bluetooth: Disconnected");
    }

    #[test]
    fn test_builtin_layout_shape() {
        let layout = LoadedLayout::builtin();
        assert_eq!(layout.items.len(), 6);
        assert_eq!(layout.network_indicators.len(), 2);
        assert_eq!(layout.initial_focus_index, 0);
        assert!(layout.items.last().is_some_and(LaunchItem::opens_settings));
    }
}
