//! Result items presented to the launcher host.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon shipped with the extension, referenced by every item.
pub const ICON: &str = "images/icon.png";

/// Install command offered when no window discovery tool is present.
pub const INSTALL_HINT: &str = "sudo apt install wmctrl xdotool";

/// Maximum number of app names spelled out in an item description.
const DESCRIPTION_APPS: usize = 8;

/// Action attached to a result item, echoed back by the host on selection.
///
/// The payload is tagged so unrecognized actions fail to parse and are
/// ignored rather than misdispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ItemAction {
    /// Terminate the listed apps.
    QuitApps { apps: Vec<String> },
    /// Copy text to the clipboard (performed by the host).
    CopyToClipboard { text: String },
}

/// A single row in the host's result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// Unique identifier for this item instance.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// One-line description shown under the name.
    pub description: String,
    /// Icon reference.
    pub icon: String,
    /// Action to perform on selection, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ItemAction>,
}

impl ResultItem {
    fn new(name: impl Into<String>, description: impl Into<String>, action: Option<ItemAction>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            icon: ICON.to_string(),
            action,
        }
    }
}

/// Item offering to quit the resolved apps.
///
/// The description spells out at most [`DESCRIPTION_APPS`] names; the action
/// payload always carries the full list.
pub fn quit_item(apps: &[String]) -> ResultItem {
    let name = if apps.len() == 1 {
        "Quit 1 open app".to_string()
    } else {
        format!("Quit {} open apps", apps.len())
    };

    let mut description = apps
        .iter()
        .take(DESCRIPTION_APPS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if apps.len() > DESCRIPTION_APPS {
        description.push_str("...");
    }

    ResultItem::new(
        name,
        description,
        Some(ItemAction::QuitApps {
            apps: apps.to_vec(),
        }),
    )
}

/// Informational item shown when nothing resolvable is open.
pub fn no_apps_item() -> ResultItem {
    ResultItem::new("No GUI apps detected", "All clean 👌", None)
}

/// Remediation item shown when no discovery tool is installed.
pub fn missing_tools_item() -> ResultItem {
    ResultItem::new(
        "wmctrl / xdotool not found",
        "Press Enter to copy the install command",
        Some(ItemAction::CopyToClipboard {
            text: INSTALL_HINT.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apps(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_quit_item_singular() {
        let item = quit_item(&apps(&["slack"]));
        assert_eq!(item.name, "Quit 1 open app");
        assert_eq!(item.description, "slack");
    }

    #[test]
    fn test_quit_item_plural() {
        let item = quit_item(&apps(&["firefox", "slack"]));
        assert_eq!(item.name, "Quit 2 open apps");
        assert_eq!(item.description, "firefox, slack");
    }

    #[test]
    fn test_quit_item_description_truncated() {
        let many = apps(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let item = quit_item(&many);
        assert_eq!(item.description, "a, b, c, d, e, f, g, h...");
        // The action still carries every app
        match item.action {
            Some(ItemAction::QuitApps { apps }) => assert_eq!(apps.len(), 10),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_missing_tools_item_payload() {
        let item = missing_tools_item();
        assert_eq!(
            item.action,
            Some(ItemAction::CopyToClipboard {
                text: "sudo apt install wmctrl xdotool".to_string()
            })
        );
    }

    #[test]
    fn test_no_apps_item_has_no_action() {
        assert!(no_apps_item().action.is_none());
    }

    #[test]
    fn test_action_json_tag() {
        let action = ItemAction::QuitApps {
            apps: apps(&["slack", "firefox"]),
        };
        let json = serde_json::to_string(&action).unwrap();
        let parsed: ItemAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
        assert!(json.contains(r#""action":"quit_apps""#));
    }

    #[test]
    fn test_unknown_action_tag_rejected() {
        let result = serde_json::from_str::<ItemAction>(r#"{"action":"reboot","apps":[]}"#);
        assert!(result.is_err());
    }
}
