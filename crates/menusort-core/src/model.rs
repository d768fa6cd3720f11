//! Menu item records.
//!
//! The JSON shape is the one menu templates are authored in:
//! `{ "label": "Copy", "command": "core:copy", "position": "after=core:cut" }`.

use crate::position::Position;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Normal,
    Separator,
    Submenu,
    Checkbox,
    Radio,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// `<relationship>=<command>`; parsed lazily by [`MenuItem::parsed_position`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<MenuItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_detail: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    /// How specific the source of this item was when it was merged into a menu.
    /// `None` for items that never went through [`crate::menu::merge`].
    #[serde(skip)]
    pub specificity: Option<f64>,
    /// Keys this model does not know about (`checked`, `sublabel`, `icon`, ...), passed through
    /// unchanged.
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl MenuItem {
    pub fn separator() -> Self {
        Self {
            item_type: Some(ItemType::Separator),
            ..Default::default()
        }
    }

    pub fn command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.item_type, Some(ItemType::Separator))
    }

    pub fn parsed_position(&self) -> Result<Option<Position>> {
        self.position.as_deref().map(Position::parse).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn menu_item_json_uses_template_field_names() {
        let item: MenuItem = serde_json::from_value(json!({
            "type": "checkbox",
            "label": "&Word Wrap",
            "command": "editor:toggle-soft-wrap",
            "commandDetail": { "source": "menu" },
            "position": "after=editor:toggle-indent-guide"
        }))
        .unwrap();

        assert_eq!(item.item_type, Some(ItemType::Checkbox));
        assert_eq!(item.command.as_deref(), Some("editor:toggle-soft-wrap"));
        assert_eq!(item.command_detail, Some(json!({ "source": "menu" })));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "type": "checkbox",
                "label": "&Word Wrap",
                "command": "editor:toggle-soft-wrap",
                "position": "after=editor:toggle-indent-guide",
                "commandDetail": { "source": "menu" }
            })
        );
    }

    #[test]
    fn unknown_item_types_are_kept_verbatim() {
        let item: MenuItem = serde_json::from_value(json!({ "type": "spacer" })).unwrap();
        assert_eq!(item.item_type, Some(ItemType::Other("spacer".to_string())));
        assert!(!item.is_separator());
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "type": "spacer" }));
    }

    #[test]
    fn unknown_keys_are_kept_verbatim() {
        let value = json!({
            "label": "Soft Wrap",
            "checked": true,
            "sublabel": "editor",
            "icon": { "path": "wrap.png" }
        });
        let item: MenuItem = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(item.label.as_deref(), Some("Soft Wrap"));
        assert_eq!(item.extra.get("checked"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&item).unwrap(), value);
    }

    #[test]
    fn specificity_is_not_serialized() {
        let item = MenuItem {
            specificity: Some(3.0),
            ..MenuItem::command("core:one")
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "command": "core:one" })
        );
    }
}
