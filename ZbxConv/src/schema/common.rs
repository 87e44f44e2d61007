//! Export structures shared by every schema version

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// Root element of every template export.
pub const EXPORT_ROOT: &str = "zabbix_export";

/// List containers common to all template export layouts, with the element
/// wrapping each entry.
pub(crate) const LIST_ELEMENTS: &[(&str, &str)] = &[
    ("groups", "group"),
    ("templates", "template"),
    ("triggers", "trigger"),
    ("graphs", "graph"),
    ("value_maps", "value_map"),
    ("applications", "application"),
    ("application_prototypes", "application_prototype"),
    ("items", "item"),
    ("item_prototypes", "item_prototype"),
    ("trigger_prototypes", "trigger_prototype"),
    ("graph_prototypes", "graph_prototype"),
    ("host_prototypes", "host_prototype"),
    ("discovery_rules", "discovery_rule"),
    ("httptests", "httptest"),
    ("steps", "step"),
    ("macros", "macro"),
    ("screens", "screen"),
    ("screen_items", "screen_item"),
    ("preprocessing", "step"),
    ("query_fields", "query_field"),
    ("headers", "header"),
    ("variables", "variable"),
    ("dependencies", "dependency"),
    ("tags", "tag"),
    ("graph_items", "graph_item"),
    ("mappings", "mapping"),
    ("conditions", "condition"),
    ("lld_macro_paths", "lld_macro_path"),
    ("group_links", "group_link"),
    ("group_prototypes", "group_prototype"),
];

/// Reference to an entity by name (host group, application, template, value map).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRef {
    pub name: String,
}

impl NameRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reference to an item of the same template by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyRef {
    pub key: String,
}

/// Reference to an item of any host or template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostKeyRef {
    pub host: String,
    pub key: String,
}

/// Name/value pair: HTTP query fields, headers and scenario variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

/// Graph Y axis bound: an item reference, or the `0` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphAxisItem {
    Item(HostKeyRef),
    Constant(String),
}

/// Screen element resource: an entity reference, or the `0` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenResource {
    Reference(ResourceRef),
    Constant(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerDependency {
    pub name: String,
    pub expression: String,
    pub recovery_expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerTag {
    pub tag: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMap {
    pub name: String,
    pub mappings: Vec<ValueMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMapping {
    pub value: String,
    pub newvalue: String,
}

/// LLD macro to JSONPath mapping of a discovery rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LldMacroPath {
    pub lld_macro: String,
    pub path: String,
}

/// Host group assignment of a host prototype.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLink {
    #[serde(deserialize_with = "nested_element")]
    pub group: NameRef,
}

/// Whitespace-only text.
struct Blank;

impl<'de> Deserialize<'de> for Blank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.trim().is_empty() {
            Ok(Blank)
        } else {
            Err(de::Error::invalid_value(
                Unexpected::Str(&text),
                &"whitespace-only text",
            ))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Element<T> {
    Blank(Blank),
    Nested(T),
}

/// Deserialize a field holding nested elements. Whitespace-only text is an
/// empty element whose end tag was indented onto its own line, and reads as
/// the field's default.
pub(crate) fn nested_element<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    match Element::<T>::deserialize(deserializer)? {
        Element::Blank(Blank) => Ok(T::default()),
        Element::Nested(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "nested_element")]
        valuemap: Option<NameRef>,
        #[serde(deserialize_with = "nested_element")]
        axis: Option<GraphAxisItem>,
    }

    fn holder(value: serde_json::Value) -> Holder {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_indented_empty_element_reads_as_default() {
        assert_eq!(holder(json!({ "valuemap": "\n        ", "axis": "\n" })), Holder::default());
    }

    #[test]
    fn test_nested_element_keeps_values() {
        let read = holder(json!({ "valuemap": { "name": "State" }, "axis": "0" }));
        assert_eq!(read.valuemap, Some(NameRef::new("State")));
        assert_eq!(read.axis, Some(GraphAxisItem::Constant("0".to_string())));

        let read = holder(json!({ "axis": { "host": "H", "key": "k" } }));
        assert!(matches!(read.axis, Some(GraphAxisItem::Item(ref item)) if item.key == "k"));
    }

    #[test]
    fn test_text_where_element_expected_is_rejected() {
        let result = serde_json::from_value::<Holder>(json!({ "valuemap": "State" }));
        assert!(result.is_err());
    }
}
