//! Template export format 4.0
//!
//! The 4.0 exporter writes every field. Unset scalars are empty strings,
//! unset references are `None`, and both render as empty elements that the
//! 4.0 rule set turns into self-closing tags.

use serde::{Deserialize, Serialize};

use super::common::{
    EXPORT_ROOT, GraphAxisItem, GroupLink, HostKeyRef, KeyRef, LIST_ELEMENTS, LldMacroPath,
    NameRef, NameValue, ScreenResource, TriggerDependency, TriggerTag, ValueMap, nested_element,
};
use crate::formats::xml::XmlLayout;

pub(crate) static LAYOUT: XmlLayout = XmlLayout {
    root: EXPORT_ROOT,
    lists: LIST_ELEMENTS,
};

/// Root of a 4.0 export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZabbixExport {
    pub version: String,
    pub date: String,
    pub groups: Vec<NameRef>,
    pub templates: Vec<Template>,
    pub triggers: Vec<Trigger>,
    pub graphs: Vec<Graph>,
    pub value_maps: Vec<ValueMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub template: String,
    pub name: String,
    pub description: String,
    pub groups: Vec<NameRef>,
    pub applications: Vec<NameRef>,
    pub items: Vec<Item>,
    pub discovery_rules: Vec<DiscoveryRule>,
    pub httptests: Vec<HttpTest>,
    pub macros: Vec<Macro>,
    pub templates: Vec<NameRef>,
    pub screens: Vec<Screen>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: String,
    pub r#type: String,
    pub snmp_community: String,
    pub snmp_oid: String,
    pub key: String,
    pub delay: String,
    pub history: String,
    pub trends: String,
    pub status: String,
    pub value_type: String,
    pub allowed_hosts: String,
    pub units: String,
    pub snmpv3_contextname: String,
    pub snmpv3_securityname: String,
    pub snmpv3_securitylevel: String,
    pub snmpv3_authprotocol: String,
    pub snmpv3_authpassphrase: String,
    pub snmpv3_privprotocol: String,
    pub snmpv3_privpassphrase: String,
    pub params: String,
    pub ipmi_sensor: String,
    pub authtype: String,
    pub username: String,
    pub password: String,
    pub publickey: String,
    pub privatekey: String,
    pub port: String,
    pub description: String,
    pub inventory_link: String,
    pub applications: Vec<NameRef>,
    #[serde(deserialize_with = "nested_element")]
    pub valuemap: Option<NameRef>,
    pub logtimefmt: String,
    pub preprocessing: Vec<PreprocessingStep>,
    pub jmx_endpoint: String,
    pub timeout: String,
    pub url: String,
    pub query_fields: Vec<NameValue>,
    pub posts: String,
    pub status_codes: String,
    pub follow_redirects: String,
    pub post_type: String,
    pub http_proxy: String,
    pub headers: Vec<NameValue>,
    pub retrieve_mode: String,
    pub request_method: String,
    pub output_format: String,
    pub allow_traps: String,
    pub ssl_cert_file: String,
    pub ssl_key_file: String,
    pub ssl_key_password: String,
    pub verify_peer: String,
    pub verify_host: String,
    #[serde(deserialize_with = "nested_element")]
    pub master_item: Option<KeyRef>,
}

/// Item prototype of a discovery rule: an item plus application prototypes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPrototype {
    pub name: String,
    pub r#type: String,
    pub snmp_community: String,
    pub snmp_oid: String,
    pub key: String,
    pub delay: String,
    pub history: String,
    pub trends: String,
    pub status: String,
    pub value_type: String,
    pub allowed_hosts: String,
    pub units: String,
    pub snmpv3_contextname: String,
    pub snmpv3_securityname: String,
    pub snmpv3_securitylevel: String,
    pub snmpv3_authprotocol: String,
    pub snmpv3_authpassphrase: String,
    pub snmpv3_privprotocol: String,
    pub snmpv3_privpassphrase: String,
    pub params: String,
    pub ipmi_sensor: String,
    pub authtype: String,
    pub username: String,
    pub password: String,
    pub publickey: String,
    pub privatekey: String,
    pub port: String,
    pub description: String,
    pub inventory_link: String,
    pub applications: Vec<NameRef>,
    pub application_prototypes: Vec<NameRef>,
    #[serde(deserialize_with = "nested_element")]
    pub valuemap: Option<NameRef>,
    pub logtimefmt: String,
    pub preprocessing: Vec<PreprocessingStep>,
    pub jmx_endpoint: String,
    pub timeout: String,
    pub url: String,
    pub query_fields: Vec<NameValue>,
    pub posts: String,
    pub status_codes: String,
    pub follow_redirects: String,
    pub post_type: String,
    pub http_proxy: String,
    pub headers: Vec<NameValue>,
    pub retrieve_mode: String,
    pub request_method: String,
    pub output_format: String,
    pub allow_traps: String,
    pub ssl_cert_file: String,
    pub ssl_key_file: String,
    pub ssl_key_password: String,
    pub verify_peer: String,
    pub verify_host: String,
    #[serde(deserialize_with = "nested_element")]
    pub master_item: Option<KeyRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingStep {
    pub r#type: String,
    pub params: String,
    pub error_handler: String,
    pub error_handler_params: String,
}

/// Low-level discovery rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryRule {
    pub name: String,
    pub r#type: String,
    pub snmp_community: String,
    pub snmp_oid: String,
    pub key: String,
    pub delay: String,
    pub status: String,
    pub allowed_hosts: String,
    pub snmpv3_contextname: String,
    pub snmpv3_securityname: String,
    pub snmpv3_securitylevel: String,
    pub snmpv3_authprotocol: String,
    pub snmpv3_authpassphrase: String,
    pub snmpv3_privprotocol: String,
    pub snmpv3_privpassphrase: String,
    pub params: String,
    pub ipmi_sensor: String,
    pub authtype: String,
    pub username: String,
    pub password: String,
    pub publickey: String,
    pub privatekey: String,
    pub port: String,
    #[serde(deserialize_with = "nested_element")]
    pub filter: Filter,
    pub lifetime: String,
    pub description: String,
    pub item_prototypes: Vec<ItemPrototype>,
    pub trigger_prototypes: Vec<TriggerPrototype>,
    pub graph_prototypes: Vec<GraphPrototype>,
    pub host_prototypes: Vec<HostPrototype>,
    pub jmx_endpoint: String,
    pub timeout: String,
    pub url: String,
    pub query_fields: Vec<NameValue>,
    pub posts: String,
    pub status_codes: String,
    pub follow_redirects: String,
    pub post_type: String,
    pub http_proxy: String,
    pub headers: Vec<NameValue>,
    pub retrieve_mode: String,
    pub request_method: String,
    pub allow_traps: String,
    pub ssl_cert_file: String,
    pub ssl_key_file: String,
    pub ssl_key_password: String,
    pub verify_peer: String,
    pub verify_host: String,
    pub lld_macro_paths: Vec<LldMacroPath>,
    pub preprocessing: Vec<PreprocessingStep>,
    #[serde(deserialize_with = "nested_element")]
    pub master_item: Option<KeyRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub evaltype: String,
    pub formula: String,
    pub conditions: Vec<FilterCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCondition {
    pub r#macro: String,
    pub value: String,
    pub operator: String,
    pub formulaid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
    pub expression: String,
    pub recovery_mode: String,
    pub recovery_expression: String,
    pub name: String,
    pub correlation_mode: String,
    pub correlation_tag: String,
    pub url: String,
    pub status: String,
    pub priority: String,
    pub description: String,
    pub r#type: String,
    pub manual_close: String,
    pub dependencies: Vec<TriggerDependency>,
    pub tags: Vec<TriggerTag>,
}

pub type TriggerPrototype = Trigger;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graph {
    pub name: String,
    pub width: String,
    pub height: String,
    pub yaxismin: String,
    pub yaxismax: String,
    pub show_work_period: String,
    pub show_triggers: String,
    pub r#type: String,
    pub show_legend: String,
    pub show_3d: String,
    pub percent_left: String,
    pub percent_right: String,
    pub ymin_type_1: String,
    pub ymax_type_1: String,
    #[serde(deserialize_with = "nested_element")]
    pub ymin_item_1: Option<GraphAxisItem>,
    #[serde(deserialize_with = "nested_element")]
    pub ymax_item_1: Option<GraphAxisItem>,
    pub graph_items: Vec<GraphItem>,
}

pub type GraphPrototype = Graph;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphItem {
    pub sortorder: String,
    pub drawtype: String,
    pub color: String,
    pub yaxisside: String,
    pub calc_fnc: String,
    pub r#type: String,
    #[serde(deserialize_with = "nested_element")]
    pub item: HostKeyRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostPrototype {
    pub host: String,
    pub name: String,
    pub status: String,
    pub group_links: Vec<GroupLink>,
    pub group_prototypes: Vec<NameRef>,
    pub templates: Vec<NameRef>,
}

/// Web scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpTest {
    pub name: String,
    #[serde(deserialize_with = "nested_element")]
    pub application: Option<NameRef>,
    pub delay: String,
    pub attempts: String,
    pub agent: String,
    pub http_proxy: String,
    pub variables: Vec<NameValue>,
    pub headers: Vec<NameValue>,
    pub status: String,
    pub authentication: String,
    pub http_user: String,
    pub http_password: String,
    pub verify_peer: String,
    pub verify_host: String,
    pub ssl_cert_file: String,
    pub ssl_key_file: String,
    pub ssl_key_password: String,
    pub steps: Vec<HttpStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpStep {
    pub name: String,
    pub url: String,
    pub query_fields: Vec<NameValue>,
    pub posts: String,
    pub variables: Vec<NameValue>,
    pub headers: Vec<NameValue>,
    pub follow_redirects: String,
    pub retrieve_mode: String,
    pub timeout: String,
    pub required: String,
    pub status_codes: String,
}

/// User macro.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Macro {
    pub r#macro: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screen {
    pub name: String,
    pub hsize: String,
    pub vsize: String,
    pub screen_items: Vec<ScreenItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenItem {
    pub resourcetype: String,
    pub width: String,
    pub height: String,
    pub x: String,
    pub y: String,
    pub colspan: String,
    pub rowspan: String,
    pub elements: String,
    pub valign: String,
    pub halign: String,
    pub style: String,
    pub url: String,
    pub dynamic: String,
    pub sort_triggers: String,
    #[serde(deserialize_with = "nested_element")]
    pub resource: Option<ScreenResource>,
    pub max_columns: String,
    pub application: String,
}
