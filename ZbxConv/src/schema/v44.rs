//! Template export format 4.4
//!
//! The 4.4 exporter omits scalar fields holding their default, so empty
//! strings are skipped, inside references too. List containers and
//! references are always written; the 4.4 rule set then removes the empty
//! ones.

use serde::{Deserialize, Serialize};

use super::common::{EXPORT_ROOT, LIST_ELEMENTS, ScreenResource, nested_element};
use crate::formats::xml::XmlLayout;

pub(crate) static LAYOUT: XmlLayout = XmlLayout {
    root: EXPORT_ROOT,
    lists: LIST_ELEMENTS,
};

/// Root of a 4.4 export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZabbixExport {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
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
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub templates: Vec<NameRef>,
    pub groups: Vec<NameRef>,
    pub applications: Vec<NameRef>,
    pub items: Vec<Item>,
    pub discovery_rules: Vec<DiscoveryRule>,
    pub httptests: Vec<HttpTest>,
    pub macros: Vec<Macro>,
    pub screens: Vec<Screen>,
}

/// Item with its single-item triggers nested, as 4.4 exports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_community: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_oid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delay: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub history: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trends: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub allowed_hosts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub units: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_contextname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_securityname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_securitylevel: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_authprotocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_authpassphrase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_privprotocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_privpassphrase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ipmi_sensor: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authtype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub publickey: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub privatekey: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inventory_link: String,
    pub applications: Vec<NameRef>,
    #[serde(deserialize_with = "nested_element")]
    pub valuemap: Option<NameRef>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub logtimefmt: String,
    pub preprocessing: Vec<PreprocessingStep>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jmx_endpoint: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub query_fields: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_codes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub follow_redirects: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub post_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_proxy: String,
    pub headers: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub retrieve_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub output_format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub allow_traps: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_cert_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_peer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_host: String,
    #[serde(deserialize_with = "nested_element")]
    pub master_item: Option<KeyRef>,
    pub triggers: Vec<Trigger>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPrototype {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_community: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_oid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delay: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub history: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trends: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub allowed_hosts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub units: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_contextname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_securityname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_securitylevel: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_authprotocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_authpassphrase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_privprotocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_privpassphrase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ipmi_sensor: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authtype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub publickey: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub privatekey: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inventory_link: String,
    pub applications: Vec<NameRef>,
    pub application_prototypes: Vec<NameRef>,
    #[serde(deserialize_with = "nested_element")]
    pub valuemap: Option<NameRef>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub logtimefmt: String,
    pub preprocessing: Vec<PreprocessingStep>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jmx_endpoint: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub query_fields: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_codes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub follow_redirects: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub post_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_proxy: String,
    pub headers: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub retrieve_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub output_format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub allow_traps: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_cert_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_peer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_host: String,
    #[serde(deserialize_with = "nested_element")]
    pub master_item: Option<KeyRef>,
    pub trigger_prototypes: Vec<TriggerPrototype>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingStep {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error_handler: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error_handler_params: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryRule {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_community: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmp_oid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delay: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub allowed_hosts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_contextname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_securityname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_securitylevel: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_authprotocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_authpassphrase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_privprotocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snmpv3_privpassphrase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ipmi_sensor: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authtype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub publickey: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub privatekey: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,
    #[serde(deserialize_with = "nested_element")]
    pub filter: Filter,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lifetime: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub item_prototypes: Vec<ItemPrototype>,
    pub trigger_prototypes: Vec<TriggerPrototype>,
    pub graph_prototypes: Vec<GraphPrototype>,
    pub host_prototypes: Vec<HostPrototype>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jmx_endpoint: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub query_fields: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_codes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub follow_redirects: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub post_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_proxy: String,
    pub headers: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub retrieve_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub allow_traps: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_cert_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_peer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_host: String,
    pub lld_macro_paths: Vec<LldMacroPath>,
    pub preprocessing: Vec<PreprocessingStep>,
    #[serde(deserialize_with = "nested_element")]
    pub master_item: Option<KeyRef>,
}

/// Discovery filter. Without conditions or evaluation settings it renders as
/// an empty element, which the 4.4 rules drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub evaltype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formula: String,
    pub conditions: Vec<FilterCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCondition {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#macro: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub operator: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formulaid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expression: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recovery_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recovery_expression: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub correlation_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub correlation_tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub priority: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub manual_close: String,
    pub dependencies: Vec<TriggerDependency>,
    pub tags: Vec<TriggerTag>,
}

pub type TriggerPrototype = Trigger;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graph {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub width: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub height: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub yaxismin: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub yaxismax: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub show_work_period: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub show_triggers: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub show_legend: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub show_3d: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub percent_left: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub percent_right: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ymin_type_1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ymax_type_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "nested_element")]
    pub ymin_item_1: Option<GraphAxisItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "nested_element")]
    pub ymax_item_1: Option<GraphAxisItem>,
    pub graph_items: Vec<GraphItem>,
}

pub type GraphPrototype = Graph;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sortorder: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub drawtype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub yaxisside: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub calc_fnc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(deserialize_with = "nested_element")]
    pub item: HostKeyRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostPrototype {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    pub group_links: Vec<GroupLink>,
    pub group_prototypes: Vec<NameRef>,
    pub templates: Vec<NameRef>,
}

/// Web scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpTest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "nested_element")]
    pub application: Option<NameRef>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delay: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub attempts: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub agent: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_proxy: String,
    pub variables: Vec<NameValue>,
    pub headers: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authentication: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_peer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify_host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_cert_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_key_password: String,
    pub steps: Vec<HttpStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpStep {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub query_fields: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posts: String,
    pub variables: Vec<NameValue>,
    pub headers: Vec<NameValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub follow_redirects: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub retrieve_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub required: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_codes: String,
}

/// User macro. Descriptions are new in 4.4.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Macro {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#macro: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screen {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hsize: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vsize: String,
    pub screen_items: Vec<ScreenItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resourcetype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub width: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub height: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub x: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub y: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub colspan: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rowspan: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub elements: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub valign: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub halign: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dynamic: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sort_triggers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "nested_element")]
    pub resource: Option<ScreenResource>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max_columns: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub application: String,
}

// ============================================================================
// References and pairs
// ============================================================================

/// Reference to an entity by name (host group, application, template, value map).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRef {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl NameRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyRef {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostKeyRef {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameValue {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphAxisItem {
    Item(HostKeyRef),
    Constant(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerDependency {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expression: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recovery_expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerTag {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMap {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub mappings: Vec<ValueMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMapping {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub newvalue: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LldMacroPath {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lld_macro: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLink {
    #[serde(deserialize_with = "nested_element")]
    pub group: NameRef,
}
