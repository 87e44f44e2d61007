//! Per-version normalization tables
//!
//! Each exporter version renders empty elements its own way, so every version
//! keeps its own table. Entries are matched in table order; a fix to one table
//! does not carry over to another.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered substitutions applied to encoded XML for one export version.
#[derive(Debug)]
pub struct RuleSet {
    pub name: &'static str,
    /// Literal replacements, earlier entries winning at the same position.
    pub replacements: &'static [(&'static str, &'static str)],
    /// Line-anchored patterns for empty elements spanning several lines.
    pub collapses: &'static [(&'static str, &'static str)],
}

/// Identifier of a built-in rule set, as named in engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSetId {
    #[serde(rename = "4.0")]
    V40,
    #[serde(rename = "4.4")]
    V44,
}

impl RuleSetId {
    pub fn rules(self) -> &'static RuleSet {
        match self {
            RuleSetId::V40 => &RULES_V40,
            RuleSetId::V44 => &RULES_V44,
        }
    }
}

impl fmt::Display for RuleSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rules().name)
    }
}

pub static RULES_V40: RuleSet = RuleSet {
    name: "4.0",
    replacements: &[
        ("&#34;", "\""),
        ("&#39;", "'"),
        ("&#xD;", "&#13;"),
        ("&#xA;", "\n"),
        ("<key></key>", ""),
        ("<name></name>", ""),
        ("<error_handler></error_handler>", ""),
        ("<error_handler_params></error_handler_params>", ""),
        ("<url></url>", "<url/>"),
        ("<params></params>", "<params/>"),
        ("<application></application>", "<application/>"),
        ("<items></items>", "<items></items>"),
        ("<groups></groups>", "<groups/>"),
        ("<graphs></graphs>", ""),
        ("<macros></macros>", "<macros/>"),
        ("<screens></screens>", "<screens/>"),
        ("<mappings></mappings>", ""),
        ("<triggers></triggers>", ""),
        ("<templates></templates>", "<templates/>"),
        ("<conditions></conditions>", "<conditions/>"),
        ("<logtimefmt></logtimefmt>", "<logtimefmt/>"),
        ("<description></description>", "<description/>"),
        ("<snmp_community></snmp_community>", "<snmp_community/>"),
        ("<snmp_oid></snmp_oid>", "<snmp_oid/>"),
        ("<value_maps></value_maps>", "<value_maps/>"),
        ("<master_item></master_item>", "<master_item/>"),
        ("<dependencies></dependencies>", "<dependencies/>"),
        ("<applications></applications>", "<applications/>"),
        ("<preprocessing></preprocessing>", "<preprocessing/>"),
        ("<lld_macro_paths></lld_macro_paths>", "<lld_macro_paths/>"),
        ("<discovery_rules></discovery_rules>", "<discovery_rules/>"),
        ("<item_prototypes></item_prototypes>", "<item_prototypes/>"),
        ("<graph_prototypes></graph_prototypes>", "<graph_prototypes/>"),
        ("<trigger_prototypes></trigger_prototypes>", ""),
        ("<application_prototypes></application_prototypes>", "<application_prototypes/>"),
        ("<recovery_expression></recovery_expression>", "<recovery_expression/>"),
        ("<allowed_hosts></allowed_hosts>", "<allowed_hosts/>"),
        ("<units></units>", "<units/>"),
        ("<username></username>", "<username/>"),
        ("<password></password>", "<password/>"),
        ("<snmpv3_contextname></snmpv3_contextname>", "<snmpv3_contextname/>"),
        ("<snmpv3_securityname></snmpv3_securityname>", "<snmpv3_securityname/>"),
        ("<snmpv3_authpassphrase></snmpv3_authpassphrase>", "<snmpv3_authpassphrase/>"),
        ("<snmpv3_privpassphrase></snmpv3_privpassphrase>", "<snmpv3_privpassphrase/>"),
        ("<publickey></publickey>", "<publickey/>"),
        ("<privatekey></privatekey>", "<privatekey/>"),
        ("<port></port>", "<port/>"),
        ("<correlation_tag></correlation_tag>", "<correlation_tag/>"),
        ("<ssl_cert_file></ssl_cert_file>", "<ssl_cert_file/>"),
        ("<ssl_key_file></ssl_key_file>", "<ssl_key_file/>"),
        ("<ssl_key_password></ssl_key_password>", "<ssl_key_password/>"),
        ("<ipmi_sensor></ipmi_sensor>", "<ipmi_sensor/>"),
        ("<jmx_endpoint></jmx_endpoint>", "<jmx_endpoint/>"),
        // containers and fields the 4.0 exporter also writes self-closing
        ("<http_proxy></http_proxy>", "<http_proxy/>"),
        ("<query_fields></query_fields>", "<query_fields/>"),
        ("<posts></posts>", "<posts/>"),
        ("<headers></headers>", "<headers/>"),
        ("<httptests></httptests>", "<httptests/>"),
        ("<host_prototypes></host_prototypes>", "<host_prototypes/>"),
        ("<tags></tags>", "<tags/>"),
        ("<valuemap></valuemap>", "<valuemap/>"),
        ("<variables></variables>", "<variables/>"),
        ("<formula></formula>", "<formula/>"),
    ],
    collapses: &[
        (r"(?m)^[\s]*<filter>[\s]*</filter>[\s]*$", ""),
        (r"(?m)^([ \t]*)<valuemap>[\s]*</valuemap>[ \t]*$", "${1}<valuemap/>"),
    ],
};

pub static RULES_V44: RuleSet = RuleSet {
    name: "4.4",
    replacements: &[
        ("&#34;", "\""),
        ("&#39;", "'"),
        ("&#xD;", "&#13;"),
        ("&#xA;", "\n"),
        ("<url></url>", "<url/>"),
        ("<params></params>", "<params/>"),
        ("<application></application>", "<application/>"),
        ("<items></items>", ""),
        ("<groups></groups>", ""),
        ("<graphs></graphs>", ""),
        ("<macros></macros>", ""),
        ("<screens></screens>", ""),
        ("<mappings></mappings>", ""),
        ("<triggers></triggers>", ""),
        ("<templates></templates>", ""),
        ("<conditions></conditions>", ""),
        ("<value_maps></value_maps>", ""),
        ("<master_item></master_item>", ""),
        ("<dependencies></dependencies>", ""),
        ("<applications></applications>", ""),
        ("<preprocessing></preprocessing>", ""),
        ("<lld_macro_paths></lld_macro_paths>", ""),
        ("<discovery_rules></discovery_rules>", ""),
        ("<item_prototypes></item_prototypes>", ""),
        ("<graph_prototypes></graph_prototypes>", ""),
        ("<trigger_prototypes></trigger_prototypes>", ""),
        ("<application_prototypes></application_prototypes>", ""),
        // containers the 4.4 exporter also leaves out when empty
        ("<httptests></httptests>", ""),
        ("<host_prototypes></host_prototypes>", ""),
        ("<tags></tags>", ""),
        ("<headers></headers>", ""),
        ("<query_fields></query_fields>", ""),
        ("<variables></variables>", ""),
        ("<steps></steps>", ""),
        ("<group_links></group_links>", ""),
        ("<group_prototypes></group_prototypes>", ""),
    ],
    collapses: &[
        (r"(?m)^[\s]*<filter>[\s]*</filter>[\s]*$", ""),
        (r"(?m)^[\s]*<valuemap>[\s]*</valuemap>[\s]*$", ""),
    ],
};
