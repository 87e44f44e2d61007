//! XML output normalization
//!
//! Generic encoding renders unset fields as empty paired tags and escapes
//! quotes and newlines as numeric references. A [`Normalizer`] rewrites that
//! output into the exporter's own style for one version:
//!
//! 1. literal replacements from the version's [`RuleSet`]
//! 2. structural collapses of multi-line empty elements
//! 3. removal of whitespace-only lines
//!
//! and finally prefixes a single XML declaration.

pub mod rules;

use std::borrow::Cow;
use std::collections::HashMap;

use regex::{Captures, Regex};

pub use rules::{RULES_V40, RULES_V44, RuleSet, RuleSetId};

use crate::error::{Error, Result};

/// Declaration every normalized document starts with.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const BLANK_LINES: &str = r"(?m)^\s*$[\r\n]*";

/// A compiled [`RuleSet`].
#[derive(Debug)]
pub struct Normalizer {
    rules: &'static RuleSet,
    literals: Option<Regex>,
    replacements: HashMap<&'static str, &'static str>,
    collapses: Vec<(Regex, &'static str)>,
    blank_lines: Regex,
}

impl Normalizer {
    /// Compile and validate a rule set.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRule`] if a pattern is empty or repeated, if a
    /// replacement would re-trigger a pattern of the same table, or if a
    /// collapse pattern is not a valid regular expression.
    pub fn new(rules: &'static RuleSet) -> Result<Self> {
        let invalid = |message: String| Error::InvalidRule {
            rule_set: rules.name.to_string(),
            message,
        };

        let mut replacements = HashMap::with_capacity(rules.replacements.len());
        for &(pattern, replacement) in rules.replacements {
            if pattern.is_empty() {
                return Err(invalid("empty pattern".to_string()));
            }
            if replacements.insert(pattern, replacement).is_some() {
                return Err(invalid(format!("duplicate pattern {pattern:?}")));
            }
        }

        for &(pattern, replacement) in rules.replacements {
            if replacement == pattern {
                continue;
            }
            if let Some(&(other, _)) = rules
                .replacements
                .iter()
                .find(|(other, _)| replacement.contains(other))
            {
                return Err(invalid(format!(
                    "replacement for {pattern:?} reintroduces pattern {other:?}"
                )));
            }
        }

        let literals = if rules.replacements.is_empty() {
            None
        } else {
            let alternation = rules
                .replacements
                .iter()
                .map(|(pattern, _)| regex::escape(pattern))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&alternation).map_err(|e| invalid(e.to_string()))?)
        };

        let collapses = rules
            .collapses
            .iter()
            .map(|&(pattern, replacement)| {
                Regex::new(pattern)
                    .map(|re| (re, replacement))
                    .map_err(|e| invalid(format!("{pattern:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let blank_lines = Regex::new(BLANK_LINES).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            rules,
            literals,
            replacements,
            collapses,
            blank_lines,
        })
    }

    pub fn rules(&self) -> &'static RuleSet {
        self.rules
    }

    /// Normalize encoded XML. Any declaration already present is replaced.
    pub fn normalize(&self, xml: &str) -> String {
        let body = strip_declaration(xml);

        let mut text: Cow<'_, str> = match &self.literals {
            Some(literals) => literals.replace_all(body, |caps: &Captures<'_>| {
                self.replacements.get(&caps[0]).copied().unwrap_or_default()
            }),
            None => Cow::Borrowed(body),
        };

        for (pattern, replacement) in &self.collapses {
            if pattern.is_match(&text) {
                text = Cow::Owned(pattern.replace_all(&text, *replacement).into_owned());
            }
        }

        let text = self.blank_lines.replace_all(&text, "");

        let mut output = String::with_capacity(XML_HEADER.len() + text.len());
        output.push_str(XML_HEADER);
        output.push_str(&text);
        output
    }
}

/// Drop a leading byte order mark and XML declaration.
fn strip_declaration(xml: &str) -> &str {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let trimmed = xml.trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some(end) = trimmed.find("?>") {
            return trimmed[end + 2..].trim_start();
        }
    }
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn v40() -> Normalizer {
        Normalizer::new(&RULES_V40).unwrap()
    }

    fn v44() -> Normalizer {
        Normalizer::new(&RULES_V44).unwrap()
    }

    const TEMPLATE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<zabbix_export>
    <version>4.0</version>
    <templates>
        <template>
            <template>Template Demo</template>
            <description></description>
            <macros></macros>
            <items></items>
            <screens></screens>
        </template>
    </templates>
    <graphs></graphs>
</zabbix_export>";

    #[test]
    fn test_builtin_rule_sets_compile() {
        assert_eq!(v40().rules().name, "4.0");
        assert_eq!(v44().rules().name, "4.4");
    }

    #[test]
    fn test_empty_macros_differ_per_version() {
        let out40 = v40().normalize(TEMPLATE);
        assert!(out40.contains("            <macros/>\n"));

        let out44 = v44().normalize(TEMPLATE);
        assert!(!out44.contains("<macros"));
    }

    #[test]
    fn test_v40_output() {
        assert_eq!(
            v40().normalize(TEMPLATE),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<zabbix_export>
    <version>4.0</version>
    <templates>
        <template>
            <template>Template Demo</template>
            <description/>
            <macros/>
            <items></items>
            <screens/>
        </template>
    </templates>
</zabbix_export>"
        );
    }

    #[test]
    fn test_v44_output() {
        assert_eq!(
            v44().normalize(TEMPLATE),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<zabbix_export>
    <version>4.0</version>
    <templates>
        <template>
            <template>Template Demo</template>
            <description></description>
        </template>
    </templates>
</zabbix_export>"
        );
    }

    #[test]
    fn test_entity_artifacts_are_rewritten() {
        let xml = "<zabbix_export>\n    <expression>{last()}=&#34;a&#39;&#xD;&#xA;b</expression>\n</zabbix_export>";
        assert_eq!(
            v44().normalize(xml),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<zabbix_export>\n    \
             <expression>{last()}=\"a'&#13;\nb</expression>\n</zabbix_export>"
        );
    }

    #[test]
    fn test_multiline_empty_elements_collapse() {
        let xml = "<zabbix_export>
    <discovery_rule>
        <filter>
            <conditions></conditions>
        </filter>
        <valuemap>
        </valuemap>
        <lifetime>30d</lifetime>
    </discovery_rule>
</zabbix_export>";

        assert_eq!(
            v40().normalize(xml),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<zabbix_export>
    <discovery_rule>
        <filter>
            <conditions/>
        </filter>
        <valuemap/>
        <lifetime>30d</lifetime>
    </discovery_rule>
</zabbix_export>"
        );
        assert_eq!(
            v44().normalize(xml),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<zabbix_export>
    <discovery_rule>
        <lifetime>30d</lifetime>
    </discovery_rule>
</zabbix_export>"
        );
    }

    #[test]
    fn test_whitespace_only_lines_are_removed() {
        let xml = "<zabbix_export>\n    \n\t\n<version>4.4</version>\n\n</zabbix_export>";
        let out = v44().normalize(xml);
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<zabbix_export>\n<version>4.4</version>\n</zabbix_export>"
        );
        assert!(out.lines().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn test_header_appears_once() {
        let with_header = v40().normalize(TEMPLATE);
        let without_header = v40().normalize(TEMPLATE.split_once('\n').unwrap().1);
        let with_bom = v40().normalize(&format!("\u{feff}{TEMPLATE}"));

        for out in [&with_header, &without_header, &with_bom] {
            assert!(out.starts_with(XML_HEADER));
            assert_eq!(out.matches("<?xml").count(), 1);
        }
        assert_eq!(with_header, without_header);
        assert_eq!(with_header, with_bom);
    }

    #[test]
    fn test_normalizing_twice_is_a_no_op() {
        for normalizer in [v40(), v44()] {
            let once = normalizer.normalize(TEMPLATE);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_self_retriggering_replacement_is_rejected() {
        static LOOPING: RuleSet = RuleSet {
            name: "looping",
            replacements: &[("<a></a>", "<b></b>"), ("<b></b>", "")],
            collapses: &[],
        };
        let err = Normalizer::new(&LOOPING).unwrap_err();
        assert!(matches!(err, Error::InvalidRule { ref rule_set, .. } if rule_set == "looping"));
        assert!(err.to_string().contains("reintroduces"));
    }

    #[test]
    fn test_invalid_rule_sets_are_rejected() {
        static DUPLICATE: RuleSet = RuleSet {
            name: "duplicate",
            replacements: &[("<a></a>", ""), ("<a></a>", "<a/>")],
            collapses: &[],
        };
        static BAD_PATTERN: RuleSet = RuleSet {
            name: "bad",
            replacements: &[],
            collapses: &[("(?m)^(<a>", "")],
        };
        assert!(Normalizer::new(&DUPLICATE).is_err());
        assert!(Normalizer::new(&BAD_PATTERN).is_err());
    }

    #[test]
    fn test_earlier_entries_win() {
        static OVERLAP: RuleSet = RuleSet {
            name: "overlap",
            replacements: &[("<ab>", "x"), ("<a", "y")],
            collapses: &[],
        };
        let out = Normalizer::new(&OVERLAP).unwrap().normalize("<ab><ac");
        assert_eq!(out, format!("{XML_HEADER}xyc"));
    }
}
