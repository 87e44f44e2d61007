//! XML codec
//!
//! Documents travel through an ordered `serde_json::Value` tree: the writer
//! emits one element per object field in insertion order, the reader builds
//! the same tree back from element events. List containers wrap one element
//! per entry, named by the schema's [`XmlLayout`]:
//!
//! ```text
//! "templates": [ {...}, {...} ]   <templates><template>...</template><template>...</template></templates>
//! ```

mod reader;
mod writer;

pub use reader::parse_xml;
pub use writer::serialize_xml;

/// Element naming rules for one schema.
#[derive(Debug)]
pub struct XmlLayout {
    /// Name of the document root element.
    pub root: &'static str,
    /// List container element names and the element wrapping each entry.
    pub lists: &'static [(&'static str, &'static str)],
}

impl XmlLayout {
    /// The entry element of `container`, or `None` if it is not a list.
    pub fn item_name(&self, container: &str) -> Option<&'static str> {
        self.lists
            .iter()
            .find(|(name, _)| *name == container)
            .map(|(_, item)| *item)
    }
}
