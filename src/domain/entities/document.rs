//! CombinedDocument entity - the merged output of all rule fragments

use crate::domain::value_objects::ContentHash;

use super::RuleFragment;

/// Prefix of the banner line opening each fragment
pub const START_BANNER_PREFIX: &str = "--- START: ";
/// Prefix of the banner line closing each fragment
pub const END_BANNER_PREFIX: &str = "--- END: ";

/// Ordered, banner-delimited concatenation of rule fragments.
///
/// The content is a pure function of the fragments and their order, so two
/// builds over the same inputs produce byte-identical documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedDocument {
    content: String,
    fragments: Vec<String>,
}

impl CombinedDocument {
    /// The document written when the source directory has no fragments.
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            fragments: Vec::new(),
        }
    }

    /// Concatenate fragments in the given order.
    ///
    /// The result always ends with exactly one newline.
    pub fn from_fragments(fragments: &[RuleFragment]) -> Self {
        let mut content = String::new();
        for fragment in fragments {
            content.push_str(&fragment.render_block());
        }

        let mut content = content.trim_end().to_string();
        content.push('\n');

        Self {
            content,
            fragments: fragments.iter().map(|f| f.name().to_string()).collect(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Names of the fragments in output order
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// True when the document has no fragment content at all
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
