//! RuleFragment entity - a single rule file read from the source directory

/// A named unit of rule text.
///
/// Fragments are read once per run and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFragment {
    /// File name, unique within the source directory
    name: String,
    /// Raw file content
    content: String,
}

impl RuleFragment {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Render this fragment wrapped in its start/end banners.
    ///
    /// Trailing whitespace of the content is dropped and the block ends with
    /// a blank separator line.
    pub fn render_block(&self) -> String {
        format!(
            "{}{}\n{}\n{}{}\n\n",
            super::START_BANNER_PREFIX,
            self.name,
            self.content.trim_end(),
            super::END_BANNER_PREFIX,
            self.name
        )
    }
}
