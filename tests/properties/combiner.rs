//! Property tests for combining fragments into one document.

use proptest::prelude::*;

use rulemerge::domain::entities::{CombinedDocument, RuleFragment};

fn fragments() -> impl Strategy<Value = Vec<RuleFragment>> {
    prop::collection::vec(
        ("[a-z]{1,8}\\.mdc", "[a-zA-Z0-9 #\\n]{0,40}")
            .prop_map(|(name, content)| RuleFragment::new(name, content)),
        0..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: each fragment's content sits between its own START and END banners, in order.
    #[test]
    fn property_banners_wrap_each_fragment(fragments in fragments()) {
        let doc = CombinedDocument::from_fragments(&fragments);
        let content = doc.content();

        let mut cursor = 0;
        for fragment in &fragments {
            let start = format!("--- START: {}\n", fragment.name());
            let end = format!("--- END: {}\n", fragment.name());

            let start_at = content[cursor..].find(&start).map(|i| i + cursor);
            prop_assert!(start_at.is_some());
            let body_at = start_at.unwrap_or_default() + start.len();

            let body = fragment.content().trim_end();
            prop_assert!(content[body_at..].starts_with(body));

            let end_at = body_at + body.len() + 1;
            prop_assert!(content[end_at..].starts_with(&end));
            cursor = end_at + end.len();
        }
    }

    /// PROPERTY: the document ends with exactly one newline and no blank tail.
    #[test]
    fn property_document_ends_with_single_newline(fragments in fragments()) {
        let doc = CombinedDocument::from_fragments(&fragments);
        let content = doc.content();

        prop_assert!(content.ends_with('\n'));
        prop_assert!(!content.ends_with("\n\n"));
        prop_assert_eq!(doc.fragment_count(), fragments.len());
    }

    /// PROPERTY: an empty fragment list combines to a blank document.
    #[test]
    fn property_no_fragments_is_blank(_seed in any::<u8>()) {
        let doc = CombinedDocument::from_fragments(&[]);
        prop_assert!(doc.is_blank());
        prop_assert_eq!(doc.content().trim(), "");
    }
}
