//! # Title Composition
//!
//! Builds the human-readable page title for a show page from the resource
//! label, the resolved identifier, and (if already loaded) the record.

use crate::identifier::Identifier;
use crate::ports::{LabelResolver, Translator};
use crate::record::Record;

/// Translation key for the show-page title template.
pub const PAGE_SHOW_KEY: &str = "ra.page.show";

/// Template context handed to the translator.
///
/// The record is pass-through material: a locale template may interpolate
/// its fields, but composition never depends on record content and must
/// tolerate its absence.
pub struct TitleArgs<'a> {
    pub name: &'a str,
    pub id: Option<&'a Identifier>,
    pub record: Option<&'a Record>,
}

/// Compose the page title for one record.
///
/// Total: whatever the inputs, this returns whatever string the translator
/// renders and never fails.
pub fn compose_title(
    translator: &dyn Translator,
    labels: &dyn LabelResolver,
    resource: &str,
    id: Option<&Identifier>,
    record: Option<&Record>,
) -> String {
    let name = labels.label_for(resource, 1);
    translator.translate(
        PAGE_SHOW_KEY,
        &TitleArgs {
            name: &name,
            id,
            record,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{PlainLabels, PlainTranslator};

    #[test]
    fn composes_without_a_record() {
        let title = compose_title(
            &PlainTranslator,
            &PlainLabels,
            "posts",
            Some(&Identifier::Number(1234)),
            None,
        );
        assert!(!title.is_empty());
        assert!(title.contains("posts"));
        assert!(title.contains("1234"));
    }

    #[test]
    fn composes_without_an_identifier() {
        let title = compose_title(&PlainTranslator, &PlainLabels, "posts", None, None);
        assert!(title.contains("posts"));
    }
}
