//! # Messages and Labels
//!
//! A single-locale message table implementing the translator and label
//! boundaries. Templates are plain `&'static str` with `{token}` slots;
//! besides `{name}` and `{id}`, a template may name any scalar record field
//! and it is interpolated from the fetched record when one is present.

use admin_core::{LabelResolver, TitleArgs, Translator, ITEM_DOESNT_EXIST_KEY, PAGE_SHOW_KEY};
use serde_json::Value;
use std::collections::HashMap;

/// Message templates for one locale.
pub struct Messages {
    pub page_show: &'static str,
    pub item_doesnt_exist: &'static str,
}

pub const EN_US: Messages = Messages {
    page_show: "Show {name} {id}",
    item_doesnt_exist: "Element does not exist",
};

/// Translator backed by the [`EN_US`] message table.
#[derive(Default)]
pub struct EnglishTranslator;

impl EnglishTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Translator for EnglishTranslator {
    fn translate(&self, key: &str, args: &TitleArgs<'_>) -> String {
        let template = match key {
            PAGE_SHOW_KEY => EN_US.page_show,
            ITEM_DOESNT_EXIST_KEY => EN_US.item_doesnt_exist,
            // Unknown keys render as themselves, so missing entries stay visible.
            other => other,
        };
        interpolate(template, args)
    }
}

fn interpolate(template: &str, args: &TitleArgs<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                if let Some(value) = lookup(&after[..end], args) {
                    out.push_str(&value);
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

fn lookup(token: &str, args: &TitleArgs<'_>) -> Option<String> {
    match token {
        "name" => Some(args.name.to_string()),
        "id" => args.id.map(ToString::to_string),
        field => match args.record?.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        },
    }
}

/// Label resolver with per-resource singular/plural overrides and a
/// humanizing fallback for everything else.
#[derive(Default)]
pub struct StaticLabels {
    labels: HashMap<String, (String, String)>,
}

impl StaticLabels {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(
        mut self,
        resource: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        self.labels
            .insert(resource.into(), (singular.into(), plural.into()));
        self
    }
}

impl LabelResolver for StaticLabels {
    fn label_for(&self, resource: &str, count: usize) -> String {
        if let Some((singular, plural)) = self.labels.get(resource) {
            return if count == 1 { singular } else { plural }.clone();
        }
        humanize(resource, count)
    }
}

/// Fallback label: capitalize, and naively singularize for count == 1.
fn humanize(resource: &str, count: usize) -> String {
    let base = if count == 1 {
        resource.strip_suffix('s').unwrap_or(resource)
    } else {
        resource
    };
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_core::{Identifier, Record};

    #[test]
    fn show_title_renders_name_and_id() {
        let id = Identifier::Number(42);
        let title = EnglishTranslator.translate(
            PAGE_SHOW_KEY,
            &TitleArgs {
                name: "Book",
                id: Some(&id),
                record: None,
            },
        );
        assert_eq!(title, "Show Book 42");
    }

    #[test]
    fn missing_id_renders_cleanly() {
        let title = EnglishTranslator.translate(
            PAGE_SHOW_KEY,
            &TitleArgs {
                name: "Book",
                id: None,
                record: None,
            },
        );
        assert_eq!(title, "Show Book");
    }

    #[test]
    fn templates_may_interpolate_record_fields() {
        let record = Record::new().with("title", "Dune");
        let args = TitleArgs {
            name: "Book",
            id: None,
            record: Some(&record),
        };
        assert_eq!(interpolate("{name}: {title}", &args), "Book: Dune");
    }

    #[test]
    fn labels_fall_back_to_humanized_resource_names() {
        let labels = StaticLabels::new().with("books", "Book", "Books");
        assert_eq!(labels.label_for("books", 1), "Book");
        assert_eq!(labels.label_for("books", 2), "Books");
        assert_eq!(labels.label_for("posts", 1), "Post");
        assert_eq!(labels.label_for("posts", 3), "Posts");
    }
}
