//! Shared context and markup helpers for section binders.

use std::borrow::Cow;

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Markers;
use scraper::Selector;

use crate::dom::{Document, Patch};

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());
static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\r?\n[ \t]*){2,}").unwrap());

/// Per-apply inputs shared by every binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindContext {
    /// Calendar year used for copyright lines, read when the context is built.
    pub year: i32,
    pub markers: Markers,
}

impl BindContext {
    pub fn new(markers: Markers) -> Self {
        Self {
            year: Local::now().year(),
            markers,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn field(&self, name: &str) -> Selector {
        self.markers.field_selector(name)
    }

    pub fn image(&self, slot: &str) -> Selector {
        self.markers.image_selector(slot)
    }
}

impl Default for BindContext {
    fn default() -> Self {
        Self::new(Markers::default())
    }
}

pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// CSS `url('…')` value with quotes and backslashes escaped.
pub fn css_url(url: &str) -> String {
    let escaped = url.replace('\\', "\\\\").replace('\'', "\\'");
    format!("url('{escaped}')")
}

/// 1-based, two digit ordinal (`01`, `02`, …).
pub fn padded_ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// 1-based ordinal without padding.
pub fn ordinal(index: usize) -> String {
    (index + 1).to_string()
}

pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

pub fn digits_only(value: &str) -> String {
    NON_DIGIT_RE.replace_all(value, "").into_owned()
}

/// Split on blank lines, dropping empty paragraphs.
pub fn paragraphs(value: &str) -> Vec<&str> {
    BLANK_LINE_RE
        .split(value)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// `<li>` items joined without separators.
pub fn list_items(items: &[String], style: Option<&str>) -> String {
    items
        .iter()
        .map(|item| match style {
            Some(style) => format!(r#"<li style="{}">- {}</li>"#, attr(style), text(item)),
            None => format!("<li>{}</li>", text(item)),
        })
        .collect()
}

/// Write `value` as the text of every node matching `selector`. Missing or
/// empty values leave the nodes untouched.
pub fn replace_text(
    patch: &mut Patch,
    document: &Document,
    selector: &Selector,
    value: Option<&str>,
) {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return;
    };
    for node in document.select(selector) {
        patch.set_text(node, value);
    }
}
