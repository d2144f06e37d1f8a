//! Selectors for marker attributes.
//!
//! Marker names and image slot keys come from page markup and configuration,
//! so they are quoted into a CSS attribute selector rather than spliced in.

use once_cell::sync::Lazy;
use scraper::Selector;

static MATCH_NOTHING: Lazy<Selector> = Lazy::new(|| Selector::parse(":not(*)").unwrap());

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\a "),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// `[name="value"]`. An unusable attribute name yields a selector that
/// matches nothing.
pub fn attr_equals(name: &str, value: &str) -> Selector {
    let css = format!("[{name}={}]", quote(value));
    match Selector::parse(&css) {
        Ok(selector) => selector,
        Err(err) => {
            log::warn!("invalid marker selector {css}: {err}");
            MATCH_NOTHING.clone()
        }
    }
}

#[cfg(test)]
pub(crate) fn css(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}
