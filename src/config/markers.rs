use scraper::Selector;

use crate::dom::attr_equals;

pub const DEFAULT_FIELD_MARKER: &str = "data-template";
pub const DEFAULT_IMAGE_MARKER: &str = "data-template-image";

/// Reserved attribute names that tag insertion points in page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Attribute naming a section field or list container.
    pub field: String,
    /// Attribute naming an image slot.
    pub image: String,
}

impl Markers {
    pub fn field_selector(&self, name: &str) -> Selector {
        attr_equals(&self.field, name)
    }

    pub fn image_selector(&self, slot: &str) -> Selector {
        attr_equals(&self.image, slot)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD_MARKER.to_string(),
            image: DEFAULT_IMAGE_MARKER.to_string(),
        }
    }
}
