use crate::dom::{Document, NodeId};

use super::{WidgetError, WidgetHost, WidgetKind, WidgetOptions};

const KIND_ATTR: &str = "data-widget";
const LIBRARY_ATTR: &str = "data-widget-library";
const OPTIONS_ATTR: &str = "data-widget-options";

/// Host that records widgets declaratively in the markup.
///
/// The target receives the widget kind, library and JSON options as data
/// attributes plus the library's `<name>-initialized` class, so a small
/// client script can boot the real slider from a statically rendered page.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarativeWidgets;

fn initialized_class(kind: WidgetKind) -> String {
    format!("{}-initialized", kind.library().name())
}

impl WidgetHost for DeclarativeWidgets {
    fn name(&self) -> &'static str {
        "declarative"
    }

    fn is_attached(&self, document: &Document, target: NodeId, kind: WidgetKind) -> bool {
        document.has_class(target, &initialized_class(kind))
    }

    fn destroy(
        &mut self,
        document: &mut Document,
        target: NodeId,
        kind: WidgetKind,
    ) -> Result<(), WidgetError> {
        document.remove_class(target, &initialized_class(kind));
        document.remove_attr(target, KIND_ATTR);
        document.remove_attr(target, LIBRARY_ATTR);
        document.remove_attr(target, OPTIONS_ATTR);
        Ok(())
    }

    fn construct(
        &mut self,
        document: &mut Document,
        target: NodeId,
        kind: WidgetKind,
        options: &WidgetOptions,
    ) -> Result<(), WidgetError> {
        if document.element(target).is_none() {
            return Err(WidgetError::Other(format!(
                "{} target is not an element",
                kind.name()
            )));
        }
        let encoded = serde_json::to_string(options)?;
        document.set_attr(target, KIND_ATTR, kind.name());
        document.set_attr(target, LIBRARY_ATTR, kind.library().name());
        document.set_attr(target, OPTIONS_ATTR, encoded);
        document.add_class(target, &initialized_class(kind));
        Ok(())
    }
}
