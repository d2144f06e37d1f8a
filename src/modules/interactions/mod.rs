//! Click behaviors attached to rendered accordions and detail toggles.
//!
//! Behaviors are registered on the container a binder rendered into and
//! resolved by walking up from the clicked node, so replacing a container's
//! children never leaves handlers pointing at detached markup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::dom::{Document, NodeId};

pub const ACCORDION_MULTIPLE_CLASS: &str = "multiple";
pub const ACTIVE_CLASS: &str = "active";
pub const EXPANDED_CLASS: &str = "expanded";
pub const EXPAND_LABEL: &str = "Learn More";
pub const COLLAPSE_LABEL: &str = "Show Less";

static ACCORDION_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".dsn-accordion-item").unwrap());
static ACCORDION_HEADER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".dsn-accordion-header").unwrap());
static DETAILS_CARD: Lazy<Selector> = Lazy::new(|| Selector::parse(".solution-card").unwrap());
static DETAILS_TOGGLE: Lazy<Selector> = Lazy::new(|| Selector::parse(".solution-toggle").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Header clicks toggle `active` on their item.
    Accordion,
    /// "Learn more" toggles expand their card and relabel themselves.
    DetailsToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    AccordionToggled { item: NodeId, active: bool },
    DetailsToggled { card: NodeId, expanded: bool },
}

/// Registry of behaviors keyed by container node.
#[derive(Debug, Default, Clone)]
pub struct Interactions {
    bindings: HashMap<NodeId, Behavior>,
}

impl Interactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, container: NodeId, behavior: Behavior) {
        self.bindings.insert(container, behavior);
    }

    pub fn behavior(&self, container: NodeId) -> Option<Behavior> {
        self.bindings.get(&container).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Dispatch a click on `node`. Returns `None` when nothing handled it.
    pub fn click(&self, document: &mut Document, node: NodeId) -> Option<ClickOutcome> {
        if !document.is_attached(node) {
            return None;
        }

        if let Some(header) = document.closest(node, &ACCORDION_HEADER)
            && self.bound_ancestor(document, header, Behavior::Accordion).is_some()
        {
            let item = document.parent(header)?;
            let accordion = document.parent(item)?;
            return Some(toggle_accordion(document, accordion, item));
        }

        if let Some(toggle) = document.closest(node, &DETAILS_TOGGLE)
            && self.bound_ancestor(document, toggle, Behavior::DetailsToggle).is_some()
        {
            let card = document.closest(toggle, &DETAILS_CARD)?;
            let expanded = document.toggle_class(card, EXPANDED_CLASS);
            let label = if expanded { COLLAPSE_LABEL } else { EXPAND_LABEL };
            document.set_text(toggle, label);
            return Some(ClickOutcome::DetailsToggled { card, expanded });
        }

        None
    }

    fn bound_ancestor(
        &self,
        document: &Document,
        node: NodeId,
        behavior: Behavior,
    ) -> Option<NodeId> {
        let mut current = document.parent(node);
        while let Some(candidate) = current {
            if self.behavior(candidate) == Some(behavior) {
                return Some(candidate);
            }
            current = document.parent(candidate);
        }
        None
    }
}

fn toggle_accordion(document: &mut Document, accordion: NodeId, item: NodeId) -> ClickOutcome {
    if !document.has_class(accordion, ACCORDION_MULTIPLE_CLASS) {
        for sibling in document.select_within(accordion, &ACCORDION_ITEM) {
            if sibling != item {
                document.remove_class(sibling, ACTIVE_CLASS);
            }
        }
    }
    let active = document.toggle_class(item, ACTIVE_CLASS);
    ClickOutcome::AccordionToggled { item, active }
}
