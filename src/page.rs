//! A loaded page: its document plus the behaviors bound to it.

use scraper::Selector;

use crate::dom::{Document, NodeId};
use crate::modules::interactions::{ClickOutcome, Interactions};

#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    interactions: Interactions,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self::from_document(Document::parse(html))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            interactions: Interactions::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn interactions(&self) -> &Interactions {
        &self.interactions
    }

    pub fn interactions_mut(&mut self) -> &mut Interactions {
        &mut self.interactions
    }

    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.document.select(selector)
    }

    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.document.select_first(selector)
    }

    /// Simulate a user click on `node`.
    pub fn click(&mut self, node: NodeId) -> Option<ClickOutcome> {
        self.interactions.click(&mut self.document, node)
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}
