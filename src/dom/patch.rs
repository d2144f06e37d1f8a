//! DOM write sets produced by the section binders.

use crate::external_deps::widgets::WidgetKind;
use crate::modules::interactions::Behavior;

use super::document::NodeId;

/// Single mutation aimed at one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    SetText(String),
    SetInnerHtml(String),
    SetAttribute { name: String, value: String },
    SetStyleProperty { name: String, value: String },
    AddClass(String),
    RemoveClass(String),
    /// Tear down and rebuild a third-party widget on the node.
    Mount(WidgetKind),
    /// Attach an interactive behavior to the node.
    Listen(Behavior),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomWrite {
    pub target: NodeId,
    pub op: WriteOp,
}

/// Ordered set of writes for one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    writes: Vec<DomWrite>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: NodeId, op: WriteOp) {
        self.writes.push(DomWrite { target, op });
    }

    pub fn set_text(&mut self, target: NodeId, text: impl Into<String>) {
        self.push(target, WriteOp::SetText(text.into()));
    }

    pub fn set_inner_html(&mut self, target: NodeId, html: impl Into<String>) {
        self.push(target, WriteOp::SetInnerHtml(html.into()));
    }

    pub fn set_attr(&mut self, target: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.push(
            target,
            WriteOp::SetAttribute {
                name: name.into(),
                value: value.into(),
            },
        );
    }

    pub fn set_style(&mut self, target: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.push(
            target,
            WriteOp::SetStyleProperty {
                name: name.into(),
                value: value.into(),
            },
        );
    }

    pub fn add_class(&mut self, target: NodeId, class: impl Into<String>) {
        self.push(target, WriteOp::AddClass(class.into()));
    }

    pub fn remove_class(&mut self, target: NodeId, class: impl Into<String>) {
        self.push(target, WriteOp::RemoveClass(class.into()));
    }

    pub fn mount(&mut self, target: NodeId, kind: WidgetKind) {
        self.push(target, WriteOp::Mount(kind));
    }

    pub fn listen(&mut self, target: NodeId, behavior: Behavior) {
        self.push(target, WriteOp::Listen(behavior));
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn writes(&self) -> &[DomWrite] {
        &self.writes
    }

    /// Writes targeting `node`, in order.
    pub fn writes_for(&self, node: NodeId) -> impl Iterator<Item = &WriteOp> {
        self.writes
            .iter()
            .filter(move |write| write.target == node)
            .map(|write| &write.op)
    }
}

impl IntoIterator for Patch {
    type Item = DomWrite;
    type IntoIter = std::vec::IntoIter<DomWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}
