//! Mutable HTML document built on `scraper`.
//!
//! The parsed `scraper::Html` tree is kept as is and edited in place through
//! `ego_tree`. Replaced children are detached and never reused, so a stale
//! id can still be read without aliasing a newer node. Serialization goes
//! through html5ever's serializer with scripting enabled, matching how the
//! markup was parsed.

use std::io;

use ego_tree::NodeRef;
use ego_tree::iter::Edge;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector};

use super::patch::{DomWrite, WriteOp};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Elements whose parser drops one leading newline of their content.
const NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(ego_tree::NodeId);

/// Mutable HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

fn plain_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(name))
}

fn is_plain(qual: &QualName, name: &str) -> bool {
    qual.ns.is_empty() && (&*qual.local).eq_ignore_ascii_case(name)
}

fn style_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

impl Document {
    /// Parse a complete HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn root(&self) -> NodeId {
        NodeId(self.html.tree.root().id())
    }

    fn node(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.html.tree.get(id.0)
    }

    pub fn data(&self, id: NodeId) -> Option<&Node> {
        self.node(id).map(|node| node.value())
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.data(id)?.as_element()
    }

    pub fn element_ref(&self, id: NodeId) -> Option<ElementRef<'_>> {
        ElementRef::wrap(self.node(id)?)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent().map(|parent| NodeId(parent.id()))
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .map(|node| node.children().map(|child| NodeId(child.id())).collect())
            .unwrap_or_default()
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .map(|node| {
                node.children()
                    .filter(|child| child.value().is_element())
                    .map(|child| NodeId(child.id()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the node is still reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let root = self.root();
        self.node(id).is_some_and(|node| {
            node.id() == root.0 || node.ancestors().any(|ancestor| ancestor.id() == root.0)
        })
    }

    /// Descendants of `scope` in document order, excluding `scope` itself.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        self.node(scope)
            .map(|node| node.descendants().skip(1).map(|node| NodeId(node.id())).collect())
            .unwrap_or_default()
    }

    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.select_within(self.root(), selector)
    }

    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        let root = self.html.tree.root();
        root.descendants()
            .filter_map(ElementRef::wrap)
            .find(|element| selector.matches(element))
            .map(|element| NodeId(element.id()))
    }

    /// Attached elements below `scope` matching `selector`, in document order.
    pub fn select_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let Some(scope) = self.node(scope) else {
            return Vec::new();
        };
        scope
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|element| selector.matches(element))
            .map(|element| NodeId(element.id()))
            .collect()
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let node = self.node(id)?;
        std::iter::once(node)
            .chain(node.ancestors())
            .filter_map(ElementRef::wrap)
            .find(|element| selector.matches(element))
            .map(|element| NodeId(element.id()))
    }

    pub fn document_element(&self) -> Option<NodeId> {
        self.html
            .tree
            .root()
            .children()
            .find(|child| child.value().is_element())
            .map(|child| NodeId(child.id()))
    }

    pub fn body(&self) -> Option<NodeId> {
        let html = self.node(self.document_element()?)?;
        html.children()
            .find(|child| {
                child
                    .value()
                    .as_element()
                    .is_some_and(|element| element.name() == "body")
            })
            .map(|child| NodeId(child.id()))
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attrs
            .iter()
            .find(|(qual, _)| is_plain(qual, name))
            .map(|(_, value)| &value[..])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|token| token == class))
    }

    pub fn style_property(&self, id: NodeId, name: &str) -> Option<String> {
        style_declarations(self.attr(id, "style")?)
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        node.descendants()
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    /// Rewrite an element's attribute list. The element is rebuilt so
    /// scraper's cached id and class lookups stay in sync with its attributes.
    fn edit_attrs<F>(&mut self, id: NodeId, edit: F) -> bool
    where
        F: FnOnce(&mut Vec<(QualName, StrTendril)>) -> bool,
    {
        let Some(mut node) = self.html.tree.get_mut(id.0) else {
            return false;
        };
        let (name, mut attrs) = match node.value() {
            Node::Element(element) => (
                element.name.clone(),
                element
                    .attrs
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect::<Vec<_>>(),
            ),
            _ => return false,
        };
        if !edit(&mut attrs) {
            return false;
        }
        let attributes = attrs
            .into_iter()
            .map(|(name, value)| Attribute { name, value })
            .collect();
        *node.value() = Node::Element(Element::new(name, attributes));
        true
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = StrTendril::from_slice(&value.into());
        self.edit_attrs(id, |attrs| {
            match attrs.iter_mut().find(|(qual, _)| is_plain(qual, name)) {
                Some((_, existing)) if *existing == value => return false,
                Some((_, existing)) => *existing = value,
                None => attrs.push((plain_name(name), value)),
            }
            true
        });
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> bool {
        self.edit_attrs(id, |attrs| {
            let before = attrs.len();
            attrs.retain(|(qual, _)| !is_plain(qual, name));
            before != attrs.len()
        })
    }

    /// Returns `true` when the class list changed.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.element(id).is_none() || self.has_class(id, class) {
            return false;
        }
        let mut tokens: Vec<&str> = self
            .attr(id, "class")
            .map(|classes| classes.split_ascii_whitespace().collect())
            .unwrap_or_default();
        tokens.push(class);
        let joined = tokens.join(" ");
        self.set_attr(id, "class", joined);
        true
    }

    /// Returns `true` when the class list changed. Removing the last class
    /// drops the attribute.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        if !self.has_class(id, class) {
            return false;
        }
        let joined = self
            .attr(id, "class")
            .unwrap_or_default()
            .split_ascii_whitespace()
            .filter(|token| *token != class)
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            self.remove_attr(id, "class");
        } else {
            self.set_attr(id, "class", joined);
        }
        true
    }

    /// Flip a class; returns whether it is present afterwards.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class)
        }
    }

    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) {
        if self.element(id).is_none() {
            return;
        }
        let mut declarations = style_declarations(self.attr(id, "style").unwrap_or_default());
        match declarations.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => declarations.push((name.to_string(), value.to_string())),
        }
        let style = declarations
            .iter()
            .map(|(key, value)| format!("{key}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr(id, "style", style);
    }

    fn clear_children(&mut self, id: NodeId) {
        for child in self.children(id) {
            if let Some(mut child) = self.html.tree.get_mut(child.0) {
                child.detach();
            }
        }
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if self.element(id).is_none() {
            return;
        }
        self.clear_children(id);
        if text.is_empty() {
            return;
        }
        if let Some(mut node) = self.html.tree.get_mut(id.0) {
            node.append(Node::Text(Text {
                text: StrTendril::from_slice(text),
            }));
        }
    }

    /// Replace all children with the nodes parsed from an HTML fragment.
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) {
        if self.element(id).is_none() {
            return;
        }
        self.clear_children(id);

        let fragment = Html::parse_fragment(html);
        let merged = self.html.tree.extend_tree(fragment.tree).id();
        let parsed: Vec<ego_tree::NodeId> = self
            .html
            .tree
            .get(merged)
            .and_then(|root| root.children().find(|child| child.value().is_element()))
            .map(|container| container.children().map(|child| child.id()).collect())
            .unwrap_or_default();

        if let Some(mut target) = self.html.tree.get_mut(id.0) {
            for child in parsed {
                target.append_id(child);
            }
        }
    }

    /// Apply a DOM write. Returns `false` for writes that are not DOM
    /// mutations (widget mounts and behavior registrations).
    pub fn apply(&mut self, write: &DomWrite) -> bool {
        let target = write.target;
        match &write.op {
            WriteOp::SetText(text) => self.set_text(target, text),
            WriteOp::SetInnerHtml(html) => self.set_inner_html(target, html),
            WriteOp::SetAttribute { name, value } => self.set_attr(target, name, value.as_str()),
            WriteOp::SetStyleProperty { name, value } => {
                self.set_style_property(target, name, value)
            }
            WriteOp::AddClass(class) => {
                self.add_class(target, class);
            }
            WriteOp::RemoveClass(class) => {
                self.remove_class(target, class);
            }
            WriteOp::Mount(_) | WriteOp::Listen(_) => return false,
        }
        true
    }

    pub fn to_html(&self) -> String {
        self.serialize(self.root(), TraversalScope::ChildrenOnly(None))
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        let context = self.element(id).map(|element| element.name.clone());
        self.serialize(id, TraversalScope::ChildrenOnly(context))
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        self.serialize(id, TraversalScope::IncludeNode)
    }

    fn serialize(&self, id: NodeId, traversal_scope: TraversalScope) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        let opts = SerializeOpts {
            scripting_enabled: true,
            traversal_scope,
            create_missing_parent: false,
        };
        let mut buf = Vec::new();
        if let Err(err) = html5ever::serialize(&mut buf, &Subtree(node), opts) {
            log::warn!("failed to serialize document: {err}");
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// A node and its descendants, fed to html5ever's serializer.
struct Subtree<'a>(NodeRef<'a, Node>);

fn keeps_leading_newline(node: NodeRef<'_, Node>, element: &Element) -> bool {
    &*element.name.ns == HTML_NAMESPACE
        && NEWLINE_ELEMENTS.contains(&element.name())
        && node
            .first_child()
            .and_then(|child| child.value().as_text().map(|text| text.starts_with('\n')))
            .unwrap_or(false)
}

impl Serialize for Subtree<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: &mut S,
        traversal_scope: TraversalScope,
    ) -> io::Result<()> {
        let skip_self = matches!(traversal_scope, TraversalScope::ChildrenOnly(_));
        for edge in self.0.traverse() {
            match edge {
                Edge::Open(node) => {
                    if skip_self && node == self.0 {
                        continue;
                    }
                    match node.value() {
                        Node::Doctype(doctype) => serializer.write_doctype(doctype.name())?,
                        Node::Comment(comment) => serializer.write_comment(comment)?,
                        Node::Text(text) => serializer.write_text(text)?,
                        Node::Element(element) => {
                            let attrs = element.attrs.iter().map(|(name, value)| (name, &value[..]));
                            serializer.start_elem(element.name.clone(), attrs)?;
                            if keeps_leading_newline(node, element) {
                                serializer.write_text("\n")?;
                            }
                        }
                        _ => {}
                    }
                }
                Edge::Close(node) => {
                    if skip_self && node == self.0 {
                        continue;
                    }
                    if let Some(element) = node.value().as_element() {
                        serializer.end_elem(element.name.clone())?;
                    }
                }
            }
        }
        Ok(())
    }
}
