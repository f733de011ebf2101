//! In-memory document tree.
//!
//! This module provides the element tree the renderer and page controllers
//! operate on: a small substitute for a browser DOM with ids, classes,
//! attributes, inline styles, text content, and child elements. The tree
//! serializes to HTML for `folio build`.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A single element node.
///
/// Text content is serialized before child elements, which is sufficient for
/// every construct the renderer produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder: sets the element id.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Builder: adds a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Builder: appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element id, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Returns an attribute value, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Sets an attribute.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Removes an attribute. Removing an absent attribute is a no-op.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    /// Returns an inline style property, if present.
    #[must_use]
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    /// Sets an inline style property (including CSS custom properties).
    pub fn set_style(&mut self, name: &str, value: &str) {
        self.styles.insert(name.to_string(), value.to_string());
    }

    /// Returns true if the element carries the class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class. Adding a class twice keeps a single entry.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class. Removing an absent class is a no-op.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replaces the whole class list.
    pub fn set_classes(&mut self, classes: &[&str]) {
        self.classes = classes.iter().map(|c| (*c).to_string()).collect();
    }

    /// Appends a child element.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Removes all child elements.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Returns the child elements.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the child elements mutably.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// Finds the first element (depth-first, self included) with the given id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`Element::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Finds the first element (depth-first, self included) carrying a class.
    #[must_use]
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_class(class))
    }

    /// Mutable variant of [`Element::find_class`].
    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_class_mut(class) {
                return Some(found);
            }
        }
        None
    }

    /// Collects every element (depth-first, self included) carrying a class.
    #[must_use]
    pub fn query_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_class(class, &mut out);
        out
    }

    fn collect_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_class(class, out);
        }
    }

    /// Applies `f` to every element (depth-first, self included) carrying a class.
    pub fn for_each_class_mut<F: FnMut(&mut Element)>(&mut self, class: &str, f: &mut F) {
        if self.has_class(class) {
            f(self);
        }
        for child in &mut self.children {
            child.for_each_class_mut(class, f);
        }
    }

    /// Serializes the element subtree to HTML.
    fn write_html(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_attr(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
        }
        if !self.styles.is_empty() {
            let style: Vec<String> = self
                .styles
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect();
            let _ = write!(out, " style=\"{}\"", escape_attr(&style.join("; ")));
        }

        if VOID_TAGS.contains(&self.tag.as_str()) {
            let _ = writeln!(out, ">");
            return;
        }

        if self.children.is_empty() {
            let _ = writeln!(out, ">{}</{}>", escape_text(&self.text), self.tag);
            return;
        }

        let _ = writeln!(out, ">");
        if !self.text.is_empty() {
            let _ = writeln!(out, "{indent}  {}", escape_text(&self.text));
        }
        for child in &self.children {
            child.write_html(out, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{}>", self.tag);
    }
}

/// The page document: an `html` root plus focus bookkeeping.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    focused: Option<String>,
}

impl Document {
    /// Creates a document with empty `head` and `body` elements.
    #[must_use]
    pub fn new() -> Self {
        let root = Element::new("html")
            .with_child(Element::new("head"))
            .with_child(Element::new("body"));
        Self {
            root,
            focused: None,
        }
    }

    /// Returns the `html` root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns the `html` root element mutably (for document-wide styles).
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Returns the `head` element.
    #[must_use]
    pub fn head(&self) -> &Element {
        &self.root.children[0]
    }

    /// Returns the `head` element mutably.
    pub fn head_mut(&mut self) -> &mut Element {
        &mut self.root.children[0]
    }

    /// Returns the `body` element.
    #[must_use]
    pub fn body(&self) -> &Element {
        &self.root.children[1]
    }

    /// Returns the `body` element mutably.
    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.root.children[1]
    }

    /// Finds an element anywhere in the document by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    /// Mutable variant of [`Document::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_mut(id)
    }

    /// Finds the first element carrying a class anywhere in the document.
    #[must_use]
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.root.find_class(class)
    }

    /// Mutable variant of [`Document::find_class`].
    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        self.root.find_class_mut(class)
    }

    /// Collects every element carrying a class anywhere in the document.
    #[must_use]
    pub fn query_class(&self, class: &str) -> Vec<&Element> {
        self.root.query_class(class)
    }

    /// Applies `f` to every element carrying a class anywhere in the document.
    pub fn for_each_class_mut<F: FnMut(&mut Element)>(&mut self, class: &str, f: &mut F) {
        self.root.for_each_class_mut(class, f);
    }

    /// Moves input focus to the element with the given id.
    pub fn set_focus(&mut self, id: &str) {
        if self.find(id).is_some() {
            self.focused = Some(id.to_string());
        }
    }

    /// Clears input focus.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Returns the id of the focused element, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Serializes the whole document to an HTML page.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.root.write_html(&mut out, 0);
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes text content for HTML output.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes an attribute value for HTML output.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
