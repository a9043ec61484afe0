//! In-memory document for headless hosts and tests

use std::cell::RefCell;
use std::rc::Rc;

use super::{ElementSource, StyleTarget};
use crate::error::{Error, Result};
use crate::transform::BoxSize;

#[derive(Debug, Clone, PartialEq, Default)]
struct Style {
    id: String,
    classes: Vec<String>,
    size: BoxSize,
    transform: Option<String>,
    transform_origin: Option<String>,
    /// Failure message, and the one property it applies to (`None`: all).
    write_error: Option<(Option<String>, String)>,
}

/// A shared handle to one element's inline style. Clones see the same style.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryElement(Rc<RefCell<Style>>);

impl MemoryElement {
    pub fn new(id: &str, size: BoxSize) -> Self {
        Self(Rc::new(RefCell::new(Style {
            id: id.to_string(),
            size,
            ..Style::default()
        })))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_transform(self, css: &str) -> Self {
        self.0.borrow_mut().transform = Some(css.to_string());
        self
    }

    pub fn with_transform_origin(self, css: &str) -> Self {
        self.0.borrow_mut().transform_origin = Some(css.to_string());
        self
    }

    /// Make every later write fail with `message`.
    pub fn fail_writes(&self, message: &str) {
        self.0.borrow_mut().write_error = Some((None, message.to_string()));
    }

    /// Make later writes to `property` fail with `message`.
    pub fn fail_writes_to(&self, property: &str, message: &str) {
        self.0.borrow_mut().write_error = Some((Some(property.to_string()), message.to_string()));
    }

    pub fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn matches(&self, selector: &str) -> bool {
        let style = self.0.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            style.id == id
        } else if let Some(class) = selector.strip_prefix('.') {
            style.classes.iter().any(|c| c == class)
        } else {
            false
        }
    }
}

impl StyleTarget for MemoryElement {
    fn transform(&self) -> Option<String> {
        self.0.borrow().transform.clone()
    }

    fn transform_origin(&self) -> Option<String> {
        self.0.borrow().transform_origin.clone()
    }

    fn box_size(&self) -> BoxSize {
        self.0.borrow().size
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        match property {
            "transform" => self.transform(),
            "transform-origin" => self.transform_origin(),
            _ => None,
        }
    }

    fn set_style(&self, property: &str, value: Option<&str>) -> Result<()> {
        let mut style = self.0.borrow_mut();
        if let Some((target, message)) = &style.write_error {
            if target.as_deref().is_none_or(|t| t == property) {
                return Err(Error::Style(message.clone()));
            }
        }
        let slot = match property {
            "transform" => &mut style.transform,
            "transform-origin" => &mut style.transform_origin,
            other => return Err(Error::Style(format!("unsupported property {other}"))),
        };
        *slot = value.map(str::to_string);
        Ok(())
    }
}

/// Elements matched by `#id` or `.class`, in insertion order
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<Vec<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, element: MemoryElement) {
        self.elements.borrow_mut().push(element);
    }
}

impl ElementSource for MemoryDocument {
    type Element = MemoryElement;

    fn query(&self, selector: &str) -> Option<MemoryElement> {
        let selector = selector.trim();
        self.elements
            .borrow()
            .iter()
            .find(|el| el.matches(selector))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_by_id_and_class() {
        let doc = MemoryDocument::new();
        doc.insert(MemoryElement::new("a", BoxSize::new(1.0, 1.0)).with_class("item"));
        doc.insert(MemoryElement::new("b", BoxSize::new(1.0, 1.0)).with_class("item"));

        assert_eq!(doc.query("#b").map(|el| el.id()), Some("b".to_string()));
        assert_eq!(doc.query(".item").map(|el| el.id()), Some("a".to_string()));
        assert_eq!(doc.query("#c"), None);
        assert_eq!(doc.query("div"), None);
    }

    #[test]
    fn clones_share_style() {
        let el = MemoryElement::new("a", BoxSize::new(1.0, 1.0));
        let other = el.clone();
        el.write_transform("none", "0px 0px 0").unwrap();
        assert_eq!(other.transform().as_deref(), Some("none"));
    }
}
