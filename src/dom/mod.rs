//! DOM seam - where transform states come from and get written back
//!
//! The engine never touches a document directly. A host implements
//! [`ElementSource`] (selector lookup) and [`StyleTarget`] (style read/write);
//! `web` does that for `web_sys`, `memory` for headless use and tests.

pub mod memory;
pub mod web;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::primitives::Matrix4;
use crate::transform::{BoxSize, Origin, TransformState, parse_transform};

/// An element whose transform can be read and written
pub trait StyleTarget {
    /// Current `transform` value, `None` when unset.
    fn transform(&self) -> Option<String>;

    /// Current `transform-origin` value, `None` when unset.
    fn transform_origin(&self) -> Option<String>;

    /// Untransformed layout box.
    fn box_size(&self) -> BoxSize;

    /// Inline value of `property`, `None` when unset.
    fn inline_style(&self, property: &str) -> Option<String>;

    /// Set inline `property`; `None` removes it.
    fn set_style(&self, property: &str, value: Option<&str>) -> Result<()>;

    /// Write `transform-origin` then `transform`.
    ///
    /// If the transform write fails the previous inline origin is put back,
    /// so the element never renders a new origin with an old matrix.
    fn write_transform(&self, transform: &str, origin: &str) -> Result<()> {
        let previous = self.inline_style("transform-origin");
        self.set_style("transform-origin", Some(origin))?;
        self.set_style("transform", Some(transform)).inspect_err(|_| {
            if let Err(err) = self.set_style("transform-origin", previous.as_deref()) {
                warn!(%err, "could not restore transform-origin");
            }
        })
    }
}

/// Resolves selectors to elements
pub trait ElementSource {
    type Element: StyleTarget;

    fn query(&self, selector: &str) -> Option<Self::Element>;
}

/// What a lookup was asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Target<E> {
    Selector(String),
    Element(E),
    /// Anything else a dynamic caller handed over, named by its type.
    Other(String),
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

/// Find an element and read its transform state.
pub fn lookup<S: ElementSource>(
    source: &S,
    target: impl Into<Target<S::Element>>,
) -> Result<TransformState<S::Element>> {
    match target.into() {
        Target::Selector(selector) => {
            let element = source
                .query(&selector)
                .ok_or_else(|| Error::Lookup(selector.clone()))?;
            debug!(%selector, "element found");
            Ok(read(element))
        }
        Target::Element(element) => Ok(read(element)),
        Target::Other(kind) => Err(Error::Type(kind)),
    }
}

/// Read an element's current transform and origin.
///
/// An unset or unreadable `transform` counts as identity, an unset or
/// unreadable origin as the box centre.
pub fn read<E: StyleTarget>(element: E) -> TransformState<E> {
    let size = element.box_size();

    let matrix = element
        .transform()
        .map(|css| {
            parse_transform(&css).unwrap_or_else(|| {
                warn!(%css, "unreadable transform, using identity");
                Matrix4::IDENTITY
            })
        })
        .unwrap_or(Matrix4::IDENTITY);

    let origin = element
        .transform_origin()
        .map(|css| {
            Origin::parse(&css, size).unwrap_or_else(|err| {
                warn!(%css, %err, "unreadable transform-origin, using centre");
                Origin::center(size)
            })
        })
        .unwrap_or_else(|| Origin::center(size));

    TransformState::new(element, size, matrix, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory::{MemoryDocument, MemoryElement};

    fn document() -> MemoryDocument {
        let doc = MemoryDocument::new();
        doc.insert(MemoryElement::new("test", BoxSize::new(100.0, 100.0)).with_class("box"));
        doc
    }

    #[test]
    fn selector_and_element_agree() {
        let doc = document();
        let by_css = lookup(&doc, "#test").unwrap();
        let element = doc.query("#test").unwrap();
        let by_elem = lookup(&doc, Target::Element(element)).unwrap();
        assert_eq!(by_css, by_elem);
        assert_eq!(lookup(&doc, ".box").unwrap(), by_css);
    }

    #[test]
    fn missing_selector_is_lookup_error() {
        assert_eq!(
            lookup(&document(), "doesntexist").unwrap_err(),
            Error::Lookup("doesntexist".to_string())
        );
    }

    #[test]
    fn other_argument_is_type_error() {
        let err = lookup(&document(), Target::Other("function".to_string())).unwrap_err();
        assert_eq!(err, Error::Type("function".to_string()));
    }

    #[test]
    fn reads_existing_style() {
        let doc = MemoryDocument::new();
        doc.insert(
            MemoryElement::new("styled", BoxSize::new(200.0, 80.0))
                .with_transform("matrix(0.5, 0, 0, 2, 25, -50)")
                .with_transform_origin("0px 0px 0px"),
        );
        let state = lookup(&doc, "#styled").unwrap();
        assert_eq!(
            state.to_transform_matrix(),
            "matrix3d(0.5, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 25, -50, 0, 1)"
        );
        assert_eq!(state.origin_css(), "0px 0px 0");
        assert_eq!(state.size(), BoxSize::new(200.0, 80.0));
    }

    #[test]
    fn malformed_style_falls_back() {
        let doc = MemoryDocument::new();
        doc.insert(
            MemoryElement::new("odd", BoxSize::new(40.0, 20.0))
                .with_transform("matrix3d(1, 2)")
                .with_transform_origin("sideways"),
        );
        let state = lookup(&doc, "#odd").unwrap();
        assert_eq!(state.matrix(), Matrix4::IDENTITY);
        assert_eq!(state.origin_css(), "20px 10px 0");
    }

    #[test]
    fn failed_transform_write_restores_origin() {
        let styled = MemoryElement::new("styled", BoxSize::new(100.0, 100.0))
            .with_transform_origin("10px 10px 0");
        styled.fail_writes_to("transform", "transform is locked");
        assert_eq!(
            styled.write_transform("none", "0px 0px 0"),
            Err(Error::Style("transform is locked".to_string()))
        );
        assert_eq!(styled.transform_origin().as_deref(), Some("10px 10px 0"));

        let bare = MemoryElement::new("bare", BoxSize::new(100.0, 100.0));
        bare.fail_writes_to("transform", "transform is locked");
        assert!(bare.write_transform("none", "0px 0px 0").is_err());
        assert_eq!(bare.transform_origin(), None);
    }

    #[test]
    fn apply_then_lookup_round_trips() {
        let doc = document();
        let state = lookup(&doc, "#test")
            .unwrap()
            .rotate([2.0, -4.0, 0.6], 0.4242)
            .unwrap()
            .scale((0.5, 2.0))
            .unwrap()
            .change_origin("top left")
            .unwrap();
        state.apply().unwrap();

        let reread = lookup(&doc, "#test").unwrap();
        assert_eq!(reread.to_transform_matrix(), state.to_transform_matrix());
        assert_eq!(reread.origin_css(), state.origin_css());
    }
}
