//! Browser host backed by `web_sys`
//!
//! Reads come from the computed style so that stylesheet transforms are
//! picked up; writes go to the inline style.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::{ElementSource, StyleTarget, Target};
use crate::error::{Error, Result};
use crate::primitives::{ArgValue, VectorArgs};
use crate::transform::{BoxSize, TransformState};

fn computed_property(element: &Element, name: &str) -> Option<String> {
    let style = web_sys::window()?.get_computed_style(element).ok().flatten()?;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn type_name(value: &JsValue) -> String {
    value
        .js_typeof()
        .as_string()
        .unwrap_or_else(|| "unknown".to_string())
}

impl StyleTarget for Element {
    fn transform(&self) -> Option<String> {
        computed_property(self, "transform")
    }

    fn transform_origin(&self) -> Option<String> {
        computed_property(self, "transform-origin")
    }

    fn box_size(&self) -> BoxSize {
        // offset size ignores transforms; SVG elements only have the client rect
        match self.dyn_ref::<HtmlElement>() {
            Some(html) => BoxSize::new(html.offset_width() as f64, html.offset_height() as f64),
            None => {
                let rect = self.get_bounding_client_rect();
                BoxSize::new(rect.width(), rect.height())
            }
        }
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        let value = self.dyn_ref::<HtmlElement>()?.style().get_property_value(property).ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_style(&self, property: &str, value: Option<&str>) -> Result<()> {
        let html = self.dyn_ref::<HtmlElement>().ok_or_else(|| {
            Error::Style(format!("<{}> has no inline style", self.tag_name().to_lowercase()))
        })?;
        let style = html.style();
        match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(drop),
        }
        .map_err(|err| Error::Style(js_message(&err)))
    }
}

/// The page's document
#[derive(Debug, Clone)]
pub struct WebDocument(Document);

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self(document)
    }

    /// The document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self)
    }
}

impl ElementSource for WebDocument {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        // an invalid selector throws; treat it as matching nothing
        self.0.query_selector(selector).ok().flatten()
    }
}

impl From<&JsValue> for Target<Element> {
    fn from(value: &JsValue) -> Self {
        if let Some(selector) = value.as_string() {
            Self::Selector(selector)
        } else if let Some(element) = value.dyn_ref::<Element>() {
            Self::Element(element.clone())
        } else {
            Self::Other(type_name(value))
        }
    }
}

/// Lookup from script: a selector string or an `Element`.
pub fn lookup_value(value: &JsValue) -> Result<TransformState<Element>> {
    let document = WebDocument::current()
        .ok_or_else(|| Error::Lookup("no document available".to_string()))?;
    super::lookup(&document, value)
}

/// Operation arguments from script: numbers, or a single array of three numbers.
pub fn args_from_js(values: &[JsValue]) -> Result<VectorArgs> {
    let values = values.iter().map(arg_from_js).collect::<Result<Vec<_>>>()?;
    VectorArgs::from_values(&values)
}

fn arg_from_js(value: &JsValue) -> Result<ArgValue> {
    if let Some(n) = value.as_f64() {
        return Ok(ArgValue::Number(n));
    }
    let array = value.dyn_ref::<Array>().ok_or_else(|| {
        Error::Argument(format!("expected a number or an array, got {}", type_name(value)))
    })?;
    array
        .iter()
        .map(|entry| {
            entry
                .as_f64()
                .ok_or_else(|| Error::Argument("array entries must be numbers".to_string()))
        })
        .collect::<Result<Vec<_>>>()
        .map(ArgValue::Sequence)
}
