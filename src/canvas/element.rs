//! Subject renderer - the box the playground transforms
//!
//! The engine writes `transform` and `transform-origin` straight to this
//! element's inline style, so the rendered style below never sets them.
//! Current state is mirrored into data-* attributes for DOM queries.

use dioxus::prelude::*;

pub const SUBJECT_ID: &str = "subject";
pub const SUBJECT_SIZE: f64 = 100.0;

#[component]
pub fn Subject(matrix: String, origin: String) -> Element {
    let style = format!(
        "position: absolute; left: 462px; top: 462px; width: {SUBJECT_SIZE}px; height: {SUBJECT_SIZE}px; \
         background: linear-gradient(135deg, #3b82f6, #6366f1); border-radius: 6px; \
         display: flex; align-items: center; justify-content: center; \
         color: white; font-family: monospace; font-size: 13px;"
    );

    rsx! {
        div {
            id: SUBJECT_ID,
            style: "{style}",
            "data-matrix": "{matrix}",
            "data-origin": "{origin}",
            "F"
            // origin marker, positioned by the origin's absolute pixels
            OriginMarker { origin: origin.clone() }
        }
    }
}

#[component]
fn OriginMarker(origin: String) -> Element {
    let mut parts = origin.split_whitespace().take(2);
    let x = parts.next().unwrap_or("50px").to_string();
    let y = parts.next().unwrap_or("50px").to_string();

    rsx! {
        div {
            style: "position: absolute; left: {x}; top: {y}; width: 8px; height: 8px; margin: -4px 0 0 -4px; border-radius: 50%; background: #f59e0b; pointer-events: none;",
        }
    }
}
