use dioxus::prelude::*;
use crate::Route;

const CARDS: &[(&str, &str)] = &[
    (
        "Immutable States",
        "Every translate, scale, rotate and origin change returns a new state. Nothing is written until apply().",
    ),
    (
        "Origin Aware",
        "Scale and rotate pivot on the transform origin. Moving the origin never moves what is on screen.",
    ),
    (
        "matrix3d Output",
        "States serialize to a canonical matrix3d() string that reads back to the same value.",
    ),
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Matrix Playground"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Chain 3D transforms on a live element and watch the matrix3d() the engine writes back."
                }
                Link {
                    to: Route::Playground {},
                    style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                    "Open Playground \u{2192}"
                }
            }

            // Feature grid
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; margin-top: 64px;",
                for (title, body) in CARDS.iter().copied() {
                    div {
                        style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                        h3 {
                            style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                            "{title}"
                        }
                        p {
                            style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                            "{body}"
                        }
                    }
                }
            }
        }
    }
}
