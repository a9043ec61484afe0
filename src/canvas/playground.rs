//! Playground - drive the transform engine against a live element

use dioxus::prelude::*;
use js_sys::{Array, Reflect};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Element as DomElement;

use matrix_playground::dom::web::{args_from_js, lookup_value};
use matrix_playground::primitives::Vector3;
use matrix_playground::transform::{Operation, Sampler};
use matrix_playground::{BoxSize, Error, Matrix4, Origin, Result, StyleTarget, TransformState};

use super::element::{SUBJECT_ID, SUBJECT_SIZE, Subject};

type State = Signal<Option<TransformState<DomElement>>>;

pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf).expect("getrandom");
    SmallRng::seed_from_u64(u64::from_le_bytes(buf))
}

fn find_subject() -> Result<TransformState<DomElement>> {
    lookup_value(&JsValue::from_str(&format!("#{SUBJECT_ID}")))
}

/// Write `next` to the page and record `lines` on success.
fn commit(
    mut state: State,
    mut history: Signal<Vec<String>>,
    next: Result<TransformState<DomElement>>,
    lines: impl IntoIterator<Item = String>,
) -> Result<String> {
    let result = next.and_then(|next| {
        next.apply()?;
        Ok(next)
    });
    match result {
        Ok(next) => {
            let css = next.to_transform_matrix();
            history.write().extend(lines);
            state.set(Some(next));
            Ok(css)
        }
        Err(err) => {
            tracing::warn!(%err, "transform failed");
            history.write().push(format!("error: {err}"));
            Err(err)
        }
    }
}

/// Run `ops` on the current state, write the result, record what happened.
fn run(state: State, history: Signal<Vec<String>>, ops: Vec<Operation>) {
    let Some(current) = state() else { return };
    let next = Sampler::apply_chain(&current, &ops);
    let _ = commit(state, history, next, ops.iter().map(Operation::describe));
}

/// One scripted operation: `op` names it, `args` are its JS call arguments.
fn script_operation(
    current: &TransformState<DomElement>,
    op: &str,
    args: &[JsValue],
) -> Result<TransformState<DomElement>> {
    match op {
        "translate" => current.translate(args_from_js(args)?),
        "setTranslate" => current.set_translate(args_from_js(args)?),
        "scale" => current.scale(args_from_js(args)?),
        "setScale" => current.set_scale(args_from_js(args)?),
        "rotate" => {
            // axis components, then the angle in degrees
            let (angle, axis) = args
                .split_last()
                .ok_or_else(|| Error::Argument("rotate needs an axis and an angle".to_string()))?;
            let degrees = angle
                .as_f64()
                .ok_or_else(|| Error::Argument("angle must be a number".to_string()))?;
            current.rotate_degrees(args_from_js(axis)?, degrees)
        }
        "origin" => match args.first().and_then(JsValue::as_string) {
            Some(css) => current.change_origin(css),
            None => current.change_origin(args_from_js(args)?),
        },
        other => Err(Error::Argument(format!("unknown operation {other}"))),
    }
}

/// `window.transformSubject(op, args)` returns the new `matrix3d(...)` or throws.
fn expose_script_hook(state: State, history: Signal<Vec<String>>) {
    let Some(window) = web_sys::window() else { return };
    let hook = Closure::<dyn FnMut(String, Array) -> std::result::Result<JsValue, JsValue>>::new(
        move |op: String, args: Array| {
            let current = state().ok_or_else(|| JsValue::from_str("subject not ready"))?;
            let args: Vec<JsValue> = args.iter().collect();
            let next = script_operation(&current, &op, &args);
            let line = format!("script {op}({})", args.len());
            commit(state, history, next, [line])
                .map(|css| JsValue::from_str(&css))
                .map_err(|err| JsValue::from_str(&err.to_string()))
        },
    );
    if let Err(err) = Reflect::set(&window, &JsValue::from_str("transformSubject"), hook.as_ref()) {
        tracing::warn!(?err, "could not expose transformSubject");
        return;
    }
    // lives as long as the page
    hook.forget();
}

/// Back to identity about the box centre.
fn reset(mut state: State, mut history: Signal<Vec<String>>) {
    let Some(current) = state() else { return };
    let element = current.element().clone();
    let size = element.box_size();
    let fresh = TransformState::new(element, size, Matrix4::IDENTITY, Origin::center(size));
    if let Err(err) = fresh.apply() {
        history.write().push(format!("error: {err}"));
        return;
    }
    history.write().clear();
    state.set(Some(fresh));
}

#[component]
pub fn Playground() -> Element {
    let mut state: State = use_signal(|| None);
    let mut history = use_signal(Vec::<String>::new);
    use_hook(move || expose_script_hook(state, history));

    // The subject only exists after the first render
    use_effect(move || {
        if state.peek().is_some() {
            return;
        }
        match find_subject() {
            Ok(found) => state.set(Some(found)),
            Err(err) => history.write().push(format!("error: {err}")),
        }
    });

    let (matrix, origin) = match &*state.read() {
        Some(s) => (s.to_transform_matrix(), s.origin_css()),
        None => (
            Matrix4::IDENTITY.to_css(),
            Origin::center(BoxSize::new(SUBJECT_SIZE, SUBJECT_SIZE)).to_css(),
        ),
    };

    let controls: Vec<(&'static str, Operation)> = vec![
        ("translate x +20", Operation::Translate(Vector3::new(20.0, 0.0, 0.0))),
        ("translate y +20", Operation::Translate(Vector3::new(0.0, 20.0, 0.0))),
        ("scale 1.25", Operation::Scale(Vector3::new(1.25, 1.25, 1.0))),
        ("scale 0.8", Operation::Scale(Vector3::new(0.8, 0.8, 1.0))),
        ("rotate z 15\u{b0}", Operation::Rotate { axis: Vector3::new(0.0, 0.0, 1.0), angle: 15f64.to_radians() }),
        ("rotate y 30\u{b0}", Operation::Rotate { axis: Vector3::new(0.0, 1.0, 0.0), angle: 30f64.to_radians() }),
        ("origin top left", Operation::ChangeOrigin("top left")),
        ("origin center", Operation::ChangeOrigin("center")),
        ("origin bottom right", Operation::ChangeOrigin("bottom right")),
    ];

    let button_style = "padding: 8px 14px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 13px;";

    rsx! {
        // Expose the subject's live style to debugger clients
        script {
            r#"
            window.getSubject = function() {{
                var el = document.getElementById('subject');
                if (!el) return null;
                var cs = getComputedStyle(el);
                return {{
                    transform: cs.transform,
                    origin: cs.transformOrigin,
                    matrix: el.dataset.matrix,
                    rect: el.getBoundingClientRect(),
                }};
            }};
            "#
        }

        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 20px; background: #0f0f1a; min-height: 100vh;",

            // Controls
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px; max-width: 1024px; justify-content: center;",
                for (label, op) in controls {
                    button {
                        style: "{button_style}",
                        onclick: move |_| run(state, history, vec![op.clone()]),
                        "{label}"
                    }
                }
                button {
                    style: "{button_style} background: #6366f1;",
                    onclick: move |_| {
                        let mut rng = fresh_rng();
                        run(state, history, Sampler::random_chain(&mut rng, 4));
                    },
                    "Randomize"
                }
                button {
                    style: "{button_style} background: #6b7280;",
                    onclick: move |_| reset(state, history),
                    "Reset"
                }
            }

            // Canvas
            div {
                style: "width: 1024px; height: 1024px; background: #1a1a2e; position: relative; border: 1px solid #2a2a4a; overflow: hidden; perspective: 800px;",
                Subject { matrix: matrix.clone(), origin: origin.clone() }
            }

            // Current state and history
            div {
                style: "width: 1024px; background: #111827; border-radius: 8px; padding: 16px; font-family: monospace; font-size: 12px; color: #9ca3af;",
                h3 {
                    style: "margin: 0 0 8px 0; color: #e5e7eb; font-size: 13px;",
                    "Transform"
                }
                div { style: "padding: 4px 0;", "transform: {matrix}" }
                div { style: "padding: 4px 0;", "transform-origin: {origin}" }
                for (n, line) in history().into_iter().enumerate().map(|(i, l)| (i + 1, l)) {
                    div {
                        key: "{n}",
                        style: "padding: 4px 0; border-bottom: 1px solid #1f2937; color: #6b7280;",
                        "{n}. {line}"
                    }
                }
            }
        }
    }
}
