//! Thin `web_sys` helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use folio_core::spec::MOTION_ATTRIBUTE;

use crate::binding::Patch;
use crate::error::{AppError, AppResult};

/// The global window.
pub(crate) fn window() -> AppResult<Window> {
    web_sys::window().ok_or(AppError::NoWindow)
}

/// The window's document.
pub(crate) fn document(window: &Window) -> AppResult<Document> {
    window.document().ok_or(AppError::NoDocument)
}

/// Monotonic milliseconds from `performance.now()`.
pub(crate) fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now())
}

/// Every `[data-motion]` element under `root`, in document order.
pub(crate) fn motion_targets(root: &Element) -> AppResult<Vec<HtmlElement>> {
    let nodes = root
        .query_selector_all(&format!("[{MOTION_ATTRIBUTE}]"))
        .map_err(|err| AppError::dom(&err))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// First element matching `selector` in the whole document.
pub(crate) fn find(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// The caret span that follows a typed element.
pub(crate) fn caret_for(element: &HtmlElement) -> Option<HtmlElement> {
    element
        .next_element_sibling()
        .filter(|sibling| sibling.class_list().contains("caret"))
        .and_then(|sibling| sibling.dyn_into::<HtmlElement>().ok())
}

/// Document height and viewport height in CSS pixels.
pub(crate) fn page_extent(window: &Window) -> (f64, f64) {
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (document_height, viewport_height)
}

/// Apply inline style declarations.
pub(crate) fn set_styles(element: &HtmlElement, declarations: &[(&str, String)]) {
    let style = element.style();
    for (property, value) in declarations {
        if let Err(err) = style.set_property(property, value) {
            tracing::warn!(property, ?err, "style declaration rejected");
        }
    }
}

/// Apply one patch to a bound element and its optional caret.
pub(crate) fn apply(element: &HtmlElement, caret: Option<&HtmlElement>, patch: &Patch) {
    match patch {
        Patch::Style(declarations) => set_styles(element, declarations),
        Patch::Text(text) => element.set_text_content(Some(text)),
        Patch::Caret(visible) => {
            if let Some(caret) = caret {
                let value = if *visible { "visible" } else { "hidden" };
                set_styles(caret, &[("visibility", value.to_string())]);
            }
        }
    }
}
