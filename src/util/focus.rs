//! Move keyboard focus to a form input by DOM id.
//!
//! Used after a validation warning so the offending field is highlighted.
//! Requires a browser environment; a no-op otherwise.

use crate::state::catalog::Field;

pub fn focus_field(field: Field) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = doc.get_element_by_id(field.input_id()) else {
            log::debug!("focus target #{} not rendered", field.input_id());
            return;
        };
        if let Ok(input) = el.dyn_into::<web_sys::HtmlElement>() {
            if let Err(e) = input.focus() {
                log::debug!("focus #{} failed: {e:?}", field.input_id());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("focus #{} skipped outside the browser", field.input_id());
    }
}
