use crate::constants::HINT_ID;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        crate::dom::set_hidden(&el, false);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        crate::dom::set_hidden(&el, true);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HINT_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(true)
}

/// Flip the key/mouse hint overlay.
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
