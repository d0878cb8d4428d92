use crate::constants::{LEAF_CLASS, LEAF_CONTAINER_ID};
use crate::dom;
use flipbook_core::{scatter, LeafParams, PageError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fill the leaf container with randomly styled leaves. Returns how many were added.
pub fn spawn_leaves(document: &web::Document) -> Result<usize, PageError> {
    let container = dom::element_by_id::<web::Element>(document, LEAF_CONTAINER_ID)?;
    let mut rng = rand::thread_rng();
    let leaves = scatter(&LeafParams::default(), &mut rng);
    let mut added = 0;
    for leaf in &leaves {
        let Some(el) = document
            .create_element("div")
            .ok()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        _ = el.class_list().add_1(LEAF_CLASS);
        for (property, value) in leaf.style() {
            dom::set_style(&el, property, &value);
        }
        if container.append_child(&el).is_ok() {
            added += 1;
        }
    }
    Ok(added)
}
