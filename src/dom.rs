use crate::core::chain_is_interactive;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lookup closure over an element's `data-*` attributes, keyed by the
/// camel-cased dataset name.
pub fn dataset_lookup(el: &web::Element) -> impl Fn(&str) -> Option<String> {
    let dataset = el.dyn_ref::<web::HtmlElement>().map(|h| h.dataset());
    move |key| dataset.as_ref().and_then(|d| d.get(key))
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style_property(el: &web::Element, name: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(name, value);
    }
}

/// Walks from the event target up through its ancestors and reports whether
/// any of them is a button, link, form control or `role="button"`.
pub fn target_is_interactive(target: Option<web::EventTarget>) -> bool {
    let mut chain: Vec<(String, Option<String>)> = Vec::new();
    let mut cur = target.and_then(|t| t.dyn_into::<web::Element>().ok());
    while let Some(el) = cur {
        chain.push((el.tag_name(), el.get_attribute("role")));
        cur = el.parent_element();
    }
    chain_is_interactive(chain.iter().map(|(tag, role)| (tag.as_str(), role.as_deref())))
}

/// Returns the element with `id`, creating a `div` under `<body>` if the page
/// does not provide one.
pub fn ensure_element(document: &web::Document, id: &str, class: &str) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(id) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(id);
    el.set_class_name(class);
    _ = el.set_attribute("aria-hidden", "true");
    document.body()?.append_child(&el).ok()?;
    Some(el)
}
