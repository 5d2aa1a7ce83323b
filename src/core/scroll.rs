//! Page scroll effects: anchor offsets, hero parallax, card glow and the
//! mobile breakpoint.

/// Returns the fragment selector for an in-page link (`#about`), or `None`
/// for anything else, including a bare `#`.
#[inline]
pub fn in_page_anchor(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document-space scroll position that puts an element `offset` units below
/// the top of the viewport. `rect_top` is viewport-relative.
#[inline]
pub fn anchor_scroll_top(rect_top: f64, page_y_offset: f64, offset: f64) -> f64 {
    (rect_top + page_y_offset - offset).max(0.0)
}

#[inline]
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

#[inline]
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, factor))
}

/// Coarse overlap test used for the card glow: any part of the rect lies
/// between the top of the viewport and its bottom edge.
#[inline]
pub fn rect_in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

#[inline]
pub fn is_mobile(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width < breakpoint
}
