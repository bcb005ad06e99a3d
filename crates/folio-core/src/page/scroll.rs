//! Back-to-top visibility and in-page anchor links.

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Id of the element "back to top" scrolls to.
pub const TOP_ANCHOR: &str = "top";

/// Whether the back-to-top button is shown at this scroll offset.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// Section id targeted by an in-page link.
///
/// `"#projects"` targets `"projects"`; a bare `"#"` and external links
/// target nothing and keep their default behaviour.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
