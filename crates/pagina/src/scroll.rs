//! Smooth scrolling for in-page navigation links

use tracing::trace;

use crate::dom::Viewport;

/// What a click on a navigation link did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAction {
    /// `href="#"`: scrolled to the top of the page
    Top,
    /// Scrolled the element with this id into view
    Element(String),
    /// Left to the browser
    Native,
}

impl ScrollAction {
    /// Whether the browser's own jump must be suppressed
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ScrollAction::Native)
    }
}

pub struct SmoothScrollNavigator<V> {
    viewport: V,
}

impl<V: Viewport> SmoothScrollNavigator<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    /// Links that get a click listener
    pub fn is_anchor(href: &str) -> bool {
        href.starts_with('#')
    }

    /// Handle a click on a link with the given `href`
    pub fn on_click(&self, href: &str) -> ScrollAction {
        let Some(target) = href.strip_prefix('#') else {
            return ScrollAction::Native;
        };

        if target.is_empty() {
            self.viewport.scroll_to_top();
            return ScrollAction::Top;
        }

        if self.viewport.scroll_into_view(target) {
            ScrollAction::Element(target.to_string())
        } else {
            trace!("No element #{}, using native anchor jump", target);
            ScrollAction::Native
        }
    }
}
