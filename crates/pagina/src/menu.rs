//! Mobile navigation menu toggle
//!
//! The open state lives only in the navigation container's class list.

use std::rc::Rc;
use tracing::debug;

use crate::config::ClassNames;
use crate::dom::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

pub struct MobileMenu {
    toggle: Rc<dyn Element>,
    nav: Rc<dyn Element>,
    header: Option<Rc<dyn Element>>,
    open_class: String,
    header_class: String,
}

impl MobileMenu {
    /// Bind the menu; `None` when the toggle or the navigation container is absent
    pub fn bind(
        toggle: Option<Rc<dyn Element>>,
        nav: Option<Rc<dyn Element>>,
        header: Option<Rc<dyn Element>>,
        classes: &ClassNames,
    ) -> Option<Self> {
        Some(Self {
            toggle: toggle?,
            nav: nav?,
            header,
            open_class: classes.menu_open.clone(),
            header_class: classes.header_menu_open.clone(),
        })
    }

    pub fn state(&self) -> MenuState {
        if self.nav.has_class(&self.open_class) {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// Handle a click on the toggle control
    pub fn toggle(&self) -> MenuState {
        let open = self.nav.toggle_class(&self.open_class);

        if let Some(header) = &self.header {
            header.set_class(&self.header_class, open);
        }
        self.toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });

        let state = if open { MenuState::Open } else { MenuState::Closed };
        debug!("Mobile menu {:?}", state);
        state
    }
}
