//! Element handles
//!
//! Each behaviour receives the handles it needs instead of querying the document
//! itself. The browser binding implements these traits over `web-sys`; tests use
//! [`crate::fake`]. Methods take `&self` because DOM nodes are shared handles.

use pagina_validation::{Field, FormFields};
use std::rc::Rc;

/// Any element whose text, classes and attributes the controller writes
pub trait Element {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Replace the whole class list
    fn set_class_name(&self, name: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn set_attribute(&self, name: &str, value: &str);
    fn attribute(&self, name: &str) -> Option<String>;

    /// Show or hide through the inline `display` style
    fn set_visible(&self, visible: bool);

    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Flip a class, returning whether it is now present
    fn toggle_class(&self, class: &str) -> bool {
        let on = !self.has_class(class);
        self.set_class(class, on);
        on
    }
}

/// A text input or textarea
pub trait Input {
    fn value(&self) -> String;
    fn focus(&self);
}

/// The form's submit control
pub trait Button {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// The contact form itself
pub trait Form {
    /// Target URL the form posts to
    fn action(&self) -> String;

    /// Name/value pairs the browser would submit
    fn entries(&self) -> Vec<(String, String)>;

    fn reset(&self);
}

/// Scrolling for in-page navigation
pub trait Viewport {
    fn scroll_to_top(&self);

    /// Smoothly bring the element with `id` into view.
    /// Returns false when no such element exists.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Everything the contact form handler touches
#[derive(Clone)]
pub struct ContactElements {
    pub form: Rc<dyn Form>,
    pub name: Rc<dyn Input>,
    pub email: Rc<dyn Input>,
    pub phone: Rc<dyn Input>,
    pub message: Rc<dyn Input>,
    pub status: Rc<dyn Element>,
    pub submit: Rc<dyn Button>,
}

impl ContactElements {
    pub fn input(&self, field: Field) -> &dyn Input {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Phone => self.phone.as_ref(),
            Field::Message => self.message.as_ref(),
        }
    }

    /// Current trimmed input values
    pub fn read_fields(&self) -> FormFields {
        FormFields::new(
            &self.name.value(),
            &self.email.value(),
            &self.phone.value(),
            &self.message.value(),
        )
    }
}

impl std::fmt::Debug for ContactElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactElements")
            .field("action", &self.form.action())
            .finish_non_exhaustive()
    }
}

impl<T: Viewport + ?Sized> Viewport for Rc<T> {
    fn scroll_to_top(&self) {
        (**self).scroll_to_top()
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        (**self).scroll_into_view(id)
    }
}
