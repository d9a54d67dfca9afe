//! `web-sys` implementations of the controller's element traits

use js_sys::Array;
use pagina::{Button, Element, Form, Input, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

/// Find an element by id as the requested type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

#[derive(Debug, Clone)]
pub struct WebElement(pub HtmlElement);

impl Element for WebElement {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_class_name(&self, name: &str) {
        self.0.set_class_name(name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.0.style().set_property("display", display);
    }
}

/// `<input>` or `<textarea>`
#[derive(Debug, Clone)]
pub enum WebInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl WebInput {
    pub fn by_id(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        element
            .dyn_into::<HtmlInputElement>()
            .map(WebInput::Input)
            .or_else(|element| element.dyn_into::<HtmlTextAreaElement>().map(WebInput::TextArea))
            .ok()
    }
}

impl Input for WebInput {
    fn value(&self) -> String {
        match self {
            WebInput::Input(input) => input.value(),
            WebInput::TextArea(area) => area.value(),
        }
    }

    fn focus(&self) {
        let _ = match self {
            WebInput::Input(input) => input.focus(),
            WebInput::TextArea(area) => area.focus(),
        };
    }
}

#[derive(Debug, Clone)]
pub struct WebButton(pub HtmlButtonElement);

impl Button for WebButton {
    fn label(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

#[derive(Debug, Clone)]
pub struct WebForm(pub HtmlFormElement);

impl Form for WebForm {
    fn action(&self) -> String {
        self.0.action()
    }

    /// Text entries of the form's data set; file inputs are skipped
    fn entries(&self) -> Vec<(String, String)> {
        let Ok(data) = FormData::new_with_form(&self.0) else {
            return Vec::new();
        };
        let Ok(Some(iter)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };

        iter.filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn reset(&self) {
        self.0.reset();
    }
}

/// Window scrolling plus id lookup for scroll targets
#[derive(Debug, Clone)]
pub struct WebViewport {
    pub window: Window,
    pub document: Document,
}

impl Viewport for WebViewport {
    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
