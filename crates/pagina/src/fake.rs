//! In-memory document
//!
//! Implements the element traits without a browser so the controller can be
//! driven from tests and other native hosts.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

use crate::dom::{Button, ContactElements, Element, Form, Input, Viewport};
use crate::transport::{RawResponse, SubmitRequest, Transport, TransportError};

#[derive(Debug, Default)]
struct ElementState {
    text: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    visible: bool,
    value: String,
    disabled: bool,
    disabled_history: Vec<bool>,
}

/// A node that can act as any element, input or button
#[derive(Debug, Default)]
pub struct FakeElement {
    state: RefCell<ElementState>,
    focus_count: Cell<usize>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        element.set_class_name(&classes.join(" "));
        element
    }

    pub fn input(value: &str) -> Self {
        let element = Self::new();
        element.set_value(value);
        element
    }

    pub fn button(label: &str) -> Self {
        let element = Self::new();
        element.state.borrow_mut().text = label.to_string();
        element
    }

    pub fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }

    /// Every `set_disabled` call, in order
    pub fn disabled_history(&self) -> Vec<bool> {
        self.state.borrow().disabled_history.clone()
    }
}

impl Element for FakeElement {
    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }

    fn set_class_name(&self, name: &str) {
        self.state.borrow_mut().classes = name.split_whitespace().map(str::to_string).collect();
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.state.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.retain(|c| c != class);
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

impl Input for FakeElement {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn focus(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }
}

impl Button for FakeElement {
    fn label(&self) -> String {
        self.text()
    }

    fn set_label(&self, label: &str) {
        self.set_text(label);
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        let mut state = self.state.borrow_mut();
        state.disabled = disabled;
        state.disabled_history.push(disabled);
    }
}

/// A form made of named fake inputs
#[derive(Debug)]
pub struct FakeForm {
    action: String,
    inputs: Vec<(String, Rc<FakeElement>)>,
    resets: Cell<usize>,
}

impl FakeForm {
    pub fn new(action: &str, inputs: Vec<(String, Rc<FakeElement>)>) -> Self {
        Self {
            action: action.to_string(),
            inputs,
            resets: Cell::new(0),
        }
    }

    pub fn reset_count(&self) -> usize {
        self.resets.get()
    }
}

impl Form for FakeForm {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.inputs
            .iter()
            .map(|(name, input)| (name.clone(), input.value()))
            .collect()
    }

    fn reset(&self) {
        for (_, input) in &self.inputs {
            input.set_value("");
        }
        self.resets.set(self.resets.get() + 1);
    }
}

/// The standard contact form: nome, email, telefone, mensagem, a status region
/// and an "Enviar Mensagem" button
#[derive(Debug)]
pub struct FakeContactForm {
    pub form: Rc<FakeForm>,
    pub name: Rc<FakeElement>,
    pub email: Rc<FakeElement>,
    pub phone: Rc<FakeElement>,
    pub message: Rc<FakeElement>,
    pub status: Rc<FakeElement>,
    pub submit: Rc<FakeElement>,
}

impl FakeContactForm {
    pub fn new(action: &str) -> Self {
        let name = Rc::new(FakeElement::new());
        let email = Rc::new(FakeElement::new());
        let phone = Rc::new(FakeElement::new());
        let message = Rc::new(FakeElement::new());
        let form = FakeForm::new(
            action,
            vec![
                ("nome".to_string(), name.clone()),
                ("email".to_string(), email.clone()),
                ("telefone".to_string(), phone.clone()),
                ("mensagem".to_string(), message.clone()),
            ],
        );

        Self {
            form: Rc::new(form),
            name,
            email,
            phone,
            message,
            status: Rc::new(FakeElement::with_classes(&["mensagem-status"])),
            submit: Rc::new(FakeElement::button("Enviar Mensagem")),
        }
    }

    /// Fill all four inputs
    pub fn fill(&self, name: &str, email: &str, phone: &str, message: &str) -> &Self {
        self.name.set_value(name);
        self.email.set_value(email);
        self.phone.set_value(phone);
        self.message.set_value(message);
        self
    }

    pub fn elements(&self) -> ContactElements {
        ContactElements {
            form: self.form.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            status: self.status.clone(),
            submit: self.submit.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollEvent {
    Top,
    IntoView(String),
}

/// Elements by id plus a log of scroll requests
#[derive(Debug, Default)]
pub struct FakeDocument {
    elements: RefCell<HashMap<String, Rc<FakeElement>>>,
    scrolls: RefCell<Vec<ScrollEvent>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element with the given id
    pub fn insert(&self, id: &str) -> Rc<FakeElement> {
        let element = Rc::new(FakeElement::new());
        self.elements
            .borrow_mut()
            .insert(id.to_string(), element.clone());
        element
    }

    pub fn get(&self, id: &str) -> Option<Rc<FakeElement>> {
        self.elements.borrow().get(id).cloned()
    }

    pub fn scrolls(&self) -> Vec<ScrollEvent> {
        self.scrolls.borrow().clone()
    }
}

impl Viewport for FakeDocument {
    fn scroll_to_top(&self) {
        self.scrolls.borrow_mut().push(ScrollEvent::Top);
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.scrolls
            .borrow_mut()
            .push(ScrollEvent::IntoView(id.to_string()));
        true
    }
}

/// Replies with queued results and records every request
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, String>>>,
    requests: RefCell<Vec<SubmitRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    /// Queue a request that never completes, failing with `reason`
    pub fn fail(self, reason: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(reason.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_form(&self, request: &SubmitRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        match self.replies.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(TransportError::Network(reason)),
            None => Err(TransportError::Network("no reply queued".to_string())),
        }
    }
}
