//! Page wiring
//!
//! Looks up the configured elements once and attaches one listener per
//! behaviour. Missing elements switch off only the behaviour that needs them.

use pagina::{
    update_footer_year, ContactElements, ContactFormHandler, Element, HttpTransport, MobileMenu,
    PageConfig, PageError, SmoothScrollNavigator, SystemClock,
};
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::dom::{by_id, WebButton, WebElement, WebForm, WebInput, WebViewport};
use crate::error::BindError;

/// Attach `callback` to `event` on `target` for the lifetime of the page
fn listen(
    target: &EventTarget,
    event: &str,
    callback: impl FnMut(Event) + 'static,
) -> Result<(), BindError> {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Bind all four behaviours
///
/// A behaviour that fails to bind is logged and skipped; the others are still wired.
pub fn init_page(document: &Document, config: &PageConfig) {
    match bind_contact_form(document, config) {
        Ok(true) => debug!("Contact form bound"),
        Ok(false) => {}
        Err(e) => warn!("Contact form not bound: {}", e),
    }

    match bind_smooth_scroll(document, config) {
        Ok(links) => debug!("Smooth scroll bound to {} link(s)", links),
        Err(e) => warn!("Smooth scroll not bound: {}", e),
    }

    let footer = by_id::<HtmlElement>(document, &config.elements.footer_year).map(WebElement);
    update_footer_year(footer.as_ref().map(|e| e as &dyn Element), &SystemClock);

    match bind_mobile_menu(document, config) {
        Ok(true) => debug!("Mobile menu bound"),
        Ok(false) => {}
        Err(e) => warn!("Mobile menu not bound: {}", e),
    }

    info!("Page controller initialized");
}

/// Returns false when the page has no contact form
fn bind_contact_form(document: &Document, config: &PageConfig) -> Result<bool, BindError> {
    let ids = &config.elements;
    let Some(form) = by_id::<HtmlFormElement>(document, &ids.form) else {
        return Ok(false);
    };

    let input = |id: &str| WebInput::by_id(document, id).ok_or_else(|| PageError::missing(id));
    let submit = form
        .query_selector(r#"button[type="submit"]"#)?
        .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
        .ok_or_else(|| PageError::missing(format!("{} button[type=submit]", ids.form)))?;
    let status =
        by_id::<HtmlElement>(document, &ids.status).ok_or_else(|| PageError::missing(&ids.status))?;

    let elements = ContactElements {
        form: Rc::new(WebForm(form.clone())),
        name: Rc::new(input(&ids.name)?),
        email: Rc::new(input(&ids.email)?),
        phone: Rc::new(input(&ids.phone)?),
        message: Rc::new(input(&ids.message)?),
        status: Rc::new(WebElement(status)),
        submit: Rc::new(WebButton(submit)),
    };

    let handler = Rc::new(ContactFormHandler::new(elements, HttpTransport::new(), config));
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let handler = handler.clone();
        spawn_local(async move {
            let _ = handler.submit().await;
        });
    })?;

    Ok(true)
}

/// Returns the number of links bound
fn bind_smooth_scroll(document: &Document, config: &PageConfig) -> Result<u32, BindError> {
    let window = web_sys::window().ok_or(BindError::NoDocument)?;
    let navigator = Rc::new(SmoothScrollNavigator::new(WebViewport {
        window,
        document: document.clone(),
    }));

    let links = document.query_selector_all(&config.navigation.link_selector)?;
    let mut bound = 0;

    for index in 0..links.length() {
        let Some(link) = links
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        if !SmoothScrollNavigator::<WebViewport>::is_anchor(&href) {
            continue;
        }

        let navigator = navigator.clone();
        let target = link.clone();
        listen(&link, "click", move |event| {
            let href = target.get_attribute("href").unwrap_or_default();
            if navigator.on_click(&href).prevents_default() {
                event.prevent_default();
            }
        })?;
        bound += 1;
    }

    Ok(bound)
}

/// Returns false when the toggle or the navigation container is missing
fn bind_mobile_menu(document: &Document, config: &PageConfig) -> Result<bool, BindError> {
    let ids = &config.elements;
    let toggle = by_id::<HtmlElement>(document, &ids.menu_toggle);
    let nav = by_id::<HtmlElement>(document, &ids.navigation);
    // An unusable header selector only drops the header class sync
    let header = document
        .query_selector(&config.navigation.header_selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    let Some(toggle_target) = toggle.clone() else {
        return Ok(false);
    };

    let menu = MobileMenu::bind(
        toggle.map(|e| Rc::new(WebElement(e)) as Rc<dyn Element>),
        nav.map(|e| Rc::new(WebElement(e)) as Rc<dyn Element>),
        header.map(|e| Rc::new(WebElement(e)) as Rc<dyn Element>),
        &config.classes,
    );
    let Some(menu) = menu else {
        return Ok(false);
    };

    listen(&toggle_target, "click", move |_| {
        menu.toggle();
    })?;

    Ok(true)
}
