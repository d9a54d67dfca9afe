//! Pagina WASM
//!
//! Browser entry points for the Pagina page controller.
//!
//! ```javascript
//! import initWasm, { initPage } from './pkg/pagina_wasm.js';
//!
//! await initWasm();
//! initPage(); // or initPage({ elements: { form: 'contact' }, log: { level: 'debug' } })
//! ```

use pagina::{Messages, PageConfig};
use pagina_validation::{validate_contact, FormFields};
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub mod controller;
pub mod dom;
pub mod error;
pub mod telemetry;

use error::BindError;

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wire the page once the document has loaded
///
/// `config` is an optional object overriding element ids, classes, messages
/// and the log level. Calls after the first are ignored.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page(config: JsValue) -> Result<(), JsValue> {
    if INITIALIZED.with(Cell::get) {
        tracing::warn!("Page controller already initialized");
        return Ok(());
    }

    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };
    INITIALIZED.with(|flag| flag.set(true));

    telemetry::init_console_subscriber(&config.log.level);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BindError::NoDocument)?;

    run_when_ready(document, config)?;
    Ok(())
}

fn run_when_ready(document: Document, config: PageConfig) -> Result<(), BindError> {
    if document.ready_state() != "loading" {
        controller::init_page(&document, &config);
        return Ok(());
    }

    let target = document.clone();
    let closure = Closure::once(move || controller::init_page(&target, &config));
    document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    pagina_validation::is_valid_email(pagina_validation::trim_value(email))
}

/// Validate `{ name, email, phone, message }`
///
/// # Returns
/// Array of localized messages (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateContact({ name: 'Ana', email: 'ana@', phone: '', message: 'Oi' });
/// ```
#[wasm_bindgen(js_name = validateContact)]
pub fn validate_contact_js(fields: JsValue) -> Result<JsValue, JsValue> {
    let fields: FormFields = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;
    let fields = FormFields::new(&fields.name, &fields.email, &fields.phone, &fields.message);

    let messages = Messages::default();
    let errors: Vec<&str> = validate_contact(&fields)
        .iter()
        .map(|e| messages.for_error(e))
        .collect();

    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(is_valid_email_js(" user@example.com "));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[wasm_bindgen_test]
    fn test_validate_contact_messages() {
        let input = serde_wasm_bindgen::to_value(&FormFields::new("", "ana@example.com", "1", "oi"))
            .unwrap();
        let errors: Vec<String> =
            serde_wasm_bindgen::from_value(validate_contact_js(input).unwrap()).unwrap();
        assert_eq!(errors, vec!["O campo Nome é obrigatório.".to_string()]);
    }

    #[wasm_bindgen_test]
    fn test_second_init_is_ignored() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        let config = PageConfig::default();
        let toggle = document.create_element("button").unwrap();
        toggle.set_id(&config.elements.menu_toggle);
        let nav = document.create_element("nav").unwrap();
        nav.set_id(&config.elements.navigation);
        body.append_child(&toggle).unwrap();
        body.append_child(&nav).unwrap();

        init_page(JsValue::UNDEFINED).unwrap();
        init_page(JsValue::UNDEFINED).unwrap();

        // A second set of listeners would close the menu again
        toggle.dyn_into::<web_sys::HtmlElement>().unwrap().click();
        assert!(nav.class_list().contains("active"));
    }
}
