//! # Pagina
//!
//! Page interaction controller for the Pagina brochure site.
//!
//! Four independent behaviours, each bound to the element handles it needs:
//!
//! - **Contact form** ([`contact`]): validation, background submission and status rendering
//! - **Smooth scroll** ([`scroll`]): in-page navigation links
//! - **Footer year** ([`footer`]): current year in the copyright line
//! - **Mobile menu** ([`menu`]): open/close toggle with `aria-expanded`
//!
//! The browser binding lives in the `pagina-wasm` crate; [`fake`] provides an
//! in-memory document for tests.
//!
//! ## Example
//!
//! ```rust
//! use pagina::fake::{FakeContactForm, ScriptedTransport};
//! use pagina::{ContactFormHandler, PageConfig, SubmitResult};
//!
//! # tokio_test_block(async {
//! let page = FakeContactForm::new("https://formspree.io/f/demo");
//! page.fill("Ana", "ana@example.com", "11 5555-0000", "Olá");
//!
//! let transport = ScriptedTransport::new().reply(200, r#"{"ok":true}"#);
//! let handler = ContactFormHandler::new(page.elements(), transport, &PageConfig::default());
//!
//! assert!(matches!(handler.submit().await, SubmitResult::Sent(o) if o.is_success()));
//! # });
//! # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod fake;
pub mod footer;
pub mod menu;
pub mod response;
pub mod scroll;
pub mod transport;

pub use config::{ClassNames, ElementIds, LogConfig, Messages, NavigationConfig, PageConfig};
pub use contact::{BusyGuard, ContactFormHandler, SubmitResult, ValidationResult};
pub use dom::{Button, ContactElements, Element, Form, Input, Viewport};
pub use error::PageError;
pub use footer::{update_footer_year, Clock, FixedClock, SystemClock};
pub use menu::{MenuState, MobileMenu};
pub use response::{interpret_response, SubmissionOutcome};
pub use scroll::{ScrollAction, SmoothScrollNavigator};
pub use transport::{HttpTransport, RawResponse, SubmitRequest, Transport, TransportError};

pub use pagina_validation::{Field, FieldError, FormFields};
