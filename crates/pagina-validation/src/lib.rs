//! Pagina Validation
//!
//! Pure validation functions for the site's contact form.
//! Used by the controller crate and exported to JavaScript by the WASM crate.

pub mod contact;
pub mod email;
pub mod string;

// Re-export all validators
pub use contact::*;
pub use email::*;
pub use string::*;
