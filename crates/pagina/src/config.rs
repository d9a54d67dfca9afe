// File: src/config.rs
// Purpose: Page configuration (element ids, classes, messages) with pagina.toml support

use anyhow::{Context, Result};
use pagina_validation::{Field, FieldError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PageError;

/// Page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageConfig {
    #[serde(default)]
    pub elements: ElementIds,

    #[serde(default)]
    pub classes: ClassNames,

    #[serde(default)]
    pub messages: Messages,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Ids of the elements the controller binds to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementIds {
    #[serde(default = "default_form")]
    pub form: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_message")]
    pub message: String,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default = "default_menu_toggle")]
    pub menu_toggle: String,

    #[serde(default = "default_navigation")]
    pub navigation: String,

    #[serde(default = "default_footer_year")]
    pub footer_year: String,
}

/// CSS classes written by the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassNames {
    /// Class the status region is reset to before every submission
    #[serde(default = "default_status_base")]
    pub status_base: String,

    #[serde(default = "default_error")]
    pub error: String,

    #[serde(default = "default_success")]
    pub success: String,

    /// Class on the navigation container while the mobile menu is open
    #[serde(default = "default_menu_open")]
    pub menu_open: String,

    /// Class mirrored onto the page header while the mobile menu is open
    #[serde(default = "default_header_menu_open")]
    pub header_menu_open: String,
}

/// User-facing texts
///
/// `send_failed` may contain `{reason}` and `status_failed` may contain `{status}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_required_name")]
    pub required_name: String,

    #[serde(default = "default_required_email")]
    pub required_email: String,

    #[serde(default = "default_invalid_email")]
    pub invalid_email: String,

    #[serde(default = "default_required_phone")]
    pub required_phone: String,

    #[serde(default = "default_required_message")]
    pub required_message: String,

    #[serde(default = "default_sending")]
    pub sending: String,

    #[serde(default = "default_success_message")]
    pub success: String,

    #[serde(default = "default_send_failed")]
    pub send_failed: String,

    #[serde(default = "default_status_failed")]
    pub status_failed: String,

    #[serde(default = "default_unknown_error")]
    pub unknown_error: String,
}

/// Smooth scroll wiring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Selector for the in-page links that scroll smoothly
    #[serde(default = "default_link_selector")]
    pub link_selector: String,

    /// Selector for the page header that mirrors the menu state
    #[serde(default = "default_header_selector")]
    pub header_selector: String,
}

/// Browser console logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_form() -> String {
    "form-contato".to_string()
}

fn default_name() -> String {
    "nome".to_string()
}

fn default_email() -> String {
    "email".to_string()
}

fn default_phone() -> String {
    "telefone".to_string()
}

fn default_message() -> String {
    "mensagem".to_string()
}

fn default_status() -> String {
    "mensagem-status".to_string()
}

fn default_menu_toggle() -> String {
    "mobile-menu-toggle".to_string()
}

fn default_navigation() -> String {
    "main-navigation".to_string()
}

fn default_footer_year() -> String {
    "ano-atual-rodape".to_string()
}

fn default_status_base() -> String {
    "mensagem-status".to_string()
}

fn default_error() -> String {
    "erro".to_string()
}

fn default_success() -> String {
    "sucesso".to_string()
}

fn default_menu_open() -> String {
    "active".to_string()
}

fn default_header_menu_open() -> String {
    "menu-active".to_string()
}

fn default_required_name() -> String {
    "O campo Nome é obrigatório.".to_string()
}

fn default_required_email() -> String {
    "O campo E-mail é obrigatório.".to_string()
}

fn default_invalid_email() -> String {
    "Por favor, insira um E-mail válido.".to_string()
}

fn default_required_phone() -> String {
    "O campo Telefone é obrigatório.".to_string()
}

fn default_required_message() -> String {
    "O campo Mensagem é obrigatória.".to_string()
}

fn default_sending() -> String {
    "Enviando...".to_string()
}

fn default_success_message() -> String {
    "Mensagem enviada com sucesso! Entraremos em contato em breve.".to_string()
}

fn default_send_failed() -> String {
    "Erro ao enviar a mensagem: {reason}. Por favor, tente novamente.".to_string()
}

fn default_status_failed() -> String {
    "Falha no envio. Status: {status}".to_string()
}

fn default_unknown_error() -> String {
    "Erro desconhecido".to_string()
}

fn default_link_selector() -> String {
    r##"header nav ul li a[href^="#"]"##.to_string()
}

fn default_header_selector() -> String {
    "header".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations
impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: default_form(),
            name: default_name(),
            email: default_email(),
            phone: default_phone(),
            message: default_message(),
            status: default_status(),
            menu_toggle: default_menu_toggle(),
            navigation: default_navigation(),
            footer_year: default_footer_year(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            status_base: default_status_base(),
            error: default_error(),
            success: default_success(),
            menu_open: default_menu_open(),
            header_menu_open: default_header_menu_open(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required_name: default_required_name(),
            required_email: default_required_email(),
            invalid_email: default_invalid_email(),
            required_phone: default_required_phone(),
            required_message: default_required_message(),
            sending: default_sending(),
            success: default_success_message(),
            send_failed: default_send_failed(),
            status_failed: default_status_failed(),
            unknown_error: default_unknown_error(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            link_selector: default_link_selector(),
            header_selector: default_header_selector(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Messages {
    /// Localized text for a validation failure
    pub fn for_error(&self, error: &FieldError) -> &str {
        match error {
            FieldError::Required(Field::Name) => &self.required_name,
            FieldError::Required(Field::Email) => &self.required_email,
            FieldError::Required(Field::Phone) => &self.required_phone,
            FieldError::Required(Field::Message) => &self.required_message,
            FieldError::InvalidEmail => &self.invalid_email,
        }
    }

    pub fn send_failed(&self, reason: &str) -> String {
        self.send_failed.replace("{reason}", reason)
    }

    pub fn status_failed(&self, status: u16) -> String {
        self.status_failed.replace("{status}", &status.to_string())
    }
}

impl PageConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, PageError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from pagina.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.elements.form, "form-contato");
        assert_eq!(config.elements.name, "nome");
        assert_eq!(config.elements.email, "email");
        assert_eq!(config.elements.phone, "telefone");
        assert_eq!(config.elements.message, "mensagem");
        assert_eq!(config.elements.status, "mensagem-status");
        assert_eq!(config.elements.menu_toggle, "mobile-menu-toggle");
        assert_eq!(config.elements.navigation, "main-navigation");
        assert_eq!(config.elements.footer_year, "ano-atual-rodape");
        assert_eq!(config.classes.menu_open, "active");
        assert_eq!(config.navigation.link_selector, r##"header nav ul li a[href^="#"]"##);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PageConfig::from_toml_str(
            r#"
            [elements]
            form = "contact"

            [messages]
            sending = "Sending..."
            "#,
        )
        .unwrap();

        assert_eq!(config.elements.form, "contact");
        assert_eq!(config.elements.name, "nome");
        assert_eq!(config.messages.sending, "Sending...");
        assert_eq!(config.messages.success, default_success_message());
        assert_eq!(config.classes, ClassNames::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(PageConfig::from_toml_str("  \n").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = PageConfig::from_toml_str("[elements\nform = 1").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = PageConfig::load(dir.path().join("pagina.toml")).unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nlevel = \"debug\"").unwrap();

        let config = PageConfig::load(file.path()).unwrap();
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_message_templates() {
        let messages = Messages::default();
        assert_eq!(
            messages.send_failed("timeout"),
            "Erro ao enviar a mensagem: timeout. Por favor, tente novamente."
        );
        assert_eq!(messages.status_failed(500), "Falha no envio. Status: 500");
        assert_eq!(
            messages.for_error(&FieldError::Required(Field::Message)),
            "O campo Mensagem é obrigatória."
        );
    }
}
