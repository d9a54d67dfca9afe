//! Integration tests for the contact form handler
//!
//! Drives the handler against the in-memory document and a scripted transport:
//! - Validation (blank fields, email shape, focus, status rendering)
//! - Successful submission
//! - Server-reported errors
//! - Transport failures
//! - Submit control restoration

use pagina::fake::{FakeContactForm, ScriptedTransport};
use pagina::{
    Button, ContactFormHandler, Element, Field, Input, PageConfig, SubmissionOutcome,
    SubmitResult,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::rc::Rc;

const ACTION: &str = "https://formspree.io/f/xyzzy";

fn filled() -> FakeContactForm {
    let page = FakeContactForm::new(ACTION);
    page.fill("Maria Silva", "maria@example.com", "(11) 98888-7777", "Meu notebook não liga.");
    page
}

fn handler(
    page: &FakeContactForm,
    transport: ScriptedTransport,
) -> (Rc<ScriptedTransport>, ContactFormHandler<Rc<ScriptedTransport>>) {
    let transport = Rc::new(transport);
    let handler = ContactFormHandler::new(page.elements(), transport.clone(), &PageConfig::default());
    (transport, handler)
}

#[rstest]
#[case(Field::Name, "O campo Nome é obrigatório.")]
#[case(Field::Email, "O campo E-mail é obrigatório.")]
#[case(Field::Phone, "O campo Telefone é obrigatório.")]
#[case(Field::Message, "O campo Mensagem é obrigatória.")]
#[tokio::test]
async fn test_one_blank_field_blocks_submission(#[case] field: Field, #[case] expected: &str) {
    let page = filled();
    match field {
        Field::Name => page.name.set_value("   "),
        Field::Email => page.email.set_value(""),
        Field::Phone => page.phone.set_value(" "),
        Field::Message => page.message.set_value("\n"),
    }
    let (transport, handler) = handler(&page, ScriptedTransport::new());

    let result = handler.submit().await;

    let SubmitResult::Invalid(validation) = result.clone() else {
        panic!("expected validation failure, got {:?}", result);
    };
    assert_eq!(validation.errors, vec![expected.to_string()]);
    assert_eq!(validation.first_invalid, Some(field));
    assert!(transport.requests().is_empty());
    assert_eq!(page.status.text(), expected);
    assert!(page.status.has_class("erro"));
    assert!(page.status.is_visible());
    assert!(page.submit.disabled_history().is_empty());
}

#[tokio::test]
async fn test_invalid_email_message() {
    let page = filled();
    page.email.set_value("maria@example");
    let (transport, handler) = handler(&page, ScriptedTransport::new());

    handler.submit().await;

    assert_eq!(page.status.text(), "Por favor, insira um E-mail válido.");
    assert_eq!(page.email.focus_count(), 1);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_all_errors_joined_and_first_field_focused() {
    let page = FakeContactForm::new(ACTION);
    page.fill("", "bad", "", "");
    let (_, handler) = handler(&page, ScriptedTransport::new());

    handler.submit().await;

    assert_eq!(
        page.status.text(),
        "O campo Nome é obrigatório.\n\
         Por favor, insira um E-mail válido.\n\
         O campo Telefone é obrigatório.\n\
         O campo Mensagem é obrigatória."
    );
    assert_eq!(page.name.focus_count(), 1);
    assert_eq!(page.email.focus_count(), 0);
    assert_eq!(page.phone.focus_count(), 0);
    assert_eq!(page.message.focus_count(), 0);
}

#[tokio::test]
async fn test_successful_submission() {
    let page = filled();
    let (transport, handler) =
        handler(&page, ScriptedTransport::new().reply(200, r#"{"next":"/thanks","ok":true}"#));

    let result = handler.submit().await;

    assert_eq!(result, SubmitResult::Sent(SubmissionOutcome::Success));
    assert_eq!(
        page.status.text(),
        "Mensagem enviada com sucesso! Entraremos em contato em breve."
    );
    assert!(page.status.has_class("sucesso"));
    assert!(!page.status.has_class("erro"));
    assert!(page.status.is_visible());
    assert_eq!(page.form.reset_count(), 1);
    assert_eq!(page.name.value(), "");

    // Disabled once for the request, re-enabled exactly once
    assert_eq!(page.submit.disabled_history(), vec![true, false]);
    assert!(!page.submit.is_disabled());
    assert_eq!(page.submit.label(), "Enviar Mensagem");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].action, ACTION);
    assert_eq!(
        requests[0].fields,
        vec![
            ("nome".to_string(), "Maria Silva".to_string()),
            ("email".to_string(), "maria@example.com".to_string()),
            ("telefone".to_string(), "(11) 98888-7777".to_string()),
            ("mensagem".to_string(), "Meu notebook não liga.".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_server_field_errors_are_displayed() {
    let page = filled();
    let (_, handler) = handler(
        &page,
        ScriptedTransport::new().reply(422, r#"{"errors":[{"message":"Invalid phone"}]}"#),
    );

    handler.submit().await;

    assert_eq!(page.status.text(), "Invalid phone");
    assert!(page.status.has_class("erro"));
    assert_eq!(page.form.reset_count(), 0);
    assert_eq!(page.name.value(), "Maria Silva");
    assert_eq!(page.submit.disabled_history(), vec![true, false]);
}

#[tokio::test]
async fn test_server_status_fallback() {
    let page = filled();
    let (_, handler) = handler(&page, ScriptedTransport::new().reply(503, "Service Unavailable"));

    let result = handler.submit().await;

    assert_eq!(
        result,
        SubmitResult::Sent(SubmissionOutcome::Rejected {
            status: 503,
            message: "Falha no envio. Status: 503".to_string(),
        })
    );
    assert_eq!(page.status.text(), "Falha no envio. Status: 503");
}

#[tokio::test]
async fn test_network_failure_shows_reason_and_restores_button() {
    let page = filled();
    let (_, handler) = handler(
        &page,
        ScriptedTransport::new().fail("NetworkError when attempting to fetch resource."),
    );

    let result = handler.submit().await;

    assert!(matches!(result, SubmitResult::Sent(SubmissionOutcome::Failed { .. })));
    assert!(page
        .status
        .text()
        .contains("NetworkError when attempting to fetch resource."));
    assert!(page.status.has_class("erro"));
    assert!(!page.submit.is_disabled());
    assert_eq!(page.submit.label(), "Enviar Mensagem");
    assert_eq!(page.submit.disabled_history(), vec![true, false]);
}

#[tokio::test]
async fn test_malformed_success_body_is_an_error() {
    let page = filled();
    let (_, handler) = handler(&page, ScriptedTransport::new().reply(200, "<html>ok</html>"));

    handler.submit().await;

    assert!(page.status.text().starts_with("Erro ao enviar a mensagem: "));
    assert!(page.status.has_class("erro"));
    assert_eq!(page.form.reset_count(), 0);
    assert!(!page.submit.is_disabled());
}

#[tokio::test]
async fn test_status_is_reset_between_submissions() {
    let page = filled();
    let (_, handler) = handler(
        &page,
        ScriptedTransport::new()
            .reply(400, r#"{"error":"Form not found"}"#)
            .reply(200, "{}"),
    );

    handler.submit().await;
    assert!(page.status.has_class("erro"));

    handler.submit().await;
    assert_eq!(page.status.classes(), vec!["mensagem-status", "sucesso"]);
}

#[tokio::test]
async fn test_resubmit_after_success_needs_new_input() {
    let page = filled();
    let (transport, handler) = handler(&page, ScriptedTransport::new().reply(200, "{}"));

    handler.submit().await;
    let result = handler.submit().await;

    assert!(matches!(result, SubmitResult::Invalid(_)));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_custom_busy_label_and_original_label() {
    let page = filled();
    page.submit.set_label("Send");
    let mut config = PageConfig::default();
    config.messages.sending = "Sending...".to_string();

    let handler = ContactFormHandler::new(
        page.elements(),
        ScriptedTransport::new().reply(200, "{}"),
        &config,
    );
    handler.submit().await;

    assert_eq!(page.submit.label(), "Send");
}

#[tokio::test]
async fn test_byte_order_mark_only_name_is_blank() {
    let page = filled();
    page.name.set_value("\u{FEFF}");
    let (transport, handler) = handler(&page, ScriptedTransport::new().reply(200, "{}"));

    let result = handler.submit().await;

    assert!(matches!(result, SubmitResult::Invalid(_)));
    assert_eq!(page.status.text(), "O campo Nome é obrigatório.");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_numeric_server_error_is_displayed() {
    let page = filled();
    let (_, handler) = handler(&page, ScriptedTransport::new().reply(400, r#"{"error":123}"#));

    handler.submit().await;

    assert_eq!(page.status.text(), "123");
    assert!(page.status.has_class("erro"));
}
