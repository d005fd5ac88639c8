//! Form behaviour driven through the mounted form, with a scripted client.

use registro_form::mocks::MockRegistrationClient;
use registro_form::{CheckPrecedence, Field, RegistrationForm, RegistrationReducer};
use std::time::Duration;

const SETTLE: Duration = Duration::from_secs(5);

async fn fill_required(form: &RegistrationForm<MockRegistrationClient>) {
    for (field, value) in [
        (Field::Email, "ana@example.com"),
        (Field::Name, "Ana"),
        (Field::Surname, "García"),
        (Field::Password, "s3cret"),
        (Field::RepeatPassword, "s3cret"),
    ] {
        form.change(field, value).await.ok();
    }
}

#[tokio::test]
async fn test_invalid_email_shows_helper_on_blur_only() {
    registro_testing::init_tracing();
    let form = RegistrationForm::mount(MockRegistrationClient::succeeding());

    form.change(Field::Email, "invalid_email").await.ok();
    assert!(form.view().await.query_by_text("Formato de email incorrecto").is_none());

    form.blur(Field::Email).await.ok();
    assert!(form.view().await.get_by_text("Formato de email incorrecto").is_ok());

    form.change(Field::Email, "valid@email.com").await.ok();
    form.blur(Field::Email).await.ok();
    assert!(form.view().await.query_by_text("Formato de email incorrecto").is_none());
}

#[tokio::test]
async fn test_phone_helper_follows_format() {
    let form = RegistrationForm::mount(MockRegistrationClient::succeeding());

    form.change(Field::Phone, "123456").await.ok();
    form.blur(Field::Phone).await.ok();
    assert!(form.view().await.get_by_text("Formato de teléfono incorrecto").is_ok());

    form.change(Field::Phone, "612345678").await.ok();
    form.blur(Field::Phone).await.ok();
    assert!(form.view().await.query_by_text("Formato de teléfono incorrecto").is_none());

    form.change(Field::Phone, "").await.ok();
    form.blur(Field::Phone).await.ok();
    assert!(!form.view().await.contains_text("Formato de teléfono"));
}

#[tokio::test]
async fn test_missing_required_fields_block_submission() {
    let client = MockRegistrationClient::succeeding();
    let form = RegistrationForm::mount(client.clone());

    form.change(Field::Email, "ana@example.com").await.ok();
    let view = form.submit_and_settle(SETTLE).await;

    assert_eq!(
        view.ok().and_then(|v| v.status),
        Some("Falta algún campo obligatorio".to_string())
    );
    assert_eq!(client.request_count(), 0);

    fill_required(&form).await;
    let view = form.submit_and_settle(SETTLE).await;

    assert!(view.is_ok_and(|v| !v.contains_text("Falta algún campo obligatorio")));
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_password_mismatch_blocks_submission() {
    let client = MockRegistrationClient::succeeding();
    let form = RegistrationForm::mount(client.clone());

    fill_required(&form).await;
    form.change(Field::RepeatPassword, "otra").await.ok();
    let view = form.submit_and_settle(SETTLE).await;

    assert_eq!(
        view.ok().and_then(|v| v.status),
        Some("Las contraseñas no coinciden".to_string())
    );
    assert_eq!(client.request_count(), 0);

    form.change(Field::RepeatPassword, "s3cret").await.ok();
    let view = form.submit_and_settle(SETTLE).await;

    assert_eq!(
        view.ok().and_then(|v| v.status),
        Some("Registrado correctamente".to_string())
    );
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_mismatch_message_wins_over_missing_fields() {
    let form = RegistrationForm::mount(MockRegistrationClient::succeeding());

    form.change(Field::Password, "a").await.ok();
    form.change(Field::RepeatPassword, "b").await.ok();
    form.submit().await.ok();

    assert_eq!(
        form.view().await.status.as_deref(),
        Some("Las contraseñas no coinciden")
    );
}

#[tokio::test]
async fn test_first_failure_wins_option() {
    let client = MockRegistrationClient::succeeding();
    let form = RegistrationForm::with_reducer(
        client.clone(),
        RegistrationReducer::with_precedence(CheckPrecedence::FirstFailureWins),
    );

    form.change(Field::Password, "a").await.ok();
    form.change(Field::RepeatPassword, "b").await.ok();
    form.submit().await.ok();

    assert_eq!(
        form.view().await.status.as_deref(),
        Some("Falta algún campo obligatorio")
    );
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn test_visible_field_helper_blocks_submission() {
    let client = MockRegistrationClient::succeeding();
    let form = RegistrationForm::mount(client.clone());

    fill_required(&form).await;
    form.change(Field::Phone, "12").await.ok();
    form.blur(Field::Phone).await.ok();
    let view = form.submit_and_settle(SETTLE).await;

    assert!(view.is_ok_and(|v| v.status.is_none()));
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn test_reblur_valid_field_keeps_other_state() {
    let form = RegistrationForm::mount(MockRegistrationClient::succeeding());

    form.change(Field::Phone, "12").await.ok();
    form.blur(Field::Phone).await.ok();
    form.change(Field::Email, "ana@example.com").await.ok();
    form.blur(Field::Email).await.ok();
    form.submit().await.ok();
    let before = form.state().await;

    form.blur(Field::Email).await.ok();
    form.blur(Field::Email).await.ok();

    assert_eq!(form.state().await, before);
    assert!(before.phone_helper.show);
    assert!(before.status.show);
}

#[tokio::test]
async fn test_server_message_shown_verbatim() {
    let client = MockRegistrationClient::rejecting(409, Some("Ya existe un usuario con este email"));
    let form = RegistrationForm::mount(client);

    fill_required(&form).await;
    let view = form.submit_and_settle(SETTLE).await;

    assert!(view.is_ok_and(|v| v.get_by_text("Ya existe un usuario con este email").is_ok()));
}

#[tokio::test]
async fn test_transport_failure_shows_fallback() {
    let form = RegistrationForm::mount(MockRegistrationClient::failing_transport());

    fill_required(&form).await;
    let view = form.submit_and_settle(SETTLE).await;

    assert_eq!(
        view.ok().and_then(|v| v.status),
        Some("No se ha podido completar el registro".to_string())
    );
}

#[tokio::test]
async fn test_draft_is_kept_after_success() {
    let form = RegistrationForm::mount(MockRegistrationClient::succeeding());

    fill_required(&form).await;
    form.submit_and_settle(SETTLE).await.ok();

    let state = form.state().await;
    assert_eq!(state.draft.email, "ana@example.com");
    assert_eq!(state.status.visible_text(), Some("Registrado correctamente"));
}

#[tokio::test]
async fn test_unmount_discards_pending_outcome() {
    let client = MockRegistrationClient::succeeding().with_delay(Duration::from_secs(30));
    let form = RegistrationForm::mount(client.clone());

    fill_required(&form).await;
    let handle = form.submit().await;
    assert!(handle.is_ok());
    assert!(form.is_submitting());

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(client.request_count(), 1);

    let store = form.store().clone();
    let started = tokio::time::Instant::now();
    assert!(form.unmount(Duration::from_secs(1)).await.is_ok());

    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(store.state(|s| s.status.visible_text().map(str::to_string)).await, None);
    assert_eq!(store.in_flight(registro_form::REGISTER_REQUEST), 0);
}

#[tokio::test]
async fn test_handle_settles_after_outcome_is_applied() {
    let client = MockRegistrationClient::succeeding().with_delay(Duration::from_millis(20));
    let form = RegistrationForm::mount(client);

    fill_required(&form).await;
    let Ok(mut handle) = form.submit().await else {
        unreachable!("form is mounted");
    };
    assert!(handle.wait_with_timeout(SETTLE).await.is_ok());

    assert!(!form.is_submitting());
    assert_eq!(
        form.view().await.status.as_deref(),
        Some("Registrado correctamente")
    );
}
