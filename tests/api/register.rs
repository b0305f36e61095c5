use auth_forms::forms::REGISTER_SUCCESS_MESSAGE;
use fake::{
    faker::internet::en::{Password, SafeEmail, Username},
    Fake,
};
use serde_json::json;
use wiremock::{
    matchers::{body_string, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{login_page, register_page, spawn_app};

#[tokio::test]
async fn register_posts_the_form_once_as_json() {
    let app = spawn_app().await;

    Mock::given(path("/register"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(
            r#"{"username":"bob","password":"pw123","email":"bob@x.com"}"#,
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let _ = app
        .submit_register(&register_page("bob", "pw123", "bob@x.com"))
        .await;

    let received = app.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].0, "/register");
}

#[tokio::test]
async fn successful_registration_shows_a_message_without_navigating() {
    let app = spawn_app().await;

    Mock::given(path("/register"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "x.y.z"})))
        .mount(&app.auth_server)
        .await;

    let page = register_page("bob", "pw123", "bob@x.com");
    let (event, outcome) = app.submit_register(&page).await;

    assert!(event.default_prevented());
    assert!(outcome.is_ok());
    assert_eq!(page.message(), REGISTER_SUCCESS_MESSAGE);
    assert_eq!(page.message(), "Registration successful!");
    assert!(page.navigations().is_empty());
}

#[tokio::test]
async fn rejected_registration_shows_the_response_body() {
    let app = spawn_app().await;
    let body = "User with this username or email already exists\n";

    Mock::given(path("/register"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .mount(&app.auth_server)
        .await;

    let page = register_page("bob", "pw123", "bob@x.com");
    let (event, outcome) = app.submit_register(&page).await;

    assert!(event.default_prevented());
    assert_eq!(page.message(), body);
    assert!(page.navigations().is_empty());
    assert_eq!(outcome.expect_err("The registration should fail.").status, Some(400));
}

#[tokio::test]
async fn missing_email_is_sent_as_an_empty_string() {
    let app = spawn_app().await;

    Mock::given(path("/register"))
        .and(method("POST"))
        .and(body_string(r#"{"username":"bob","password":"pw123","email":""}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let page = login_page("bob", "pw123");
    let _ = app.submit_register(&page).await;

    assert_eq!(page.message(), REGISTER_SUCCESS_MESSAGE);
}

#[tokio::test]
async fn generated_field_values_reach_the_backend_unchanged() {
    let app = spawn_app().await;
    let username: String = Username().fake();
    let password: String = Password(8..20).fake();
    let email: String = SafeEmail().fake();

    Mock::given(path("/register"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let _ = app
        .submit_register(&register_page(&username, &password, &email))
        .await;

    let received = app.received().await;
    assert_eq!(
        received[0].1,
        json!({ "username": username, "password": password, "email": email })
    );
}
