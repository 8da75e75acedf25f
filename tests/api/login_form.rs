use login_demo::domain::SERVER_ERROR_MESSAGE;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::helpers::{body_text, spawn_app, spawn_app_with_backend};

#[tokio::test]
async fn login_page_renders_an_empty_form() {
    let test_app = spawn_app().await;

    for uri in ["/", "/login"] {
        let response = test_app.get_page(uri).await;
        assert_eq!(200, response.status().as_u16());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            mime::TEXT_HTML_UTF_8.as_ref()
        );

        let html = body_text(response).await;
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(">Login</button>"));
        assert!(!html.contains("role=\"status\""));
    }
}

#[tokio::test]
async fn submit_button_is_disabled_by_the_page_script_only() {
    let test_app = spawn_app().await;

    let response = test_app
        .post_login_form("email=admin%40example.com&password=admin123")
        .await;

    let html = body_text(response).await;
    assert!(html.contains(r#"<button id="login-submit" type="submit">Login</button>"#));
    assert!(html.contains("button.disabled = true;"));
    assert!(html.contains(r#"button.textContent = "Logging in...";"#));
}

#[tokio::test]
async fn valid_credentials_show_the_success_message() {
    let test_app = spawn_app().await;

    let response = test_app
        .post_login_form("email=admin%40example.com&password=admin123")
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = body_text(response).await;
    assert!(html.contains("Login successful"));
    assert!(html.contains("alert-success"));
    assert!(html.contains(r#"value="admin@example.com""#));
    assert!(!html.contains("admin123\""));
}

#[tokio::test]
async fn wrong_password_shows_invalid_credentials() {
    let test_app = spawn_app().await;

    let response = test_app
        .post_login_form("email=admin%40example.com&password=wrong")
        .await;

    let html = body_text(response).await;
    assert!(html.contains("Invalid credentials"));
    assert!(html.contains("alert-error"));
    assert!(!html.contains("Login successful"));
}

#[tokio::test]
async fn empty_form_is_submitted_without_client_side_validation() {
    let mock_server = MockServer::start().await;
    let test_app = spawn_app_with_backend(&mock_server.uri());

    Mock::given(path("/api/login"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Invalid credentials",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = test_app.post_login_form("").await;

    assert_eq!(200, response.status().as_u16());
    assert!(body_text(response).await.contains("Invalid credentials"));
}

#[tokio::test]
async fn unreachable_backend_shows_the_fallback_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let test_app = spawn_app_with_backend(&base_url);

    let response = test_app
        .post_login_form("email=admin%40example.com&password=admin123")
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = body_text(response).await;
    assert!(html.contains(SERVER_ERROR_MESSAGE));
    assert!(html.contains("alert-error"));
    assert!(!html.contains("Login successful"));
}

#[tokio::test]
async fn malformed_backend_response_shows_the_fallback_message() {
    let mock_server = MockServer::start().await;
    let test_app = spawn_app_with_backend(&mock_server.uri());

    Mock::given(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Login successful"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = test_app
        .post_login_form("email=admin%40example.com&password=admin123")
        .await;

    let html = body_text(response).await;
    assert!(html.contains(SERVER_ERROR_MESSAGE));
    assert!(!html.contains("alert-success"));
}
