
use reqwest::StatusCode;
use serde_json::Value;
use test_utils::*;

#[actix_rt::test]
async fn valid_submission_returns_success_with_delivery_id() {
    let app = TestApp::spawn().await;

    let response = app.post_contact(&valid_form()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully!");
    assert_eq!(body["id"], "delivery-0001");
    assert_eq!(app.mailer.call_count(), 1);
}

#[actix_rt::test]
async fn honeypot_submission_fakes_success_and_sends_nothing() {
    let app = TestApp::spawn().await;

    let mut form = valid_form();
    form.retain(|(k, _)| *k != "company");
    form.push(("company", "Acme Bots Ltd".to_string()));

    let response = app.post_contact(&form).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body.get("id").is_none(), "trap success must carry no id");
    assert_eq!(app.mailer.call_count(), 0);
}

#[actix_rt::test]
async fn too_fast_submission_is_rejected_without_dispatch() {
    let app = TestApp::spawn().await;

    let mut form = valid_form();
    form.retain(|(k, _)| *k != "_ts");
    form.push(("_ts", chrono::Utc::now().timestamp_millis().to_string()));

    let response = app.post_contact(&form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "Rejected (suspiciously fast submission).");
    assert_eq!(app.mailer.call_count(), 0);
}

#[actix_rt::test]
async fn unparseable_timestamp_is_ignored() {
    let app = TestApp::spawn().await;

    let mut form = valid_form();
    form.retain(|(k, _)| *k != "_ts");
    form.push(("_ts", "yesterday".to_string()));

    let response = app.post_contact(&form).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.mailer.call_count(), 1);
}

#[actix_rt::test]
async fn sixth_submission_within_window_is_rate_limited() {
    let app = TestApp::spawn().await;

    for i in 1..=5 {
        let response = app.post_contact(&valid_form()).await;
        assert_eq!(response.status(), StatusCode::OK, "submission {} failed", i);
    }

    let sixth = app.post_contact(&valid_form()).await;
    assert_eq!(sixth.status(), StatusCode::BAD_REQUEST);
    let body: Value = sixth.json().await.unwrap();
    assert_eq!(body["message"], "Rate limit exceeded. Please wait a moment.");
    assert_eq!(app.mailer.call_count(), 5);
}

#[actix_rt::test]
async fn rate_limit_keys_on_forwarded_address() {
    let app = TestApp::spawn().await;

    for _ in 0..6 {
        app.post_contact(&valid_form()).await;
    }

    // Same app, different client address: fresh window.
    let response = app
        .client
        .post(format!("{}/api/v1/contact", app.address))
        .header("x-forwarded-for", "198.51.100.2, 10.0.0.1")
        .form(&valid_form())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn missing_required_field_returns_field_detail() {
    let app = TestApp::spawn().await;

    let mut form = valid_form();
    form.retain(|(k, _)| *k != "email");
    form.push(("email", "not-an-email".to_string()));

    let response = app.post_contact(&form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "email"));
    assert_eq!(app.mailer.call_count(), 0);
}

#[actix_rt::test]
async fn markup_in_message_reaches_mailer_escaped() {
    let app = TestApp::spawn().await;

    let mut form = valid_form();
    form.retain(|(k, _)| *k != "message" && *k != "subject");
    form.push(("subject", "<b>Offer</b>".to_string()));
    form.push(("message", "Tom & 'Jerry' say \"hi\" <script>alert(1)</script>".to_string()));

    let response = app.post_contact(&form).await;
    assert_eq!(response.status(), StatusCode::OK);

    let email = app.mailer.last_email().expect("mailer not invoked");
    for body in [&email.html, &email.text] {
        assert!(!body.contains("<script>"));
        assert!(!body.contains("<b>"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(body.contains("&quot;hi&quot;"));
        assert!(body.contains("&#39;Jerry&#39;"));
    }
}

#[actix_rt::test]
async fn provider_error_is_relayed_as_client_error() {
    let app = TestApp::spawn_with(SpyBehavior::ProviderError(
        "The nexor-software.de domain is not verified.".to_string(),
    ))
    .await;

    let response = app.post_contact(&valid_form()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "The nexor-software.de domain is not verified.");
}

#[actix_rt::test]
async fn transport_failure_returns_generic_server_error() {
    let app = TestApp::spawn_with(SpyBehavior::TransportError(
        "connection reset by peer".to_string(),
    ))
    .await;

    let response = app.post_contact(&valid_form()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["message"], "Failed to send message. Please try again later.");
    // Transport detail must not leak to the caller.
    assert!(!body.to_string().contains("connection reset"));
}

#[actix_rt::test]
async fn json_payloads_are_accepted_too() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/v1/contact", app.address))
        .header("x-forwarded-for", "203.0.113.9")
        .json(&serde_json::json!({
            "firstName": "Anna",
            "lastName": "Beta",
            "email": "a@b.com",
            "subject": "Hi",
            "message": "Hello there"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.mailer.call_count(), 1);
}
