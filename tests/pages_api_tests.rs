
use reqwest::StatusCode;
use serde_json::Value;
use test_utils::TestApp;

#[actix_rt::test]
async fn page_list_covers_both_locales() {
    let app = TestApp::spawn().await;

    for locale in ["de", "en"] {
        let response = app.get_json(&format!("/api/v1/pages/{}", locale)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let pages: Value = response.json().await.unwrap();
        let slugs: Vec<&str> = pages
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap())
            .collect();
        assert!(slugs.contains(&"home"));
        assert!(slugs.contains(&"portfolio"));
        assert!(slugs.contains(&"privacy-policy"));
    }
}

#[actix_rt::test]
async fn german_is_served_for_de_services_page() {
    let app = TestApp::spawn().await;

    let response = app.get_json("/api/v1/pages/de/services").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: Value = response.json().await.unwrap();
    assert_eq!(page["locale"], "de");
    assert_eq!(page["title"], "Unsere Leistungen");
}

#[actix_rt::test]
async fn unknown_page_returns_404() {
    let app = TestApp::spawn().await;

    let response = app.get_json("/api/v1/pages/en/blog").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[actix_rt::test]
async fn unsupported_locale_returns_400() {
    let app = TestApp::spawn().await;

    let response = app.get_json("/api/v1/pages/fr").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_rt::test]
async fn projects_are_localized() {
    let app = TestApp::spawn().await;

    let response = app.get_json("/api/v1/projects/de").await;
    assert_eq!(response.status(), StatusCode::OK);

    let projects: Value = response.json().await.unwrap();
    let categories: Vec<&str> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["category"].as_str().unwrap())
        .collect();
    assert!(categories.contains(&"Webseite"));
}

#[actix_rt::test]
async fn health_reports_service_status() {
    let app = TestApp::spawn().await;

    let response = app.get_json("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["email_service"], "Configured");
}
