// Integration tests for the calculator page and probes
//
// GET / renders the empty form, /health and /ready answer JSON, and the
// request id middleware tags every response.

use actix_web::{test, App};
use uppetit_burden::burden::models::FIELDS;
use uppetit_burden::burden::views::PAGE_TITLE;
use uppetit_burden::middleware::{RequestId, REQUEST_ID_HEADER};
use uppetit_burden::modules;
use uppetit_burden::modules::health::controllers::{HealthResponse, SERVICE_NAME};

#[actix_web::test]
async fn test_empty_form_page() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains(PAGE_TITLE));
    assert!(html.contains(r#"<form method="post" action="/">"#));
    for spec in FIELDS.iter() {
        assert!(html.contains(spec.label), "missing label for {}", spec.name);
    }
    assert!(!html.contains(r#"class="error""#));
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, SERVICE_NAME);
}

#[actix_web::test]
async fn test_ready_endpoint() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_responses_carry_request_id() {
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .configure(modules::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("X-Request-ID", "form-page-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("form-page-1")
    );
}

#[actix_web::test]
async fn test_unknown_route_is_404() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}
