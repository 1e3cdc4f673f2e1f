// Integration tests for the governor rate limiter
//
// Quota exhaustion yields 429 with the standard error body; probes stay
// reachable regardless.

use actix_web::{test, App};
use uppetit_burden::middleware::RateLimiter;
use uppetit_burden::modules;

#[actix_web::test]
async fn test_requests_over_quota_get_429() {
    let limiter = RateLimiter::new(2).expect("valid quota");
    let app = test::init_service(
        App::new()
            .wrap(limiter)
            .configure(modules::configure),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 429);
}

#[actix_web::test]
async fn test_probes_are_not_throttled() {
    let limiter = RateLimiter::new(1).expect("valid quota");
    let app = test::init_service(
        App::new()
            .wrap(limiter)
            .configure(modules::configure),
    )
    .await;

    for _ in 0..5 {
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
