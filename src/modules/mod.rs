pub mod burden;
pub mod health;

/// Register every HTTP route of the service
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health::controllers::configure(cfg);
    burden::controllers::configure(cfg);
}
