use actix_web::web;

pub mod config;
pub mod handlers;
pub mod storage;

/// Route table shared by the server binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::index)
        .service(handlers::health::health_check)
        .service(handlers::records::list_records)
        .service(handlers::records::create_record);
}
