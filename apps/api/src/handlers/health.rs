use actix_web::{get, web, HttpResponse, Responder};
use application::records::use_cases::{HealthCheckUseCase, ServiceStatusUseCase};
use infrastructure::repositories::RecordRepository;

#[get("/")]
pub async fn index(repo: web::Data<dyn RecordRepository>) -> impl Responder {
    let status = ServiceStatusUseCase::execute(repo.get_ref()).await;
    HttpResponse::Ok().json(status)
}

#[get("/health")]
pub async fn health_check(repo: web::Data<dyn RecordRepository>) -> impl Responder {
    let health = HealthCheckUseCase::execute(repo.get_ref()).await;
    if health.is_healthy() {
        HttpResponse::Ok().json(health)
    } else {
        HttpResponse::InternalServerError().json(health)
    }
}
