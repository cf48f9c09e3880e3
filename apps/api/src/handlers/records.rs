use actix_web::{routes, web, HttpResponse, Responder};
use application::records::use_cases::{InsertRecordUseCase, ListRecordsUseCase};
use infrastructure::repositories::RecordRepository;
use serde_json::Value;

use crate::handlers::error_handler::HttpAppError;

#[routes]
#[get("/records")]
#[get("/display")]
pub async fn list_records(
    repo: web::Data<dyn RecordRepository>,
) -> Result<impl Responder, HttpAppError> {
    let records = ListRecordsUseCase::execute(repo.get_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// A body that is not JSON reaches the use case as `None` so the caller
/// gets the same 400 body as for any other malformed payload.
#[routes]
#[post("/records")]
#[post("/insert")]
pub async fn create_record(
    repo: web::Data<dyn RecordRepository>,
    body: Option<web::Json<Value>>,
) -> Result<impl Responder, HttpAppError> {
    let payload = body.map(web::Json::into_inner);
    let response = InsertRecordUseCase::execute(repo.get_ref(), payload).await?;
    Ok(HttpResponse::Created().json(response))
}
