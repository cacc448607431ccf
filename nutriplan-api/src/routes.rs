use actix_web::{get, http::StatusCode, post, web, HttpResponse, Responder, ResponseError};
use log::warn;
use nutriplan_model::profile::RawProfile;
use nutriplan_report::StorageError;
use serde_json::json;

use crate::service::{PlanService, ServiceError};

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Validation(e) => {
                json!({ "error": self.to_string(), "field": e.field() })
            }
            ServiceError::Storage(e) => {
                if !matches!(e, StorageError::NotFound) {
                    warn!("Request failed: {}", e);
                }
                json!({ "error": self.to_string() })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[post("/calculate")]
async fn calculate(
    service: web::Data<PlanService>,
    body: web::Json<RawProfile>,
) -> Result<impl Responder, ServiceError> {
    Ok(web::Json(service.calculate(body.into_inner()).await?))
}

#[get("/pdfs/{file}")]
async fn report(
    service: web::Data<PlanService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let bytes = service.report(&path).await?;
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .body(bytes))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(calculate).service(report);
}
