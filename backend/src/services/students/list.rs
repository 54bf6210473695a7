use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::store::StudentStore;

/// Actix web handler for `GET /api/students`.
pub async fn process(store: web::Data<StudentStore>) -> impl Responder {
    match store.list() {
        Ok(students) => HttpResponse::Ok().json(students),
        Err(e) => {
            error!("Error listing students: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error listing students: {}", e))
        }
    }
}
