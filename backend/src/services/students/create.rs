use actix_web::{web, HttpResponse, Responder};
use common::model::student::Student;
use log::{error, info};

use crate::store::StudentStore;

/// Actix web handler for `POST /api/students`.
///
/// The payload is a record without identity; the response carries the stored
/// record with the id the store assigned.
pub async fn process(store: web::Data<StudentStore>, payload: web::Json<Student>) -> impl Responder {
    match store.create(payload.into_inner()) {
        Ok(created) => {
            info!("Created student {}", created.id_text().unwrap_or_default());
            HttpResponse::Created().json(created)
        }
        Err(e) => {
            error!("Error creating student: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error creating student: {}", e))
        }
    }
}
