use actix_web::{web, HttpResponse, Responder};
use common::model::student::Student;
use log::{error, info};

use crate::store::StudentStore;

/// Actix web handler for `PUT /api/students/{id}`.
///
/// The id in the path wins over any id in the body.
///
/// # Returns
/// - `200 OK` with the stored record.
/// - `404 Not Found` when no record has that id.
/// - `503 Service Unavailable` if the store fails.
pub async fn process(
    store: web::Data<StudentStore>,
    id: web::Path<String>,
    payload: web::Json<Student>,
) -> impl Responder {
    let id = id.into_inner();
    match store.update(&id, payload.into_inner()) {
        Ok(Some(updated)) => {
            info!("Updated student {}", id);
            HttpResponse::Ok().json(updated)
        }
        Ok(None) => HttpResponse::NotFound().body("Student not found"),
        Err(e) => {
            error!("Error updating student {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error updating student: {}", e))
        }
    }
}
