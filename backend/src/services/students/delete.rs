use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use crate::store::StudentStore;

/// Actix web handler for `DELETE /api/students/{id}`.
///
/// Answers `404 Not Found` for an id that is not stored; the dashboard treats
/// that as an already completed delete.
pub async fn process(store: web::Data<StudentStore>, id: web::Path<String>) -> impl Responder {
    let id = id.into_inner();
    match store.delete(&id) {
        Ok(Some(removed)) => {
            info!("Deleted student {}", id);
            HttpResponse::Ok().json(removed)
        }
        Ok(None) => HttpResponse::NotFound().body("Student not found"),
        Err(e) => {
            error!("Error deleting student {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error deleting student: {}", e))
        }
    }
}
