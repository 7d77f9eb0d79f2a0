use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::joins::categorised_videos as categorised_videos_service;

#[get("/categorised_videos")]
pub async fn categorised_videos(repo: web::Data<DieselRepository>) -> impl Responder {
    match categorised_videos_service(repo.get_ref()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
