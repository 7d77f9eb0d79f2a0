use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::types::VideoId;
use crate::dto::videos::VideoDto;
use crate::dto::{DeletedDto, RestoredDto};
use crate::forms::videos::{
    AddVideoForm, AddVideoFormPayload, UpdateVideoForm, UpdateVideoFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{bad_request, not_found};
use crate::services::ServiceError;
use crate::services::videos::{
    create_video as create_video_service, get_video as get_video_service,
    list_videos as list_videos_service, restore_video as restore_video_service,
    soft_delete_video as soft_delete_video_service, update_video as update_video_service,
};

#[get("/video")]
pub async fn list_videos(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_videos_service(repo.get_ref()) {
        Ok(videos) => {
            HttpResponse::Ok().json(videos.into_iter().map(VideoDto::from).collect::<Vec<_>>())
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/video/{video_id}")]
pub async fn find_video(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match VideoId::new(video_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return not_found("Video not found"),
    };

    match get_video_service(id, repo.get_ref()) {
        Ok(video) => HttpResponse::Ok().json(VideoDto::from(video)),
        Err(ServiceError::NotFound) => not_found("Video not found"),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[post("/video")]
pub async fn create_video(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddVideoForm>,
) -> impl Responder {
    let payload: AddVideoFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return bad_request(&e.to_string()),
    };

    match create_video_service(payload, repo.get_ref()) {
        Ok(video) => HttpResponse::Created().json(VideoDto::from(video)),
        Err(ServiceError::NotFound) => not_found("Category not found"),
        Err(ServiceError::Validation(message)) => bad_request(&message),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[put("/video/{video_id}")]
pub async fn update_video(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateVideoForm>,
) -> impl Responder {
    let id = match VideoId::new(video_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return not_found("Video not found"),
    };
    let payload: UpdateVideoFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return bad_request(&e.to_string()),
    };

    match update_video_service(id, payload, repo.get_ref()) {
        Ok(video) => HttpResponse::Ok().json(VideoDto::from(video)),
        Err(ServiceError::NotFound) => not_found("Video or category not found"),
        Err(ServiceError::Validation(message)) => bad_request(&message),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[delete("/video/{video_id}")]
pub async fn delete_video(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match VideoId::new(video_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return not_found("Video not found"),
    };

    match soft_delete_video_service(id, repo.get_ref()) {
        Ok(deleted) => HttpResponse::Ok().json(DeletedDto {
            deleted: deleted.get(),
        }),
        Err(ServiceError::NotFound) => not_found("Video not found"),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[delete("/video/{video_id}/undelete")]
pub async fn undelete_video(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match VideoId::new(video_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return not_found("Video not found"),
    };

    match restore_video_service(id, repo.get_ref()) {
        Ok(restored) => HttpResponse::Ok().json(RestoredDto {
            restored: restored.get(),
        }),
        Err(ServiceError::NotFound) => not_found("Video not found"),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
