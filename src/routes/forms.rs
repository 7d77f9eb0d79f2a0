//! HTML form routes wrapping the same service operations as the JSON API,
//! with redirect-on-success semantics and flash messages for errors.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::VideoId;
use crate::dto::categories::CategoryDto;
use crate::dto::videos::VideoDto;
use crate::forms::videos::{AddVideoForm, AddVideoFormPayload, UpdateVideoFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::categories::list_categories as list_categories_service;
use crate::services::joins::active_video_listing as active_video_listing_service;
use crate::services::videos::{
    create_video as create_video_service, get_video as get_video_service,
    soft_delete_video as soft_delete_video_service, update_video as update_video_service,
};

fn category_options(repo: &DieselRepository) -> Result<Vec<CategoryDto>, ServiceError> {
    Ok(list_categories_service(repo)?
        .into_iter()
        .map(CategoryDto::from)
        .collect())
}

#[get("/add_video_form")]
pub async fn add_video_form(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let categories = match category_options(repo.get_ref()) {
        Ok(categories) => categories,
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };

    let mut context = base_context(&flash_messages, "Add a Video");
    context.insert("categories", &categories);
    render_template(&tera, "videos/form_add_video.html", &context)
}

#[post("/submit_video")]
pub async fn submit_video_form(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddVideoForm>,
) -> impl Responder {
    let payload: AddVideoFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/add_video_form");
        }
    };

    match create_video_service(payload, repo.get_ref()) {
        Ok(_) => redirect("/list_video_form"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Category not found.").send();
            redirect("/add_video_form")
        }
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            redirect("/add_video_form")
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/edit_video_form/{video_id}")]
pub async fn edit_video_form(
    video_id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = match VideoId::new(video_id.into_inner()) {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/list_video_form");
        }
    };

    let video = match get_video_service(id, repo.get_ref()) {
        Ok(video) => VideoDto::from(video),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Video not found.").send();
            return redirect("/list_video_form");
        }
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };
    let categories = match category_options(repo.get_ref()) {
        Ok(categories) => categories,
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };

    let mut context = base_context(&flash_messages, "Edit a Video");
    context.insert("video", &video);
    context.insert("categories", &categories);
    render_template(&tera, "videos/form_edit_video.html", &context)
}

#[post("/edit_video_form/{video_id}")]
pub async fn submit_edit_video_form(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddVideoForm>,
) -> impl Responder {
    let id = match VideoId::new(video_id.into_inner()) {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/list_video_form");
        }
    };
    // The edit form posts every field, so the partial-update payload is
    // fully populated.
    let payload: UpdateVideoFormPayload = match AddVideoFormPayload::try_from(form) {
        Ok(payload) => payload.into(),
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/list_video_form");
        }
    };

    match update_video_service(id, payload, repo.get_ref()) {
        Ok(_) => redirect("/list_video_form"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Video or category not found.").send();
            redirect("/list_video_form")
        }
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            redirect("/list_video_form")
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/delete_video_form/{video_id}")]
pub async fn delete_video_form(
    video_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match VideoId::new(video_id.into_inner()) {
        Ok(id) => id,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/list_video_form");
        }
    };

    match soft_delete_video_service(id, repo.get_ref()) {
        Ok(_) => redirect("/list_video_form"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Video not found.").send();
            redirect("/list_video_form")
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/list_video_form")]
pub async fn list_video_form(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let videos = match active_video_listing_service(repo.get_ref()) {
        Ok(videos) => videos,
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };

    let mut context = base_context(&flash_messages, "List Videos");
    context.insert("videos", &videos);
    render_template(&tera, "videos/form_list_video.html", &context)
}
