use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::types::CategoryId;
use crate::dto::DeletedDto;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{CategoryForm, CategoryFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{bad_request, forbidden, not_found};
use crate::services::ServiceError;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

#[get("/category")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/category/{category_id}")]
pub async fn find_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match CategoryId::new(category_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return not_found("Category not found"),
    };

    match get_category_service(id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(ServiceError::NotFound) => not_found("Category not found"),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[post("/category")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let payload: CategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return bad_request(&e.to_string()),
    };

    match create_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(ServiceError::Conflict) => forbidden("Category already exists"),
        Err(ServiceError::Validation(message)) => bad_request(&message),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[put("/category/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let id = match CategoryId::new(category_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return not_found("Category not found"),
    };
    let payload: CategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return bad_request(&e.to_string()),
    };

    match update_category_service(id, payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(ServiceError::NotFound) => not_found("Category not found"),
        Err(ServiceError::Validation(message)) => bad_request(&message),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[delete("/category/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match CategoryId::new(category_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return not_found("Category not found"),
    };

    match delete_category_service(id, repo.get_ref()) {
        Ok(deleted) => HttpResponse::Ok().json(DeletedDto {
            deleted: deleted.get(),
        }),
        Err(ServiceError::NotFound) => not_found("Category not found"),
        Err(ServiceError::Conflict) => forbidden("Category has videos"),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
