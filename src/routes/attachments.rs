use actix_web::{HttpResponse, Responder, delete, get, web};

use crate::dto::api::ListResponse;
use crate::models::config::ServerConfig;
use crate::repository::FixtureRepository;
use crate::routes::api::error_response;
use crate::services::attachments;

#[get("/v1/recordings")]
pub async fn api_v1_recordings(
    repo: web::Data<FixtureRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match attachments::load_recordings(repo.get_ref(), server_config.request_timeout()).await {
        Ok(recordings) => HttpResponse::Ok().json(ListResponse::from(recordings)),
        Err(err) => error_response(err),
    }
}

#[delete("/v1/recordings/{recording_id}")]
pub async fn api_v1_delete_recording(
    recording_id: web::Path<String>,
    repo: web::Data<FixtureRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let timeout = server_config.request_timeout();
    match attachments::delete_recording(repo.get_ref(), &recording_id, timeout).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[get("/v1/cases/{case_id}/files")]
pub async fn api_v1_case_files(
    case_id: web::Path<String>,
    repo: web::Data<FixtureRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let timeout = server_config.request_timeout();
    match attachments::load_case_files(repo.get_ref(), &case_id, timeout).await {
        Ok(files) => HttpResponse::Ok().json(ListResponse::from(files)),
        Err(err) => error_response(err),
    }
}

#[delete("/v1/files/{file_id}")]
pub async fn api_v1_delete_file(
    file_id: web::Path<String>,
    repo: web::Data<FixtureRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let timeout = server_config.request_timeout();
    match attachments::delete_case_file(repo.get_ref(), &file_id, timeout).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
