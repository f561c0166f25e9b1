use actix_web::{HttpRequest, HttpResponse, Responder, web};

use crate::dto::api::{ApiError, ListQuery, ListResponse};
use crate::models::config::ServerConfig;
use crate::repository::errors::RepositoryError;
use crate::repository::{EntityReader, EntityWriter, FixtureRepository};
use crate::services::ServiceError;
use crate::services::lists as list_service;
use crate::services::notices::ListNotices;

/// Maps a service failure to the matching HTTP status.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    let body = ApiError {
        error: err.to_string(),
    };
    match &err {
        ServiceError::NotFound { .. }
        | ServiceError::WriteFailure {
            source: RepositoryError::NotFound,
            ..
        } => HttpResponse::NotFound().json(body),
        ServiceError::ReadFailure { source, .. } | ServiceError::WriteFailure { source, .. }
            if source.is_transient() =>
        {
            HttpResponse::ServiceUnavailable().json(body)
        }
        ServiceError::TypeConstraint(_) | ServiceError::Form(_) => {
            HttpResponse::BadRequest().json(body)
        }
        _ => {
            log::error!("API request failed: {err}");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

pub async fn list_entities<E>(
    req: HttpRequest,
    repo: web::Data<FixtureRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    let params: ListQuery = match serde_html_form::from_str(req.query_string()) {
        Ok(params) => params,
        Err(err) => return error_response(ServiceError::Form(err.to_string())),
    };

    match list_service::read_entities::<E, FixtureRepository>(
        repo.into_inner(),
        params,
        server_config.request_timeout(),
    )
    .await
    {
        Ok(items) => HttpResponse::Ok().json(ListResponse::from(items)),
        Err(err) => error_response(err),
    }
}

pub async fn update_entity<E>(
    id: web::Path<String>,
    repo: web::Data<FixtureRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(change): web::Json<E::Change>,
) -> impl Responder
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    match list_service::write_entity::<E, FixtureRepository>(
        repo.into_inner(),
        &id,
        change,
        server_config.request_timeout(),
    )
    .await
    {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => error_response(err),
    }
}
