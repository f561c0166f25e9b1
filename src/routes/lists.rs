use actix_web::{HttpRequest, HttpResponse, Responder, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use validator::Validate;

use crate::forms::list::{FieldUpdateForm, SearchForm, StatusFilterForm};
use crate::list_url::ListUrl;
use crate::models::config::ServerConfig;
use crate::repository::{EntityReader, EntityWriter, FixtureRepository};
use crate::routes::{collect_alerts, flash_notifications, redirect};
use crate::services::ServiceError;
use crate::services::lists as list_service;
use crate::services::notices::ListNotices;

/// URL of the list page the request was issued from.
fn current_url<E: ListNotices>(req: &HttpRequest) -> ListUrl {
    ListUrl::parse(E::ROUTE, req.query_string())
}

pub async fn show_list<E>(
    req: HttpRequest,
    repo: web::Data<FixtureRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    let url = current_url::<E>(&req);
    let mut page = list_service::load_list_page::<E, FixtureRepository>(
        repo.into_inner(),
        &url,
        server_config.request_timeout(),
    )
    .await;
    page.alerts = collect_alerts(&flash_messages);

    HttpResponse::Ok().json(page)
}

pub async fn submit_search<E>(
    req: HttpRequest,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    let url = current_url::<E>(&req);

    if let Err(err) = form.validate() {
        log::error!("Failed to validate search form: {err}");
        FlashMessage::error("Search query is too long").send();
        return redirect(&url.to_string());
    }

    let next = list_service::search_list::<E, FixtureRepository>(&url, &form.query);
    redirect(&next.to_string())
}

pub async fn change_status<E>(
    req: HttpRequest,
    web::Form(form): web::Form<StatusFilterForm>,
) -> impl Responder
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    let url = current_url::<E>(&req);

    if let Err(err) = form.validate() {
        log::error!("Failed to validate status form: {err}");
        FlashMessage::error("Status is required").send();
        return redirect(&url.to_string());
    }

    match list_service::select_status::<E, FixtureRepository>(&url, &form.status) {
        Ok(next) => redirect(&next.to_string()),
        Err(_) => {
            FlashMessage::error(format!("Unknown status: {}", form.status)).send();
            redirect(&url.to_string())
        }
    }
}

pub async fn update_row<E>(
    req: HttpRequest,
    id: web::Path<String>,
    repo: web::Data<FixtureRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<FieldUpdateForm>,
) -> impl Responder
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    let url = current_url::<E>(&req);

    let (field, value) = match form.into_parts() {
        Ok(parts) => parts,
        Err(err) => {
            log::error!("Failed to validate update form: {err}");
            FlashMessage::error("Invalid update").send();
            return redirect(&url.to_string());
        }
    };

    let outcome = list_service::update_entity::<E, FixtureRepository>(
        repo.into_inner(),
        &id,
        &field,
        &value,
        server_config.request_timeout(),
    )
    .await;

    if let Err(ServiceError::TypeConstraint(message)) = &outcome.updated {
        FlashMessage::error(format!("Invalid update: {message}")).send();
    }
    flash_notifications(outcome.notifications);

    redirect(&url.to_string())
}
