//! HTTP handlers for the list screens and the JSON API.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web::web;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};

use crate::dto::list::Alert;
use crate::repository::{EntityReader, EntityWriter, FixtureRepository};
use crate::services::notices::ListNotices;
use crate::services::notification::{Notification, NotificationLevel};

pub mod api;
pub mod attachments;
pub mod lists;

/// Maps a flash message level to the CSS class used by the frontend.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Collects the incoming flash messages as page alerts.
pub fn collect_alerts(flash_messages: &IncomingFlashMessages) -> Vec<Alert> {
    flash_messages
        .iter()
        .map(|f| Alert {
            message: f.content().to_string(),
            level: alert_level_to_str(&f.level()),
        })
        .collect()
}

/// Queues controller notifications as flash messages for the next page.
pub fn flash_notifications(notifications: Vec<Notification>) {
    for notification in notifications {
        match notification.level {
            NotificationLevel::Success => FlashMessage::success(format!(
                "{}: {}",
                notification.title, notification.description
            ))
            .send(),
            NotificationLevel::Error => FlashMessage::error(notification.description).send(),
        }
    }
}

/// Registers the list screen routes of `E`.
///
/// Row updates live under `{id}/update` so that ids such as `search` or
/// `status` never collide with the fixed list actions.
pub fn configure_lists<E>(cfg: &mut web::ServiceConfig)
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    let route = E::ROUTE;
    cfg.route(route, web::get().to(lists::show_list::<E>));
    cfg.route(
        &format!("{route}/search"),
        web::post().to(lists::submit_search::<E>),
    );
    cfg.route(
        &format!("{route}/status"),
        web::post().to(lists::change_status::<E>),
    );
    cfg.route(
        &format!("{route}/{{id}}/update"),
        web::post().to(lists::update_row::<E>),
    );
}

/// Registers the JSON API routes of `E`. Mounted under `/api`.
pub fn configure_api<E>(cfg: &mut web::ServiceConfig)
where
    E: ListNotices,
    FixtureRepository: EntityReader<E> + EntityWriter<E>,
{
    let route = E::ROUTE;
    cfg.route(
        &format!("/v1{route}"),
        web::get().to(api::list_entities::<E>),
    );
    cfg.route(
        &format!("/v1{route}/{{id}}"),
        web::post().to(api::update_entity::<E>),
    );
}

/// Registers the recording and case file API routes. Mounted under `/api`.
pub fn configure_attachments(cfg: &mut web::ServiceConfig) {
    cfg.service(attachments::api_v1_recordings)
        .service(attachments::api_v1_delete_recording)
        .service(attachments::api_v1_case_files)
        .service(attachments::api_v1_delete_file);
}
