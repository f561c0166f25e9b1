//! List-view synchronization for the legal practice admin dashboard.
//!
//! The `data` feature exposes the reusable layer: domain entities, the data
//! source seam and the [`services::controller::ListController`]. The `server`
//! feature adds the Actix-web application serving the list screens.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

#[cfg(feature = "server")]
use crate::domain::case::Case;
#[cfg(feature = "server")]
use crate::domain::chat::ChatSummary;
#[cfg(feature = "server")]
use crate::domain::client::Client;
#[cfg(feature = "server")]
use crate::domain::consultation::VideoConsultation;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::FixtureRepository;
#[cfg(feature = "server")]
use crate::routes::{configure_api, configure_attachments, configure_lists};

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod list_url;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = web::Data::new(FixtureRepository::seeded(server_config.latency()));

    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Bad secret key: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving lists on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .configure(configure_api::<Case>)
                    .configure(configure_api::<Client>)
                    .configure(configure_api::<ChatSummary>)
                    .configure(configure_api::<VideoConsultation>)
                    .configure(configure_attachments),
            )
            .configure(configure_lists::<Case>)
            .configure(configure_lists::<Client>)
            .configure(configure_lists::<ChatSummary>)
            .configure(configure_lists::<VideoConsultation>)
            .app_data(repo.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
