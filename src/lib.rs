pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::repository::HttpNotificationRepository;
    use crate::routes::api::{SharedReader, handle_function, payload_config};

    // The repository only holds immutable settings, so one instance serves all workers.
    let repo: Arc<SharedReader> = Arc::new(HttpNotificationRepository::from_config(&server_config));
    let repo = web::Data::from(repo);

    log::info!(
        "Serving notification list function on {}:{} (remote {})",
        server_config.address,
        server_config.port,
        server_config.base_url
    );

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(payload_config())
            .service(handle_function)
    })
    .bind(bind_address)?
    .run()
    .await
}
