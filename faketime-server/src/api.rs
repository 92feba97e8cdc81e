use std::path::PathBuf;

use actix_web::{web, App, HttpServer};
use log::info;

use crate::api_state::ApiState;

use self::set_faketime::set_faketime;

pub mod set_faketime;

pub struct ServerConfig {
    pub faketimerc_path: PathBuf,
    pub port: u16,
}

pub async fn run_server(config: ServerConfig) {
    let state = ApiState::new(config.faketimerc_path.clone()).await;

    info!("faketime server listening on 0.0.0.0:{}", config.port);

    // The request path is ignored: every POST routes to the one handler.
    // Other methods fall through to the 404 default. The content type is
    // not checked, only the body matters.
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().content_type_required(false))
            .default_service(web::post().to(set_faketime))
    })
    .bind(("0.0.0.0", config.port))
    .unwrap()
    .run()
    .await
    .unwrap();
}
