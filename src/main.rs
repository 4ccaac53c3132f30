use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use user_directory::config::EnvConfig;
use user_directory::directory::UserDirectory;
use user_directory::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let directory = Arc::new(if config.seed_users {
        UserDirectory::seeded()
    } else {
        UserDirectory::new()
    });

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&directory)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
