use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use video_catalog::db::establish_connection_pool;
use video_catalog::models::config::ServerConfig;
use video_catalog::repository::DieselRepository;
use video_catalog::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .expect("Failed to load configuration")
        .try_deserialize::<ServerConfig>()
        .expect("Failed to parse configuration");

    let pool = establish_connection_pool(&server_config.database_url)
        .expect("Failed to establish SQLite connection pool");
    let repo = DieselRepository::new(pool);

    let tera = Tera::new("templates/**/*.html").expect("Failed to load templates");

    let message_store = CookieMessageStore::builder(Key::generate()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.host.clone(), server_config.port);
    log::info!("Starting server on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(Files::new("/static", "./static"))
            .service(routes::main::index)
            .service(routes::categories::list_categories)
            .service(routes::categories::find_category)
            .service(routes::categories::create_category)
            .service(routes::categories::update_category)
            .service(routes::categories::delete_category)
            .service(routes::videos::list_videos)
            .service(routes::videos::find_video)
            .service(routes::videos::create_video)
            .service(routes::videos::update_video)
            .service(routes::videos::undelete_video)
            .service(routes::videos::delete_video)
            .service(routes::joins::categorised_videos)
            .service(routes::forms::add_video_form)
            .service(routes::forms::submit_video_form)
            .service(routes::forms::edit_video_form)
            .service(routes::forms::submit_edit_video_form)
            .service(routes::forms::delete_video_form)
            .service(routes::forms::list_video_form)
    })
    .bind(bind_address)?
    .run()
    .await
}
