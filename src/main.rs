use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_service::{app_state::AppState, config::Config, db::Database, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    let db = Database::connect(&config)
        .await
        .expect("failed to connect to MongoDB");
    let state = AppState::new(config.clone(), &db)
        .await
        .expect("failed to initialise application state");

    log::info!(
        "Starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(db.clone()))
            .wrap(Logger::default())
            .service(handlers::create_quiz)
            .service(handlers::get_quiz_question)
            .service(handlers::submit_quiz)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
