use actix_web::{middleware::{DefaultHeaders, Logger}, web, App, HttpServer};
use blogsphere_admin::{
    config::Config,
    helper::api_client::ApiClient,
    routes,
    store::{UiState, UiStore},
    AppState,
};
use clap::Parser;
use std::path::PathBuf;
use tera::Tera;

#[derive(Parser, Debug)]
#[command(name = "blogsphere_server", author, version, about = "Starts the BlogSphere admin dashboard.")]
struct Cli {
    /// Path to a .env file. Falls back to ./.env when present.
    #[arg(long, value_name = "FILE")]
    env_file: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env(cli.env_file.as_deref())
        .expect("FATAL: Failed to load or parse configuration.");

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.log_level));

    let tera = Tera::new(&config.templates_glob()).expect("FATAL: Tera initialization failed");
    let client = ApiClient::new(&config.api_base_url).expect("FATAL: Could not build the backend client.");

    let mut initial_ui = UiState::default();
    initial_ui.set_current_user(Some(config.current_user.clone()));
    let app_state = web::Data::new(AppState::new(UiStore::new(initial_ui)));

    let server_address = format!("{}:{}", config.web.host, config.web.port);
    log::info!("Backend API at {}", client.base_url());
    log::info!("Server starting at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block")),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(client.clone()))
            .app_data(app_state.clone())
            .service(actix_files::Files::new("/static", &config.static_path))
            .configure(routes::config_routes)
    })
    .bind(server_address)?
    .run()
    .await
}
