use actix_web::{middleware, App, HttpServer};
use dungeon::{api::openapi::ApiDoc, config::AppConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr();
    log::info!("Dungeon API started at http://{bind_addr}");
    log::info!("   POST /api/dungeon/solve");
    log::info!("   GET  /api/health");
    log::info!("   Swagger UI → http://{bind_addr}/swagger-ui/");
    log::info!("   OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    let openapi = ApiDoc::openapi();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(dungeon::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind(bind_addr)?.run().await
}
