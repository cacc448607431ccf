use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use nutriplan_api::routes;
use nutriplan_api::service::PlanService;
use nutriplan_engine::catalog::RonCatalog;
use nutriplan_report::PdfReportStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    let catalog_path =
        std::env::var("NUTRIPLAN_CATALOG").unwrap_or_else(|_| "catalog.ron".to_string());
    let report_dir = std::env::var("NUTRIPLAN_REPORT_DIR").unwrap_or_else(|_| "pdfs".to_string());
    let bind_addr =
        std::env::var("NUTRIPLAN_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    info!("Loading food catalog from {}", catalog_path);
    let catalog = RonCatalog::from_file(&catalog_path).unwrap();
    let store = PdfReportStore::new(&report_dir).unwrap();
    let service = web::Data::new(PlanService::new(Box::new(catalog), Box::new(store)));

    info!("Listening on {}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
