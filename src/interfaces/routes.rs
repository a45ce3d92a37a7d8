use actix_web::web;

use crate::handlers::{home::home, json_error::not_found, seo, system::health_check};

mod api;
mod blog;
mod json_error;
mod pages;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home));
    cfg.service(health_check);

    cfg.configure(pages::config_routes)
        .configure(blog::config_routes)
        .configure(projects::config_routes);

    cfg.route("/sitemap.xml", web::get().to(seo::sitemap))
        .route("/robots.txt", web::get().to(seo::robots));

    cfg.service(
        web::scope("/api/v1")
            .configure(api::config_routes)
    );

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::route().to(not_found));
}
