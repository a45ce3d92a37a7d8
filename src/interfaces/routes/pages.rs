use actix_web::web;

use crate::handlers::pages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/about").route(web::get().to(pages::about)))
        .service(web::resource("/contact").route(web::get().to(pages::contact_page)));
}
