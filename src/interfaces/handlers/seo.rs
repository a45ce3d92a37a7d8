use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use chrono::Utc;
use tracing::instrument;

use crate::{
    domain::seo::{build_robots, build_sitemap},
    AppState,
};

#[instrument(skip(state))]
pub async fn sitemap(state: web::Data<AppState>) -> impl Responder {
    let posts = state.blog_handler.published().await;
    let body = build_sitemap(&state.config.site_url, &posts, Utc::now());

    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(body)
}

pub async fn robots(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body(build_robots(&state.config.site_url))
}
