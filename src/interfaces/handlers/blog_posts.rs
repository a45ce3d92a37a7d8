use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{domain::listing::{ListParams, ListQuery}, errors::AppError, AppState};

/// `GET /blog?q=&tag=&page=&search_page=`
#[instrument(skip(state, params))]
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> impl Responder {
    let query = ListQuery::from(params.into_inner());

    let response = state
        .blog_handler
        .list_posts(&query, state.config.page_size)
        .await;

    HttpResponse::Ok().json(response)
}

#[instrument(skip(state, slug))]
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let post = state
        .blog_handler
        .post_detail(&slug, state.config.giscus())
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(state, slug))]
pub async fn record_view(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler.record_view(&slug).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn post_slugs(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.blog_handler.slugs().await)
}

#[instrument(skip(state))]
pub async fn post_tags(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.blog_handler.tags().await)
}
