use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

#[instrument(skip(state, params))]
pub async fn list_projects(
    state: web::Data<AppState>,
    params: web::Query<CategoryParams>,
) -> impl Responder {
    let response = state
        .project_handler
        .list(params.category.as_deref())
        .await;

    HttpResponse::Ok().json(response)
}

#[instrument(skip(state, project_id))]
pub async fn get_project(
    state: web::Data<AppState>,
    project_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.detail(&project_id).await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state))]
pub async fn project_ids(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.project_handler.ids().await)
}
