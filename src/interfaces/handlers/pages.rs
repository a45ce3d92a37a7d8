use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        contact::ContactForm,
        page::{AboutResponse, ContactPageResponse, SiteMeta},
    },
    errors::AppError,
    use_cases::contact,
    AppState,
};

#[instrument(skip(state))]
pub async fn about(state: web::Data<AppState>) -> impl Responder {
    let profile = state.profile_handler.get().await;

    HttpResponse::Ok().json(AboutResponse {
        site: SiteMeta::from(&state.config),
        skills: profile.as_ref().map(|p| p.skills.clone()).unwrap_or_default(),
        profile,
    })
}

#[instrument(skip(state))]
pub async fn contact_page(state: web::Data<AppState>) -> impl Responder {
    let profile = state.profile_handler.get().await;
    let email = profile
        .as_ref()
        .and_then(|p| p.email.clone())
        .or_else(|| state.config.contact_email.clone());

    HttpResponse::Ok().json(ContactPageResponse {
        site: SiteMeta::from(&state.config),
        email,
        links: profile.as_ref().map(|p| p.contact_links()),
    })
}

/// Validates the contact form and answers with a `mailto:` link addressed to
/// the site owner.
#[instrument(skip(state, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let profile_email = state.profile_handler.get().await.and_then(|p| p.email);
    let recipient = profile_email.or_else(|| state.config.contact_email.clone());

    let response = contact::submit(form.into_inner(), recipient.as_deref())?;

    Ok(HttpResponse::Ok().json(response))
}
