use actix_web::{web, Either, HttpResponse, Responder};

use crate::{
    entities::contact::{ContactForm, ContactResponse},
    errors::AppError,
    use_cases::extractors::ClientIp,
    AppState,
};

/// Accepts the contact form as either classic form encoding (what the site's
/// form posts) or JSON. Everything past extraction lives in the use case.
pub async fn submit_contact(
    state: web::Data<AppState>,
    client: ClientIp,
    payload: Either<web::Form<ContactForm>, web::Json<ContactForm>>,
) -> Result<impl Responder, AppError> {
    let form = match payload {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };

    let outcome = state.contact_handler.submit(form, &client.0).await?;

    Ok(HttpResponse::Ok().json(ContactResponse::from(outcome)))
}
