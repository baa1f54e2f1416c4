use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    content::{self, Locale},
    errors::AppError,
};

fn parse_locale(raw: &str) -> Result<Locale, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Unsupported locale: {}", raw)))
}

#[get("/pages/{locale}")]
pub async fn list_pages(path: web::Path<String>) -> Result<impl Responder, AppError> {
    let locale = parse_locale(&path)?;
    Ok(HttpResponse::Ok().json(content::page_summaries(locale)))
}

#[get("/pages/{locale}/{slug}")]
pub async fn get_page(path: web::Path<(String, String)>) -> Result<impl Responder, AppError> {
    let (raw_locale, slug) = path.into_inner();
    let locale = parse_locale(&raw_locale)?;

    let page = content::page(locale, &slug)
        .ok_or_else(|| AppError::NotFound(format!("No page named '{}'", slug)))?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/projects/{locale}")]
pub async fn list_projects(path: web::Path<String>) -> Result<impl Responder, AppError> {
    let locale = parse_locale(&path)?;
    Ok(HttpResponse::Ok().json(content::projects(locale)))
}
