use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Nexor Software site API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "locales": ["de", "en"],
        "contact": "/api/v1/contact"
    }))
}
