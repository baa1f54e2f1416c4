use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::AppState;

/// Client network identity used as the rate-limit key and recorded in
/// relayed emails. Resolution order: first `x-forwarded-for` value (when the
/// deployment trusts its proxy), then the peer address, then `"unknown"`.
/// Usage: add `client: ClientIp` as a handler parameter.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl ClientIp {
    fn resolve(req: &HttpRequest) -> String {
        let trust_forwarded = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.trust_forwarded)
            .unwrap_or(true);

        if trust_forwarded {
            if let Some(forwarded) = req.headers().get("x-forwarded-for") {
                if let Ok(value) = forwarded.to_str() {
                    let first = value.split(',').next().unwrap_or("").trim();
                    if !first.is_empty() {
                        return first.to_string();
                    }
                }
            }
        }

        req.peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl FromRequest for ClientIp {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(ClientIp(Self::resolve(req))))
    }
}
