use actix_web::web;

use crate::handlers::pages::{get_page, list_pages, list_projects};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_page);
    cfg.service(list_pages);
    cfg.service(list_projects);
}
