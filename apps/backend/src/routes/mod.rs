use actix_web::web;

pub mod health;
pub mod solve;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes))
        .service(web::scope("/api/v1/bingo").configure(solve::configure_routes));
}
