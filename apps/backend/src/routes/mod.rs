use actix_web::web;

pub mod create_from_mobile;
pub mod health;

/// Configure application routes for the server and for handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // SMS game creation routes: /sms-multiplayer-game/**
    cfg.service(
        web::scope("/sms-multiplayer-game").configure(create_from_mobile::configure_routes),
    );
}
