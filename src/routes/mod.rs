use actix_web::web;

pub mod health;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/users")
            .service(users::list::list)
            .service(users::invite::invite)
            .service(users::resend::resend_invite)
            .service(users::revoke::revoke_access),
    );
}
