use actix_web::{web, App};
use std::sync::Arc;
use user_directory::directory::UserDirectory;

pub struct TestClient {
    pub dir: Arc<UserDirectory>,
}

impl TestClient {
    pub fn new(dir: Arc<UserDirectory>) -> Self {
        TestClient { dir }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.dir)))
            .configure(user_directory::routes::configure_routes)
    }
}
