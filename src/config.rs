use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub seed_users: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            // The exercise expects a populated directory out of the box.
            seed_users: env::var("SEED_USERS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
