pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const PORT_ENV_VAR: &str = "PORT";
    pub const SETTINGS_ENV_PREFIX: &str = "ACCOUNTS";
}

pub const SETTINGS_FILE: &str = "config/settings";
pub const DEFAULT_JWT_COOKIE_NAME: &str = "jwt";
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;
pub const API_PREFIX: &str = "/api/users";

pub mod prod {
    pub const APP_HOST: &str = "0.0.0.0";
    pub const APP_PORT: i64 = 5000;
    pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
