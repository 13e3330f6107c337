use std::sync::Arc;

use accounts_adapters::{
    auth_validation::{JwtAuthConfig, LocalJwtValidator},
    clock::ManualClock,
    config::{ApplicationSettings, test},
    persistence::HashMapAccountStore,
};
use accounts_core::{Account, AccountId, AccountStore};
use accounts_service::AccountService;
use fake::{
    Fake,
    faker::{
        internet::en::{Password, SafeEmail},
        name::en::Name,
    },
};
use secrecy::Secret;
use serde::Serialize;
use tokio::net::TcpListener;

pub const COOKIE_NAME: &str = "jwt";
pub const TOKEN_TTL_SECONDS: i64 = 3600;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: HashMapAccountStore,
    pub clock: ManualClock,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_assets_dir(None).await
    }

    pub async fn with_assets_dir(assets_dir: Option<String>) -> Self {
        let clock = ManualClock::starting_now();
        let sessions = LocalJwtValidator::with_clock(
            JwtAuthConfig {
                jwt_cookie_name: COOKIE_NAME.to_string(),
                jwt_secret: Secret::from("integration-test-secret".to_string()),
                token_ttl_in_seconds: TOKEN_TTL_SECONDS,
                // reqwest only replays Secure cookies over https
                secure_cookie: false,
            },
            Arc::new(clock.clone()),
        );
        let account_store = HashMapAccountStore::default();
        let settings = ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            assets_dir,
            allowed_origins: vec![],
        };

        let service = AccountService::new(account_store.clone(), sessions, &settings);

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            account_store,
            clock,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get_path(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_register<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(self.url("/api/users/register"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(self.url("/api/users/login"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.http_client
            .post(self.url("/api/users/logout"))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_profile(&self) -> reqwest::Response {
        self.get_path("/api/users/profile").await
    }

    pub async fn put_profile<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .put(self.url("/api/users/profile"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Hit `/profile` from a fresh client that only sends the given cookie.
    pub async fn get_profile_with_cookie(&self, cookie: Option<&str>) -> reqwest::Response {
        let mut request = reqwest::Client::new().get(self.url("/api/users/profile"));
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Register and log in a random account; the session cookie ends up in
    /// the client's cookie store.
    pub async fn signed_in(&self) -> Credentials {
        let credentials = Credentials::random();

        let response = self.post_register(&credentials.register_body()).await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self.post_login(&credentials.login_body()).await;
        assert_eq!(response.status().as_u16(), 200);

        credentials
    }

    pub async fn stored_account(&self, id: AccountId) -> Account {
        self.account_store.get_account(id).await.unwrap()
    }
}

pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn random() -> Self {
        Self {
            name: Name().fake(),
            email: get_random_email(),
            password: Password(8..32).fake(),
        }
    }

    pub fn register_body(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "password": self.password,
        })
    }

    pub fn login_body(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "password": self.password,
        })
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

#[derive(Debug, serde::Deserialize)]
pub struct AccountBody {
    pub id: AccountId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
