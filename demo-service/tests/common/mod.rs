use std::sync::Arc;

use demo_service::config::DuoConfig;
use demo_service::inbound::http::router::create_router;
use duo_web::DuoWeb;
use duo_web::PayloadCodec;
use duo_web::SystemClock;

pub const API_HOSTNAME: &str = "api-test.duosecurity.com";
pub const INTEGRATION_KEY: &str = "DIXXXXXXXXXXXXXXXXXX";
pub const SECRET_KEY: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef";
pub const APP_KEY: &str = "useacustomerprovidedapplicationsecretkey";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let duo_config = DuoConfig {
            api_hostname: API_HOSTNAME.to_string(),
            integration_key: INTEGRATION_KEY.to_string(),
            secret_key: SECRET_KEY.to_string(),
            app_key: APP_KEY.to_string(),
        };

        let router = create_router(Arc::new(DuoWeb::new()), Arc::new(duo_config));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

/// Answer a challenge the way the verification provider would: check the
/// primary half, then re-sign it with `response_prefix` and echo the
/// application half untouched.
pub fn provider_reply(challenge: &str, request_prefix: &str, response_prefix: &str) -> String {
    let codec = PayloadCodec::new(SystemClock);
    let (duo_half, app_half) = challenge.split_once(':').expect("Missing separator");

    let username = codec
        .parse(SECRET_KEY, duo_half, request_prefix, INTEGRATION_KEY)
        .expect("Provider rejected challenge");
    let auth_half = codec.sign(
        SECRET_KEY,
        &[username.as_str(), INTEGRATION_KEY],
        response_prefix,
        chrono::Duration::seconds(300),
    );

    format!("{}:{}", auth_half, app_half)
}
