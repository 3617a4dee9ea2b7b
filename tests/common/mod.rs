//! Common test utilities for E2E tests

use shutterbay::{AppState, config};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Session secret shared by the server under test and forged-cookie
/// helpers (32+ bytes, matching config validation).
pub const SESSION_SECRET: &str = "test-secret-key-32-bytes-long!!!";

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub _temp_dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a new test server instance with seeded store files
    pub async fn new() -> Self {
        // Create temporary directories for store files and the shell
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        let public_dir = temp_dir.path().join("public");
        std::fs::create_dir_all(&public_dir).unwrap();
        std::fs::write(
            public_dir.join("index.html"),
            "<!doctype html><title>Shutterbay</title>",
        )
        .unwrap();

        // Seed the three collections
        std::fs::write(
            data_dir.join("accounts.json"),
            serde_json::json!({
                "accounts": [
                    { "email_address": "f@f.com", "password": "yu" },
                    { "email_address": "joe@bloggs.com", "password": "pass" },
                ]
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(
            data_dir.join("images.json"),
            serde_json::json!({
                "images": [
                    {
                        "source": "https://example.com/red-arrows.jpg",
                        "user": "joe@bloggs.com",
                        "caption": "Arguably the greatest figure in British sporting history"
                    },
                    {
                        "source": "https://example.com/volley.jpg",
                        "user": "joe@bloggs.com",
                        "caption": "What a volley"
                    },
                    {
                        "source": "https://example.com/header.jpg",
                        "user": "f@f.com",
                        "caption": "Rising header at the far post"
                    },
                ]
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(
            data_dir.join("comments.json"),
            serde_json::json!({
                "https://example.com/volley.jpg": [
                    { "email_address": "f@f.com", "comment": "wonderful wonderful goal" },
                    { "email_address": "joe@bloggs.com", "comment": "unbelievable stuff" },
                ]
            })
            .to_string(),
        )
        .unwrap();

        // Create test configuration
        let config = config::AppConfig {
            server: config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Let OS assign port
                public_dir: public_dir.clone(),
            },
            store: config::StoreConfig {
                accounts_path: data_dir.join("accounts.json"),
                images_path: data_dir.join("images.json"),
                comments_path: data_dir.join("comments.json"),
            },
            auth: config::AuthConfig {
                session_secret: SESSION_SECRET.to_string(),
                session_max_age: 900,
            },
            logging: config::LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        };

        // Initialize app state
        let state = AppState::new(config.clone()).await.unwrap();

        // Create HTTP client with a cookie jar for session flows
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        // Build router
        let app = shutterbay::build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait a bit for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr: addr_str,
            state,
            _temp_dir: temp_dir,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Log in through the API, storing the session cookie in the jar
    pub async fn login(&self, email_address: &str, password: &str) {
        let response = self
            .client
            .post(self.url("/api/auth"))
            .json(&serde_json::json!({
                "email_address": email_address,
                "password": password,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    /// Build a correctly signed session cookie for any email, registered
    /// or not
    pub fn signed_cookie_for(&self, email_address: &str) -> String {
        let session = shutterbay::auth::Session::issue(email_address, 900);
        let token = shutterbay::auth::create_session_token(&session, SESSION_SECRET).unwrap();
        format!("{}={}", shutterbay::auth::SESSION_COOKIE, token)
    }

    /// Read a store file back as JSON for assertions
    pub fn read_store(&self, name: &str) -> serde_json::Value {
        let path = match name {
            "accounts" => &self.state.config.store.accounts_path,
            "images" => &self.state.config.store.images_path,
            "comments" => &self.state.config.store.comments_path,
            other => panic!("unknown store {other}"),
        };
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
    }
}

/// Client that surfaces redirects instead of following them
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("failed to build no-redirect client")
}
