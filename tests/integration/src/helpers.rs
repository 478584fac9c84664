//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.
//! Every server gets its own temporary directory holding the SQLite file and
//! the upload directory, so tests never share state.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use catalog_api::{create_app_state, serve};
use catalog_common::AppConfig;
use catalog_db::sync_schema;
use catalog_service::{BannerService, CreateBannerRequest, ServiceContext};
use reqwest::{multipart, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    ctx: ServiceContext,
    dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with default settings
    pub async fn start() -> Result<Self> {
        Self::start_with(&[]).await
    }

    /// Start a test server with extra environment-style settings
    pub async fn start_with(vars: &[(&str, &str)]) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = test_config(&dir, vars)?;

        // Create app state and the schema before accepting requests
        let state = create_app_state(config).await?;
        sync_schema(state.service_context().pool()).await?;
        let ctx = state.service_context().clone();

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            serve(listener, state).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            ctx,
            dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Directory uploads are written to
    pub fn upload_dir(&self) -> PathBuf {
        self.dir.path().join("upload")
    }

    /// Insert banners directly, the way they are seeded in production
    pub async fn seed_banners(&self, count: usize) -> Result<()> {
        let service = BannerService::new(&self.ctx);
        for n in 1..=count {
            service
                .create_banner(CreateBannerRequest {
                    image_url: format!("upload/banner{n}.png"),
                    href: format!("/products/{n}"),
                })
                .await?;
        }
        Ok(())
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }

    /// Upload `data` as the `image` field with the given filename
    pub async fn upload_image(&self, file_name: &str, data: Vec<u8>) -> Result<Response> {
        let part = multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str("image/png")?;
        self.upload_form(multipart::Form::new().part("image", part))
            .await
    }

    /// POST an arbitrary multipart form to /image
    pub async fn upload_form(&self, form: multipart::Form) -> Result<Response> {
        let url = format!("{}/image", self.base_url());
        Ok(self.client.post(&url).multipart(form).send().await?)
    }
}

/// Create a test configuration rooted in `dir`
pub fn test_config(dir: &TempDir, vars: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    vars.entry("DATABASE_URL".to_string()).or_insert_with(|| {
        format!("sqlite://{}", dir.path().join("catalog.sqlite3").display())
    });
    vars.entry("UPLOAD_DIR".to_string())
        .or_insert_with(|| dir.path().join("upload").display().to_string());

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status and return the body as text
pub async fn assert_text(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    assert_text(response, expected_status).await.map(|_| ())
}
