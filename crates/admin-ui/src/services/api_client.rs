//! WASM-compatible API client with bearer-token management
//!
//! Thin wrapper around the browser `fetch` API. Requests are described by a
//! [`RequestConfig`] builder; authenticated requests pick up the admin
//! access token from browser local storage and carry it as a bearer header.
//! Responses with a non-2xx status are mapped onto the error taxonomy in
//! [`crate::models::error`]. There is deliberately no retry loop: callers
//! own the decision of what a failed request means for their screen.

use crate::models::error::{AdminApiError, AdminResult};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestInit, RequestMode, Response};

/// Local storage key holding the admin access token
const TOKEN_STORAGE_KEY: &str = "admin_access_token";

/// HTTP methods used by the admin screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Request configuration for API calls
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    pub require_auth: bool,
}

impl RequestConfig {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            require_auth: true,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_json_body<T: Serialize>(mut self, data: &T) -> AdminResult<Self> {
        let json = serde_json::to_string(data).map_err(|e| {
            AdminApiError::client(format!("Failed to serialize request body: {}", e))
        })?;
        self.body = Some(json);
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Skip the bearer header; used for public endpoints
    pub fn without_auth(mut self) -> Self {
        self.require_auth = false;
        self
    }
}

/// Bearer-token storage backed by browser local storage
#[derive(Clone)]
pub struct TokenManager {
    storage_key: String,
}

impl TokenManager {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    fn storage(&self) -> AdminResult<web_sys::Storage> {
        let window =
            window().ok_or_else(|| AdminApiError::client("No window object available"))?;
        window
            .local_storage()
            .map_err(|_| AdminApiError::client("Failed to access local storage"))?
            .ok_or_else(|| AdminApiError::client("Local storage not available"))
    }

    pub fn store_token(&self, token: &str) -> AdminResult<()> {
        self.storage()?
            .set_item(&self.storage_key, token)
            .map_err(|_| AdminApiError::client("Failed to store access token"))
    }

    pub fn get_token(&self) -> AdminResult<Option<String>> {
        self.storage()?
            .get_item(&self.storage_key)
            .map_err(|_| AdminApiError::client("Failed to read access token"))
    }

    pub fn clear_token(&self) -> AdminResult<()> {
        self.storage()?
            .remove_item(&self.storage_key)
            .map_err(|_| AdminApiError::client("Failed to clear access token"))
    }

    pub fn has_token(&self) -> bool {
        self.get_token().map(|t| t.is_some()).unwrap_or(false)
    }
}

/// Map a non-2xx response onto the error taxonomy
fn check_status(response: &Response) -> AdminResult<()> {
    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let status_text = response.status_text();
    Err(match status {
        401 => AdminApiError::auth(format!("Unauthorized: {}", status_text)),
        403 => AdminApiError::permission(format!("Forbidden: {}", status_text)),
        422 => AdminApiError::validation(format!("Rejected by server: {}", status_text)),
        _ => AdminApiError::api_with_status(format!("HTTP error: {}", status_text), status),
    })
}

/// Main API client
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token_manager: TokenManager,
}

impl ApiClient {
    /// Create a client against the given base URL (empty for same-origin)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_manager: TokenManager::new(TOKEN_STORAGE_KEY),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: &str) -> AdminResult<()> {
        self.token_manager.store_token(token)
    }

    pub fn clear_token(&self) -> AdminResult<()> {
        self.token_manager.clear_token()
    }

    pub fn has_token(&self) -> bool {
        self.token_manager.has_token()
    }

    /// Make an authenticated GET request
    pub async fn get(&self, path: &str) -> AdminResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(RequestConfig::new(HttpMethod::Get, url)).await
    }

    /// Make a GET request against a public endpoint
    pub async fn get_public(&self, path: &str) -> AdminResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(RequestConfig::new(HttpMethod::Get, url).without_auth())
            .await
    }

    /// Make an authenticated POST request with a JSON body
    pub async fn post_json<T: Serialize>(&self, path: &str, data: &T) -> AdminResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        let config = RequestConfig::new(HttpMethod::Post, url).with_json_body(data)?;
        self.execute(config).await
    }

    /// Execute a request configuration
    pub async fn execute(&self, mut config: RequestConfig) -> AdminResult<Response> {
        if config.require_auth {
            match self.token_manager.get_token()? {
                Some(token) => {
                    config
                        .headers
                        .insert("Authorization".to_string(), format!("Bearer {}", token));
                }
                None => return Err(AdminApiError::auth("No access token available")),
            }
        }

        let response = self.send(&config).await?;
        check_status(&response)?;
        Ok(response)
    }

    /// Send the request through the browser fetch API
    async fn send(&self, config: &RequestConfig) -> AdminResult<Response> {
        let opts = RequestInit::new();
        opts.set_method(config.method.as_str());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &config.body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&config.url, &opts)
            .map_err(|_| AdminApiError::client("Failed to create request"))?;

        let headers = request.headers();
        for (key, value) in &config.headers {
            headers
                .set(key, value)
                .map_err(|_| AdminApiError::client(format!("Failed to set header: {}", key)))?;
        }

        let window =
            window().ok_or_else(|| AdminApiError::client("No window object available"))?;
        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                let message = e
                    .as_string()
                    .unwrap_or_else(|| "Network request failed".to_string());
                AdminApiError::network(message)
            })?;

        response_value
            .dyn_into()
            .map_err(|_| AdminApiError::client("Invalid response type"))
    }

    /// Parse a JSON response body
    pub async fn parse_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> AdminResult<T> {
        let json_promise = response
            .json()
            .map_err(|_| AdminApiError::client("Failed to get JSON from response"))?;
        let json_value = JsFuture::from(json_promise)
            .await
            .map_err(|_| AdminApiError::parse("Response body is not valid JSON", "JSON"))?;

        let json_string = js_sys::JSON::stringify(&json_value)
            .ok()
            .and_then(|s| s.as_string())
            .ok_or_else(|| AdminApiError::client("Failed to read JSON response"))?;

        serde_json::from_str(&json_string).map_err(Into::into)
    }

    /// GET with JSON response parsing
    pub async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> AdminResult<T> {
        let response = self.get(path).await?;
        self.parse_json(response).await
    }

    /// Public GET with JSON response parsing
    pub async fn get_json_public<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> AdminResult<T> {
        let response = self.get_public(path).await?;
        self.parse_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        // Same-origin; the admin UI is served by the server it manages.
        Self::new("")
    }
}

thread_local! {
    static API_CLIENT: RefCell<Option<ApiClient>> = const { RefCell::new(None) };
}

/// Initialize the global API client
pub fn init_api_client(base_url: impl Into<String>) {
    let client = ApiClient::new(base_url);
    API_CLIENT.with(|api| {
        *api.borrow_mut() = Some(client);
    });
}

/// Get the global API client instance, falling back to same-origin
pub fn get_api_client() -> AdminResult<ApiClient> {
    API_CLIENT.with(|api| {
        Ok(api
            .borrow()
            .as_ref()
            .cloned()
            .unwrap_or_default())
    })
}
