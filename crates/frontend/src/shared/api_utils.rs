//! HTTP helpers shared by the domain `api` modules.
//!
//! Every call goes through [`ApiClient`], which carries the API base URL and
//! the bearer token. A 401 from any call ends the session: storage is cleared
//! and the browser is sent to `/login`.

use crate::shared::config::use_config;
use crate::system::auth::context::{sign_out, use_session};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

/// Client for the current component tree. Call it in the component body,
/// before spawning, since context is not reachable from async tasks.
pub fn use_api() -> ApiClient {
    let config = use_config();
    let token = use_session().with_untracked(|s| s.token.clone());
    ApiClient::new(config.api_base_url, token)
}

/// Query string fragment `key=value` with the value URL-encoded.
pub fn query_pair(key: &str, value: &str) -> String {
    format!("{}={}", key, urlencoding::encode(value))
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    /// Joins the base URL and a path starting with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }

    /// Multipart POST; the browser sets the boundary header itself.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }

    /// Multipart PUT; the browser sets the boundary header itself.
    pub async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.status() == 401 {
        log::warn!("401 from {}, ending session", response.url());
        sign_out();
        return Err("Session expired".to_string());
    }
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5001/api/", None);
        assert_eq!(
            client.url("/purchase-orders"),
            "http://localhost:5001/api/purchase-orders"
        );
    }

    #[test]
    fn test_query_pair_encodes_value() {
        assert_eq!(query_pair("search", "Site A&B"), "search=Site%20A%26B");
        assert_eq!(query_pair("page", "2"), "page=2");
    }
}
