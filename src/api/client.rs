//! OpenSea REST API client implementation.
//!
//! The [`OpenSeaApiClient`] provides a type-safe interface for the orderbook
//! and asset endpoints of the OpenSea REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use opensea_api::api::{OpenSeaApiClient, OrderQuery, OrderSide};
//! use opensea_api::network::Network;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenSeaApiClient::builder()
//!         .network(Network::Rinkeby)
//!         .api_key("my-key")
//!         .build()?;
//!
//!     let query = OrderQuery::new().with_side(OrderSide::Sell);
//!     let page = client.get_orders(&query, 1).await?;
//!     println!("{} of {} orders", page.orders.len(), page.count);
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::api::query::{self, QueryPairs};
use crate::api::types::*;
use crate::network::{api_path, orderbook_path, Network};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Default number of records per page for list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default retries for [`OpenSeaApiClient::post_order`].
pub const DEFAULT_POST_ORDER_RETRIES: u32 = 2;

/// Default retries for [`OpenSeaApiClient::get_asset`].
pub const DEFAULT_GET_ASSET_RETRIES: u32 = 1;

/// Default retries for [`OpenSeaApiClient::get_tokens`].
pub const DEFAULT_GET_TOKENS_RETRIES: u32 = 1;

/// Debug hook called with a human-readable line before and after every request.
pub type Logger = Arc<dyn Fn(&str) + Send + Sync>;

fn noop_logger() -> Logger {
    Arc::new(|_: &str| {})
}

/// Connection settings, mirroring what a caller usually keeps in its own config.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Network selector; picks the default host and API base URL
    pub network: Network,
    /// API key sent as `X-API-KEY`
    pub api_key: Option<String>,
    /// Overrides the network's API base URL
    pub api_base_url: Option<String>,
}

/// Per-request options for the low-level [`post`](OpenSeaApiClient::post)
/// and [`put`](OpenSeaApiClient::put) helpers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Prebuilt body; when set, the `body` argument is not serialized
    pub body: Option<String>,
    /// Extra headers for this request only
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `body` verbatim instead of serializing the body argument.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

/// Builder for configuring [`OpenSeaApiClient`].
#[derive(Clone)]
pub struct OpenSeaApiClientBuilder {
    network: Network,
    api_key: Option<String>,
    api_base_url: Option<String>,
    host_url: Option<String>,
    timeout: Duration,
    page_size: u32,
    retry_delay: Duration,
    default_headers: Vec<(String, String)>,
    logger: Option<Logger>,
}

impl Default for OpenSeaApiClientBuilder {
    fn default() -> Self {
        Self {
            network: Network::default(),
            api_key: None,
            api_base_url: None,
            host_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            retry_delay: Duration::ZERO,
            default_headers: Vec::new(),
            logger: None,
        }
    }
}

impl fmt::Debug for OpenSeaApiClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenSeaApiClientBuilder")
            .field("network", &self.network)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("host_url", &self.host_url)
            .field("timeout", &self.timeout)
            .field("page_size", &self.page_size)
            .field("retry_delay", &self.retry_delay)
            .finish_non_exhaustive()
    }
}

impl OpenSeaApiClientBuilder {
    /// Create a new builder targeting mainnet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an [`ApiConfig`].
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.network = config.network;
        self.api_key = config.api_key;
        self.api_base_url = config.api_base_url;
        self
    }

    /// Select the network (sets default host and API base URL).
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Set the API key. An empty key is treated as no key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL chosen by the network selector.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Override the website host URL chosen by the network selector.
    pub fn host_url(mut self, url: impl Into<String>) -> Self {
        self.host_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Records per page for list endpoints.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fixed pause between retry attempts (default: retry immediately).
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Install a debug logging hook.
    pub fn logger<F>(mut self, logger: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<OpenSeaApiClient> {
        if self.page_size == 0 {
            return Err(ApiError::InvalidParameter(
                "page_size must be greater than zero".to_string(),
            ));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let api_key = self.api_key.filter(|key| !key.is_empty());
        if let Some(key) = &api_key {
            HeaderValue::from_str(key).map_err(|_| {
                ApiError::InvalidParameter("API key contains invalid header characters".to_string())
            })?;
        }

        let http_client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        let api_base_url = self
            .api_base_url
            .unwrap_or_else(|| self.network.api_base_url().to_string());
        let host_url = self
            .host_url
            .unwrap_or_else(|| self.network.host_url().to_string());

        Ok(OpenSeaApiClient {
            http_client,
            network: self.network,
            host_url: host_url.trim_end_matches('/').to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key,
            page_size: self.page_size,
            retry_delay: self.retry_delay,
            logger: self.logger.unwrap_or_else(noop_logger),
        })
    }
}

/// OpenSea REST API client.
///
/// Cheap to clone; clones share the connection pool. All request methods
/// take `&self`, so one client can serve concurrent callers.
#[derive(Clone)]
pub struct OpenSeaApiClient {
    http_client: Client,
    network: Network,
    host_url: String,
    api_base_url: String,
    api_key: Option<String>,
    page_size: u32,
    retry_delay: Duration,
    logger: Logger,
}

impl fmt::Debug for OpenSeaApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenSeaApiClient")
            .field("network", &self.network)
            .field("host_url", &self.host_url)
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("page_size", &self.page_size)
            .field("retry_delay", &self.retry_delay)
            .finish_non_exhaustive()
    }
}

impl OpenSeaApiClient {
    /// Create a client from an [`ApiConfig`] with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        OpenSeaApiClientBuilder::new().config(config).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> OpenSeaApiClientBuilder {
        OpenSeaApiClientBuilder::new()
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Website host URL.
    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    /// Base URL all API paths are appended to.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Change the page size used by list endpoints. Zero is ignored.
    pub fn set_page_size(&mut self, page_size: u32) {
        if page_size > 0 {
            self.page_size = page_size;
        }
    }

    /// Replace the debug logging hook.
    pub fn set_logger<F>(&mut self, logger: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger = Arc::new(logger);
    }

    /// Check whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    // =========================================================================
    // Orderbook endpoints
    // =========================================================================

    /// Send a signed order to the orderbook, retrying twice on transient
    /// failures.
    ///
    /// Fails with [`ApiError::Validation`] when the service rejects the order.
    pub async fn post_order(&self, order: &OrderJson) -> ApiResult<Order> {
        self.post_order_with_retries(order, DEFAULT_POST_ORDER_RETRIES)
            .await
    }

    /// Send a signed order, retrying up to `retries` times when the service
    /// is unavailable.
    ///
    /// The service has no idempotency key, so a retried post may be stored
    /// twice if the first attempt reached it.
    pub async fn post_order_with_retries(&self, order: &OrderJson, retries: u32) -> ApiResult<Order> {
        let path = format!("{}/orders/post/", orderbook_path());
        let path = path.as_str();

        self.with_retries(retries, move || async move {
            let response = self.post(path, Some(order), RequestOptions::default()).await?;
            Self::decode::<Order>(response).await
        })
        .await
    }

    /// Get the first order matching `query`, or `None` if there is none.
    pub async fn get_order(&self, query: &OrderQuery) -> ApiResult<Option<Order>> {
        let mut pairs = query::to_query_pairs(query)?;
        query::insert_default(&mut pairs, "limit", 1);

        let path = format!("{}/orders", orderbook_path());
        let response = match self.get_pairs(&path, pairs).await {
            Ok(response) => response,
            Err(ApiError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        let page: OrdersPage = Self::decode(response).await?;
        Ok(page.orders.into_iter().next())
    }

    /// Get a page of orders and the total number of matches.
    ///
    /// `page` starts at 1; explicit `limit`/`offset` on the query win.
    pub async fn get_orders(&self, query: &OrderQuery, page: u32) -> ApiResult<OrdersPage> {
        let pairs = self.paged_pairs(query, page)?;
        let path = format!("{}/orders", orderbook_path());
        let response = self.get_pairs(&path, pairs).await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Asset endpoints
    // =========================================================================

    /// Fetch a single asset, or `None` if the service does not know it.
    ///
    /// # Errors
    ///
    /// `token_address` must be `0x` followed by 40 hex digits and
    /// `token_id` must be non-empty; otherwise this fails with
    /// [`ApiError::InvalidParameter`] without contacting the service.
    /// Whether the contract or token exists is left to the service.
    pub async fn get_asset(&self, token_address: &str, token_id: &str) -> ApiResult<Option<Asset>> {
        self.get_asset_with_retries(token_address, token_id, DEFAULT_GET_ASSET_RETRIES)
            .await
    }

    /// Fetch a single asset, retrying up to `retries` times when the service
    /// is unavailable.
    ///
    /// Input checks are the same as [`get_asset`](Self::get_asset).
    pub async fn get_asset_with_retries(
        &self,
        token_address: &str,
        token_id: &str,
        retries: u32,
    ) -> ApiResult<Option<Asset>> {
        Self::validate_address(token_address, "token_address")?;
        if token_id.is_empty() {
            return Err(ApiError::InvalidParameter("token_id cannot be empty".to_string()));
        }

        let path = format!(
            "{}/asset/{}/{}/",
            api_path(),
            urlencoding::encode(token_address),
            urlencoding::encode(token_id)
        );
        let path = path.as_str();

        self.with_retries(retries, move || async move {
            match self.get_pairs(path, Vec::new()).await {
                Ok(response) => Self::decode::<Option<Asset>>(response).await,
                Err(ApiError::NotFound(_)) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
    }

    /// Fetch a page of assets and the service's estimate of the total.
    pub async fn get_assets(&self, query: &AssetQuery, page: u32) -> ApiResult<AssetsPage> {
        let pairs = self.paged_pairs(query, page)?;
        let path = format!("{}/assets/", api_path());
        let response = self.get_pairs(&path, pairs).await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Token endpoints
    // =========================================================================

    /// Fetch fungible tokens matching `query`, retrying once on transient
    /// failures.
    pub async fn get_tokens(&self, query: &TokenQuery, page: u32) -> ApiResult<TokensPage> {
        self.get_tokens_with_retries(query, page, DEFAULT_GET_TOKENS_RETRIES)
            .await
    }

    /// Fetch fungible tokens, retrying up to `retries` times when the
    /// service is unavailable.
    pub async fn get_tokens_with_retries(
        &self,
        query: &TokenQuery,
        page: u32,
        retries: u32,
    ) -> ApiResult<TokensPage> {
        let pairs = self.paged_pairs(query, page)?;
        let pairs = &pairs;
        let path = format!("{}/tokens/", api_path());
        let path = path.as_str();

        self.with_retries(retries, move || async move {
            let response = self.get_pairs(path, pairs.clone()).await?;
            let tokens: Vec<FungibleToken> = Self::decode(response).await?;
            Ok(TokensPage { tokens })
        })
        .await
    }

    // =========================================================================
    // Bundle endpoints
    // =========================================================================

    /// Fetch a bundle by slug, or `None` if not found.
    pub async fn get_bundle(&self, slug: &str) -> ApiResult<Option<AssetBundle>> {
        if slug.is_empty() {
            return Err(ApiError::InvalidParameter("slug cannot be empty".to_string()));
        }

        let path = format!("{}/bundle/{}/", api_path(), urlencoding::encode(slug));
        match self.get_pairs(&path, Vec::new()).await {
            Ok(response) => Self::decode::<Option<AssetBundle>>(response).await,
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fetch a page of bundles and the service's estimate of the total.
    pub async fn get_bundles(&self, query: &BundleQuery, page: u32) -> ApiResult<BundlesPage> {
        let pairs = self.paged_pairs(query, page)?;
        let path = format!("{}/bundles/", api_path());
        let response = self.get_pairs(&path, pairs).await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Low-level requests
    // =========================================================================

    /// GET `api_path` with `query` encoded as the query string.
    ///
    /// Returns the raw response on 2xx; other statuses become errors.
    pub async fn get<Q: Serialize + ?Sized>(&self, api_path: &str, query: &Q) -> ApiResult<Response> {
        let pairs = query::to_query_pairs(query)?;
        self.get_pairs(api_path, pairs).await
    }

    /// POST `body` as JSON to `api_path`.
    ///
    /// If `opts` already carries a body it is sent verbatim and `body` is
    /// ignored.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        api_path: &str,
        body: Option<&B>,
        opts: RequestOptions,
    ) -> ApiResult<Response> {
        let opts = Self::with_json_body(body, opts)?;
        self.fetch(Method::POST, api_path, opts).await
    }

    /// PUT `body` as JSON to `api_path`.
    ///
    /// If `opts` already carries a body it is sent verbatim and `body` is
    /// ignored.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        api_path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> ApiResult<Response> {
        let opts = Self::with_json_body(Some(body), opts)?;
        self.fetch(Method::PUT, api_path, opts).await
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn with_json_body<B: Serialize + ?Sized>(
        body: Option<&B>,
        mut opts: RequestOptions,
    ) -> ApiResult<RequestOptions> {
        if opts.body.is_none() {
            if let Some(body) = body {
                let json = serde_json::to_string(body).map_err(|e| {
                    ApiError::InvalidParameter(format!("Failed to serialize request body: {}", e))
                })?;
                opts.body = Some(json);
            }
        }
        Ok(opts)
    }

    fn paged_pairs<Q: Serialize + ?Sized>(&self, query: &Q, page: u32) -> ApiResult<QueryPairs> {
        let mut pairs = query::to_query_pairs(query)?;
        query::apply_pagination(&mut pairs, page, self.page_size);
        Ok(pairs)
    }

    async fn get_pairs(&self, api_path: &str, pairs: QueryPairs) -> ApiResult<Response> {
        let path = if pairs.is_empty() {
            api_path.to_string()
        } else {
            format!("{}?{}", api_path, query::encode(&pairs)?)
        };
        self.fetch(Method::GET, &path, RequestOptions::default()).await
    }

    /// Perform one request: attach the API key, log, send, classify.
    async fn fetch(&self, method: Method, api_path: &str, opts: RequestOptions) -> ApiResult<Response> {
        let url = format!("{}{}", self.api_base_url, api_path);
        let mut request = self.http_client.request(method.clone(), &url);

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.as_str());
        }
        for (name, value) in &opts.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = opts.body.clone() {
            if !opts.has_header(CONTENT_TYPE.as_str()) {
                request = request.header(CONTENT_TYPE, "application/json");
            }
            request = request.body(body);
        }

        (self.logger)(&format!("Sending request: {} {}", method, url));
        tracing::debug!(method = %method, url = %url, "Sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                (self.logger)(&format!("Request failed: {}", e));
                tracing::debug!(method = %method, url = %url, error = %e, "Request failed");
                return Err(ApiError::Http(e));
            }
        };

        self.handle_api_response(response).await
    }

    /// Pass 2xx responses through; turn everything else into an [`ApiError`]
    /// carrying the service's message.
    async fn handle_api_response(&self, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            (self.logger)(&format!("Got success: {}", status.as_u16()));
            tracing::debug!(status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let error_response = match response.text().await {
            Ok(text) => ErrorResponse::from_body(&text),
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                ErrorResponse::from_text(format!("HTTP {} (body unreadable: {})", status, e))
            }
        };

        (self.logger)(&format!(
            "Got error {}: {}",
            status.as_u16(),
            error_response.raw.as_deref().unwrap_or("")
        ));
        tracing::debug!(status = status.as_u16(), "API returned error status");

        Err(Self::map_status_error(status, &error_response))
    }

    /// Map HTTP status code to ApiError.
    ///
    /// Any other 4xx carrying a JSON error body is a rejection of the
    /// request itself and maps to [`ApiError::Validation`].
    fn map_status_error(status: StatusCode, response: &ErrorResponse) -> ApiError {
        let message = response.get_message();
        match status {
            StatusCode::BAD_REQUEST => ApiError::Validation(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized {
                status: status.as_u16(),
                message,
            },
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(message),
            _ if status.is_client_error() && response.structured => ApiError::Validation(message),
            _ if status.is_server_error() => ApiError::ServerError {
                status: status.as_u16(),
                message,
            },
            _ => ApiError::UnexpectedStatus(status.as_u16(), message),
        }
    }

    /// Run `operation`, repeating it up to `retries` more times while it
    /// fails with a retryable error.
    async fn with_retries<T, F, Fut>(&self, retries: u32, mut operation: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < retries => {
                    attempt += 1;
                    tracing::debug!(
                        attempt,
                        max_retries = retries,
                        delay_ms = self.retry_delay.as_millis() as u64,
                        error = %e,
                        "Retrying request after transient error"
                    );
                    (self.logger)(&format!("Retrying ({}/{}) after error: {}", attempt, retries, e));
                    if !self.retry_delay.is_zero() {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize response: {}", e)))
    }

    /// Validate a 0x-prefixed 20-byte hex address.
    fn validate_address(value: &str, field_name: &str) -> ApiResult<()> {
        let hex_part = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .ok_or_else(|| ApiError::InvalidParameter(format!("{} must start with 0x", field_name)))?;
        let bytes = hex::decode(hex_part)
            .map_err(|_| ApiError::InvalidParameter(format!("{} is not valid hex", field_name)))?;
        if bytes.len() != 20 {
            return Err(ApiError::InvalidParameter(format!(
                "{} must be 20 bytes, got {}",
                field_name,
                bytes.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{API_BASE_MAINNET, API_BASE_RINKEBY, SITE_HOST_MAINNET, SITE_HOST_RINKEBY};
    use std::sync::Mutex;

    #[test]
    fn test_client_defaults() {
        let client = OpenSeaApiClient::new(ApiConfig::default()).unwrap();
        assert_eq!(client.network(), Network::Main);
        assert_eq!(client.api_base_url(), API_BASE_MAINNET);
        assert_eq!(client.host_url(), SITE_HOST_MAINNET);
        assert_eq!(client.page_size(), DEFAULT_PAGE_SIZE);
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_network_selector() {
        let client = OpenSeaApiClient::builder()
            .network(Network::Rinkeby)
            .build()
            .unwrap();
        assert_eq!(client.api_base_url(), API_BASE_RINKEBY);
        assert_eq!(client.host_url(), SITE_HOST_RINKEBY);
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let client = OpenSeaApiClient::new(ApiConfig {
            network: Network::Rinkeby,
            api_key: None,
            api_base_url: Some("http://localhost:8080/".to_string()),
        })
        .unwrap();

        // Trailing slash is removed
        assert_eq!(client.api_base_url(), "http://localhost:8080");
        assert_eq!(client.host_url(), SITE_HOST_RINKEBY);
    }

    #[test]
    fn test_empty_api_key_is_absent() {
        let client = OpenSeaApiClient::builder().api_key("").build().unwrap();
        assert!(!client.has_api_key());

        let client = OpenSeaApiClient::builder().api_key("secret").build().unwrap();
        assert!(client.has_api_key());
        assert!(!format!("{:?}", client).contains("secret"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = OpenSeaApiClient::builder().page_size(0).build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_set_page_size_and_logger() {
        let mut client = OpenSeaApiClient::builder().page_size(50).build().unwrap();
        assert_eq!(client.page_size(), 50);
        client.set_page_size(10);
        assert_eq!(client.page_size(), 10);
        client.set_page_size(0);
        assert_eq!(client.page_size(), 10);

        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        client.set_logger(move |line| sink.lock().unwrap().push(line.to_string()));
        (client.logger)("hello");
        assert_eq!(lines.lock().unwrap().as_slice(), ["hello".to_string()]);
    }

    #[test]
    fn test_invalid_header_rejected() {
        let result = OpenSeaApiClient::builder().header("bad header", "x").build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_validate_address() {
        let ok = "0x06012c8cf97bead5deae237070f9587f8e7a266d";
        assert!(OpenSeaApiClient::validate_address(ok, "token_address").is_ok());
        assert!(OpenSeaApiClient::validate_address("06012c8cf97bead5deae237070f9587f8e7a266d", "a").is_err());
        assert!(OpenSeaApiClient::validate_address("0x1234", "a").is_err());
        assert!(OpenSeaApiClient::validate_address("0xzz12c8cf97bead5deae237070f9587f8e7a266d", "a").is_err());
    }

    #[test]
    fn test_map_status_error() {
        let body = ErrorResponse::from_body(r#"{"message": "nope"}"#);
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::BAD_REQUEST, &body),
            ApiError::Validation(m) if m == "nope"
        ));
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::FORBIDDEN, &body),
            ApiError::Unauthorized { status: 403, .. }
        ));
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::NOT_FOUND, &body),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::SERVICE_UNAVAILABLE, &body),
            ApiError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::UNPROCESSABLE_ENTITY, &body),
            ApiError::Validation(m) if m == "nope"
        ));
    }

    #[test]
    fn test_map_status_error_plain_text_client_error() {
        let body = ErrorResponse::from_body("conflict");
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::CONFLICT, &body),
            ApiError::UnexpectedStatus(409, m) if m == "conflict"
        ));
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::MOVED_PERMANENTLY, &body),
            ApiError::UnexpectedStatus(301, _)
        ));

        let json_redirect = ErrorResponse::from_body(r#"{"message": "moved"}"#);
        assert!(matches!(
            OpenSeaApiClient::map_status_error(StatusCode::MOVED_PERMANENTLY, &json_redirect),
            ApiError::UnexpectedStatus(301, _)
        ));
    }

    #[test]
    fn test_json_body_respects_prebuilt_body() {
        let opts = OpenSeaApiClient::with_json_body(
            Some(&serde_json::json!({"a": 1})),
            RequestOptions::new().with_body("raw"),
        )
        .unwrap();
        assert_eq!(opts.body.as_deref(), Some("raw"));

        let opts =
            OpenSeaApiClient::with_json_body(Some(&serde_json::json!({"a": 1})), RequestOptions::new())
                .unwrap();
        assert_eq!(opts.body.as_deref(), Some(r#"{"a":1}"#));
    }
}
