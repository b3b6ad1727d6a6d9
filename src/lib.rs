//! Fluent resource-oriented REST client.
//!
//! Chained calls accumulate request state (path, query parameters,
//! where/order/sort/limit clauses, body); each terminal operation
//! dispatches exactly one HTTP request through an injected [`Transport`],
//! resets the builder, and wraps the JSON response into [`Resource`]
//! instances.
//!
//! ```rust,no_run
//! use restide::{Config, RestClient};
//! use serde_json::json;
//!
//! # async fn demo() -> restide::ApiResult<()> {
//! let mut config = Config::new("https://example.com/api");
//! config.default_header("x-api-key", "secret");
//! let client = RestClient::http_with_config(config)?;
//!
//! // one GET /items?q={"where":{"active":true},"limit":10}
//! let items = client
//!     .builder("/items")
//!     .filter(json!({"active": true}))
//!     .limit(10)
//!     .list()
//!     .await?;
//!
//! // instances carry their path; DELETE /items/<id>
//! if let Some(item) = items.into_iter().next() {
//!     item.destroy().await?;
//! }
//! # Ok(()) }
//! ```

mod builder;
mod client;
mod config;
mod endpoint;
mod error;
mod query;
mod resource;
mod transport;
mod url;

pub use {
    builder::RequestBuilder,
    client::RestClient,
    config::{configure, Config, DEFAULT_BASE_URL},
    endpoint::{Endpoint, ResourceOps},
    error::{ApiResult, Error},
    query::{QueryClause, QUERY_PARAM, TRANSFORM_PARAM},
    resource::Resource,
    transport::{HttpTransport, Method, Transport, TransportRequest},
};
