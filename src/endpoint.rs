//! Fixed-path endpoints and specialization by delegation.
//!
//! An [`Endpoint`] binds a client to one resource path and mints a fresh
//! builder per chain. Specialized endpoint types are plain structs owning
//! an `Endpoint`; implementing `AsRef<Endpoint>` gives them the whole
//! builder surface through the [`ResourceOps`] blanket impl. An inherent
//! method on the specialized type shadows the trait method of the same
//! name at the call site, while the original stays reachable as
//! `ResourceOps::list(&specialized)`.

use {
    crate::{
        builder::RequestBuilder,
        client::RestClient,
        error::ApiResult,
        resource::Resource,
        transport::Method,
        url::normalize_path,
    },
    async_trait::async_trait,
    serde::Serialize,
    serde_json::Value,
};

/// A client handle bound to a fixed resource base path.
#[derive(Debug, Clone)]
pub struct Endpoint {
    client: RestClient,
    base: String,
}

impl Endpoint {
    pub fn new(client: &RestClient, path: impl AsRef<str>) -> Self {
        Self {
            client: client.clone(),
            base: normalize_path(path.as_ref()),
        }
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }

    pub fn base_path(&self) -> &str {
        &self.base
    }

    /// A fresh builder seeded at this endpoint's base path.
    pub fn query(&self) -> RequestBuilder {
        self.client.builder_at(self.base.clone())
    }
}

impl AsRef<Endpoint> for Endpoint {
    fn as_ref(&self) -> &Endpoint {
        self
    }
}

/// The unspecialized builder surface, exposed on anything that can borrow
/// an [`Endpoint`].
#[async_trait]
pub trait ResourceOps: AsRef<Endpoint> + Sync {
    fn query(&self) -> RequestBuilder {
        self.as_ref().query()
    }

    async fn fetch(&self, id: &str) -> ApiResult<Resource> {
        self.query().fetch_id(id).await
    }

    async fn list(&self) -> ApiResult<Vec<Resource>> {
        self.query().list().await
    }

    async fn first(&self) -> ApiResult<Option<Resource>> {
        self.query().first().await
    }

    async fn only(&self) -> ApiResult<Resource> {
        self.query().only().await
    }

    async fn create<T: Serialize + Sync + ?Sized>(&self, object: &T) -> ApiResult<Value> {
        self.query().create(object).await
    }

    async fn update<T: Serialize + Sync + ?Sized>(&self, object: &T) -> ApiResult<Value> {
        self.query().update(object).await
    }

    async fn patch<T: Serialize + Sync + ?Sized>(&self, object: &T) -> ApiResult<Value> {
        self.query().patch(object).await
    }

    async fn destroy(&self) -> ApiResult<Value> {
        self.query().destroy().await
    }

    async fn action(&self, method: Method, segment: &str) -> ApiResult<Value> {
        self.query().action(method, segment).await
    }
}

#[async_trait]
impl<T: AsRef<Endpoint> + Sync> ResourceOps for T {}
