//! Client entry points.

use {
    crate::{
        builder::RequestBuilder,
        config::{self, Config},
        endpoint::Endpoint,
        error::ApiResult,
        resource::Resource,
        transport::{HttpTransport, Transport},
        url::normalize_path,
    },
    serde_json::Value,
    std::{fmt, sync::Arc},
};

/// Handle owning the injected transport and (optionally) an explicit
/// configuration. Cheap to clone; every [`RequestBuilder`] and every
/// wrapped [`Resource`] carries one.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
    config: Option<Arc<Config>>,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Creates a client around an injected transport, reading the
    /// process-wide configuration at every request composition.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config: None,
        }
    }

    /// Creates a client with an explicit configuration, never touching the
    /// process-wide one. Preferred over [`configure`](crate::configure)
    /// when the hidden global coupling is unwanted.
    pub fn with_config(transport: Arc<dyn Transport>, config: Config) -> Self {
        Self {
            transport,
            config: Some(Arc::new(config)),
        }
    }

    /// Convenience constructor using the default reqwest-backed transport.
    pub fn http() -> ApiResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new()?)))
    }

    /// Default transport plus an explicit configuration.
    pub fn http_with_config(config: Config) -> ApiResult<Self> {
        Ok(Self::with_config(Arc::new(HttpTransport::new()?), config))
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Configuration snapshot taken at request composition time.
    pub(crate) fn snapshot_config(&self) -> Config {
        match &self.config {
            Some(config) => (**config).clone(),
            None => config::global(),
        }
    }

    /// An endpoint bound to a fixed resource path, e.g. `/items`.
    pub fn resource(&self, path: impl AsRef<str>) -> Endpoint {
        Endpoint::new(self, path)
    }

    /// A fresh request builder seeded with the given resource path.
    pub fn builder(&self, path: impl AsRef<str>) -> RequestBuilder {
        self.builder_at(normalize_path(path.as_ref()))
    }

    /// A builder seeded with an already normalized path.
    pub(crate) fn builder_at(&self, path: String) -> RequestBuilder {
        RequestBuilder::new(self.clone(), path)
    }

    /// A builder bound to the path derived from the resource's identifier.
    ///
    /// Fails with [`Error::MissingIdentifier`](crate::Error::MissingIdentifier)
    /// when the resource has no id.
    pub fn builder_for(&self, resource: &Resource) -> ApiResult<RequestBuilder> {
        Ok(self.builder_at(resource.path()?))
    }

    /// Wraps a plain JSON object into a [`Resource`] attached to this
    /// client under the given base path.
    pub fn instance(&self, base: impl AsRef<str>, data: Value) -> Resource {
        Resource::wrap(self.clone(), normalize_path(base.as_ref()), data)
    }

    /// One-shot PUT to the path derived from the resource's identifier.
    pub async fn update(&self, resource: &Resource) -> ApiResult<Value> {
        self.builder_for(resource)?.update(resource.data()).await
    }

    /// One-shot PATCH to the path derived from the resource's identifier.
    pub async fn patch(&self, resource: &Resource) -> ApiResult<Value> {
        self.builder_for(resource)?.patch(resource.data()).await
    }

    /// One-shot DELETE to the path derived from the resource's identifier.
    pub async fn destroy(&self, resource: &Resource) -> ApiResult<Value> {
        self.builder_for(resource)?.destroy().await
    }
}
