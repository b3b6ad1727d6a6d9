//! JSON-backed resource instances.

use {
    crate::{
        builder::RequestBuilder,
        client::RestClient,
        error::{ApiResult, Error},
        transport::Method,
    },
    serde::de::DeserializeOwned,
    serde_json::Value,
    std::fmt,
};

/// A single resource instance produced by wrapping a JSON response.
///
/// Carries the client handle and the base path it was fetched under, so
/// instance-level operations (`save`, `destroy`, actions) can dispatch
/// without re-specifying the path. The identifier lives in the wrapped
/// JSON under `id`; an id that is itself a path (leading `/`) addresses
/// the resource verbatim, any other id is joined under the base path.
#[derive(Clone)]
pub struct Resource {
    client: RestClient,
    base: String,
    data: Value,
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("base", &self.base)
            .field("data", &self.data)
            .finish()
    }
}

impl Resource {
    pub(crate) fn wrap(client: RestClient, base: String, data: Value) -> Self {
        Self { client, base, data }
    }

    /// The server-assigned identifier, if present.
    pub fn id(&self) -> Option<String> {
        match self.data.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Value {
        &mut self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Deserializes the wrapped JSON into a typed model.
    pub fn parse<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// The path addressing this instance, derived from its identifier.
    pub fn path(&self) -> ApiResult<String> {
        let id = self.id().ok_or(Error::MissingIdentifier)?;
        if id.starts_with('/') {
            Ok(id)
        } else {
            Ok(format!("{}/{}", self.base, id))
        }
    }

    fn builder(&self) -> ApiResult<RequestBuilder> {
        self.client.builder_for(self)
    }

    /// Persists the instance: PUT to the id path when an identifier is
    /// present, otherwise POST to the base path, copying the
    /// server-assigned id back onto the instance.
    pub async fn save(&mut self) -> ApiResult<Value> {
        if self.id().is_some() {
            let response = self.builder()?.update(&self.data).await?;
            Ok(response)
        } else {
            let created = self
                .client
                .builder_at(self.base.clone())
                .create(&self.data)
                .await?;

            if let (Some(object), Some(id)) = (self.data.as_object_mut(), created.get("id")) {
                object.insert("id".to_string(), id.clone());
            }

            Ok(created)
        }
    }

    /// DELETE the path derived from the identifier.
    pub async fn destroy(&self) -> ApiResult<Value> {
        self.builder()?.destroy().await
    }

    /// Dispatches a non-CRUD action on this instance's path.
    pub async fn action(&self, method: Method, segment: &str) -> ApiResult<Value> {
        self.builder()?.action(method, segment).await
    }

    pub async fn get(&self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Get, segment).await
    }

    pub async fn put(&self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Put, segment).await
    }

    pub async fn post(&self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Post, segment).await
    }

    pub async fn patch_action(&self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Patch, segment).await
    }

    pub async fn delete_action(&self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Delete, segment).await
    }
}
