//! The fluent request builder.
//!
//! A builder accumulates path segments, query parameters, filter clauses
//! and a staged body across chained calls, then a terminal operation
//! snapshots that state into one [`TransportRequest`], resets the builder
//! back to its seeded base path, and awaits the transport.
//!
//! The snapshot-and-reset happens synchronously before the await point, so
//! a subsequent chain on the same builder always starts clean. A builder
//! is not meant to be shared across concurrent chains; give each logical
//! request sequence its own builder.

use {
    crate::{
        client::RestClient,
        error::{ApiResult, Error},
        query::{QueryClause, QUERY_PARAM, TRANSFORM_PARAM},
        resource::Resource,
        transport::{Method, TransportRequest},
        url::UrlBuilder,
    },
    serde::Serialize,
    serde_json::Value,
    std::fmt::Display,
    tracing::{debug, trace},
};

/// Mutable request state owned by exactly one builder, cleared on every
/// dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PendingRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PendingRequest {
    fn seeded(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Self::default()
        }
    }
}

/// Fluent builder bound to a base resource path.
///
/// ```rust,no_run
/// # async fn demo(client: restide::RestClient) -> restide::ApiResult<()> {
/// use serde_json::json;
///
/// let mut items = client.builder("/items");
/// let active = items
///     .filter(json!({"active": true}))
///     .order("name")
///     .limit(10)
///     .list()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: RestClient,
    base_path: String,
    request: PendingRequest,
    query: QueryClause,
}

impl RequestBuilder {
    pub(crate) fn new(client: RestClient, base_path: String) -> Self {
        let request = PendingRequest::seeded(&base_path);
        Self {
            client,
            base_path,
            request,
            query: QueryClause::default(),
        }
    }

    /// The path the next dispatch would address.
    pub fn current_path(&self) -> &str {
        &self.request.path
    }

    // chainable configuration

    /// Prefixes the current path with a parent resource path.
    pub fn from(&mut self, parent: &str) -> &mut Self {
        self.request.path = format!("{}{}", crate::url::normalize_path(parent), self.request.path);
        self
    }

    /// Like [`from`](Self::from), with the parent path derived from a
    /// resource's identifier.
    pub fn from_parent(&mut self, parent: &Resource) -> ApiResult<&mut Self> {
        let parent_path = parent.path()?;
        Ok(self.from(&parent_path))
    }

    /// Sets the `where` clause.
    pub fn filter(&mut self, clause: impl Into<Value>) -> &mut Self {
        self.query.filter = Some(clause.into());
        self
    }

    /// Sets the `where` clause to an ordered list of conditions.
    pub fn filters<I>(&mut self, clauses: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.query.filter = Some(Value::Array(
            clauses.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn order(&mut self, order: impl Into<Value>) -> &mut Self {
        self.query.order = Some(order.into());
        self
    }

    pub fn sort(&mut self, sort: impl Into<Value>) -> &mut Self {
        self.query.sort = Some(sort.into());
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.query.limit = Some(limit);
        self
    }

    /// Sets the server-side transform directive (`t` parameter).
    pub fn transform(&mut self, transform: &str) -> &mut Self {
        self.param(TRANSFORM_PARAM, transform)
    }

    /// Adds an ad-hoc query parameter.
    pub fn param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.request.params.push((key.into(), value.into()));
        self
    }

    /// Merges a set of ad-hoc query parameters.
    pub fn params<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request
            .params
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Stages a JSON body for a subsequent action dispatch.
    pub fn json<T: Serialize + ?Sized>(&mut self, body: &T) -> ApiResult<&mut Self> {
        self.request.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    // dispatch

    fn reset(&mut self) -> PendingRequest {
        self.query = QueryClause::default();
        std::mem::replace(&mut self.request, PendingRequest::seeded(&self.base_path))
    }

    /// Serializes the accumulated query clause into the `q` parameter.
    fn setup_query(&mut self) -> ApiResult<()> {
        if let Some(encoded) = self.query.to_param()? {
            self.request.params.push((QUERY_PARAM.to_string(), encoded));
        }
        Ok(())
    }

    /// Snapshots the accumulated state into one transport request and
    /// resets the builder. Synchronous; runs before any await point.
    fn compose(&mut self, method: Method) -> ApiResult<TransportRequest> {
        let pending = self.reset();

        let config = self.client.snapshot_config();
        let url = UrlBuilder::new(config.base())
            .path(&pending.path)
            .queries(pending.params)
            .queries(config.params().iter().cloned())
            .build();

        Ok(TransportRequest {
            method,
            url,
            headers: config.headers().to_vec(),
            body: pending.body,
        })
    }

    async fn dispatch(&mut self, method: Method) -> ApiResult<Value> {
        let request = self.compose(method)?;
        debug!("dispatching {} {}", request.method, request.url);
        trace!(body = ?request.body, "request body");
        self.client.transport().send(request).await
    }

    fn wrap(&self, object: Value) -> ApiResult<Resource> {
        if !object.is_object() {
            return Err(Error::UnexpectedShape(format!(
                "expected a JSON object, got: {}",
                object
            )));
        }
        Ok(Resource::wrap(
            self.client.clone(),
            self.base_path.clone(),
            object,
        ))
    }

    fn wrap_all(&self, objects: Value) -> ApiResult<Vec<Resource>> {
        match objects {
            Value::Array(items) => items.into_iter().map(|o| self.wrap(o)).collect(),
            other => Err(Error::UnexpectedShape(format!(
                "expected a JSON array, got: {}",
                other
            ))),
        }
    }

    // terminal operations

    /// GET the accumulated path and wrap the single JSON result.
    pub async fn fetch(&mut self) -> ApiResult<Resource> {
        let object = self.dispatch(Method::Get).await?;
        self.wrap(object)
    }

    /// GET with the given id appended to the path.
    pub async fn fetch_id(&mut self, id: impl Display) -> ApiResult<Resource> {
        self.request.path = format!("{}/{}", self.request.path, id);
        self.fetch().await
    }

    /// GET the collection, query clause serialized under `q`. The other
    /// terminals ignore an accumulated clause; the reset discards it.
    pub async fn list(&mut self) -> ApiResult<Vec<Resource>> {
        self.setup_query()?;
        let objects = self.dispatch(Method::Get).await?;
        self.wrap_all(objects)
    }

    /// [`list`](Self::list) with the limit forced to 1; resolves to the
    /// first element or `None`, never failing on an empty result.
    pub async fn first(&mut self) -> ApiResult<Option<Resource>> {
        self.limit(1);
        let mut items = self.list().await?;
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(items.remove(0)))
        }
    }

    /// [`list`](Self::list) without a limit override; fails with
    /// [`Error::Cardinality`] unless exactly one result comes back.
    pub async fn only(&mut self) -> ApiResult<Resource> {
        let mut items = self.list().await?;
        if items.len() != 1 {
            return Err(Error::Cardinality { got: items.len() });
        }
        Ok(items.remove(0))
    }

    /// POST the serialized object to the accumulated path.
    pub async fn create<T: Serialize + ?Sized>(&mut self, object: &T) -> ApiResult<Value> {
        self.json(object)?;
        self.dispatch(Method::Post).await
    }

    /// PUT the serialized object to the accumulated path.
    pub async fn update<T: Serialize + ?Sized>(&mut self, object: &T) -> ApiResult<Value> {
        self.json(object)?;
        self.dispatch(Method::Put).await
    }

    /// PATCH the serialized object to the accumulated path.
    pub async fn patch<T: Serialize + ?Sized>(&mut self, object: &T) -> ApiResult<Value> {
        self.json(object)?;
        self.dispatch(Method::Patch).await
    }

    /// DELETE the accumulated path.
    pub async fn destroy(&mut self) -> ApiResult<Value> {
        self.dispatch(Method::Delete).await
    }

    // actions

    /// Appends a path segment and dispatches with the given verb; the
    /// response JSON passes through unmodified. Dispatch resets the
    /// builder, so a second action starts again from the base path rather
    /// than composing with the first.
    pub async fn action(&mut self, method: Method, segment: &str) -> ApiResult<Value> {
        self.request.path = format!("{}/{}", self.request.path, segment);
        self.dispatch(method).await
    }

    pub async fn get(&mut self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Get, segment).await
    }

    pub async fn put(&mut self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Put, segment).await
    }

    pub async fn post(&mut self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Post, segment).await
    }

    pub async fn patch_action(&mut self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Patch, segment).await
    }

    pub async fn delete_action(&mut self, segment: &str) -> ApiResult<Value> {
        self.action(Method::Delete, segment).await
    }
}
