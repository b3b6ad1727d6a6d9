//! Query clause accumulation.
//!
//! The where/order/sort/limit state accumulated across a chain is
//! serialized as a single JSON-encoded `q` parameter when any clause was
//! set. A separate `t` parameter conveys the server-side transform
//! directive.

use {
    crate::error::ApiResult,
    serde::Serialize,
    serde_json::Value,
};

/// Query parameter name carrying the JSON-encoded clause.
pub const QUERY_PARAM: &str = "q";
/// Query parameter name carrying the transform directive.
pub const TRANSFORM_PARAM: &str = "t";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryClause {
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub(crate) filter: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sort: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) limit: Option<u64>,
}

impl QueryClause {
    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.order.is_none() && self.sort.is_none() && self.limit.is_none()
    }

    /// JSON-encodes the clause for the `q` parameter, or `None` when no
    /// clause was set.
    pub fn to_param(&self) -> ApiResult<Option<String>> {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_string(self)?))
    }
}
