#![allow(dead_code)]

//! Shared test harness: a transport fake that records every composed
//! request and replays canned JSON responses.

use async_trait::async_trait;
use restide::{ApiResult, Config, RestClient, Transport, TransportRequest};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<TransportRequest>>,
    responses: Mutex<VecDeque<Value>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues the response returned by the next dispatch. When the queue
    /// is empty the transport answers `null`.
    pub fn respond_with(&self, value: Value) {
        self.responses.lock().unwrap().push_back(value);
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was dispatched")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, req: TransportRequest) -> ApiResult<Value> {
        self.requests.lock().unwrap().push(req);
        let canned = self.responses.lock().unwrap().pop_front();
        Ok(canned.unwrap_or(Value::Null))
    }
}

/// A client pinned to the default explicit configuration (base `/api`),
/// so tests never depend on the process-wide global.
pub fn setup() -> (Arc<RecordingTransport>, RestClient) {
    let transport = RecordingTransport::new();
    let client = RestClient::with_config(transport.clone(), Config::default());
    (transport, client)
}

/// Splits a composed URL into its path and decoded query pairs.
pub fn split_url(url: &str) -> (String, Vec<(String, String)>) {
    match url.split_once('?') {
        None => (url.to_string(), Vec::new()),
        Some((path, query)) => {
            let params = query
                .split('&')
                .map(|pair| {
                    let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                    (
                        k.to_string(),
                        urlencoding::decode(v).expect("invalid encoding").into_owned(),
                    )
                })
                .collect();
            (path.to_string(), params)
        }
    }
}

/// The decoded value of a single query parameter, if present.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, params) = split_url(url);
    params.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
