//! Scripted fetch doubles, so pagination and pipeline logic can be exercised
//! without a network.

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::PageSource;
use crate::error::{Result, WikiError};
use crate::params::Params;

/// Replays a fixed sequence of responses in order; `Err` entries simulate
/// failed pages. Every request is recorded for assertion.
pub struct ScriptedSource {
    responses: RefCell<std::vec::IntoIter<Result<Value>>>,
    pub requests: RefCell<Vec<(String, Params)>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<Value>>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl PageSource for ScriptedSource {
    async fn fetch<T: DeserializeOwned>(&self, base_url: &str, params: &Params) -> Result<T> {
        self.requests
            .borrow_mut()
            .push((base_url.to_string(), params.clone()));

        let value = self
            .responses
            .borrow_mut()
            .next()
            .unwrap_or_else(|| Err(WikiError::Network("script exhausted".to_string())))?;

        Ok(serde_json::from_value(value)?)
    }
}
