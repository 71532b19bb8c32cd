use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the form submission endpoints
pub struct Forms<'a> {
    pub(crate) client: &'a Client,
}

impl Forms<'_> {
    /// Submits a recipient through a double-opt-in form
    ///
    /// # Arguments
    /// * `code` - Code of the form to submit through
    /// * `recipient` - Recipient payload to submit
    pub async fn submit(&self, code: impl Display, recipient: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!("/forms/submit/{code}")).with_body(recipient))
            .await
    }
}
