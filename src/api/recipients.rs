use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;

/// Accessor for the recipient endpoints
pub struct Recipients<'a> {
    pub(crate) client: &'a Client,
}

impl Recipients<'_> {
    /// Creates one or more recipients
    ///
    /// # Arguments
    /// * `recipients` - Recipient payload to create
    pub async fn post(&self, recipients: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post("/recipients").with_body(recipients))
            .await
    }
}
