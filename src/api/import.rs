use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the import status endpoints
pub struct Import<'a> {
    pub(crate) client: &'a Client,
}

impl Import<'_> {
    /// Retrieves the status of a recipient import
    ///
    /// # Arguments
    /// * `id` - Identifier of the import job
    pub async fn info(&self, id: impl Display) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get(format!("/import/{id}/info")))
            .await
    }
}
