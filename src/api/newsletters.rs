use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the newsletter endpoints
pub struct Newsletters<'a> {
    pub(crate) client: &'a Client,
}

impl Newsletters<'_> {
    /// Retrieves a newsletter
    ///
    /// # Arguments
    /// * `id` - Identifier of the newsletter
    /// * `opts` - Optional query parameters
    pub async fn get(&self, id: impl Display, opts: Option<Value>) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get(format!("/newsletters/{id}")).with_query(opts))
            .await
    }

    /// Updates a newsletter
    ///
    /// # Arguments
    /// * `id` - Identifier of the newsletter
    /// * `newsletter` - Fields to update
    pub async fn patch(&self, id: impl Display, newsletter: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::patch(format!("/newsletters/{id}")).with_body(newsletter))
            .await
    }

    /// Sends a newsletter
    ///
    /// # Arguments
    /// * `id` - Identifier of the newsletter
    /// * `newsletter` - Send configuration
    pub async fn send(&self, id: impl Display, newsletter: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!("/newsletters/{id}/send")).with_body(newsletter))
            .await
    }
}
