use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the group endpoints
pub struct Groups<'a> {
    pub(crate) client: &'a Client,
}

impl Groups<'_> {
    /// Creates a new group
    ///
    /// # Arguments
    /// * `group` - Group definition to create
    pub async fn post(&self, group: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post("/groups").with_body(group))
            .await
    }

    /// Deletes a group
    ///
    /// # Arguments
    /// * `id` - Identifier of the group
    pub async fn delete(&self, id: impl Display) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::delete(format!("/groups/{id}")))
            .await
    }

    /// Updates a group
    ///
    /// # Arguments
    /// * `id` - Identifier of the group
    /// * `group` - Fields to update
    pub async fn patch(&self, id: impl Display, group: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::patch(format!("/groups/{id}")).with_body(group))
            .await
    }
}
