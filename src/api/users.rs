use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the user endpoints
pub struct Users<'a> {
    pub(crate) client: &'a Client,
}

impl Users<'_> {
    /// Retrieves the users of the account
    ///
    /// # Arguments
    /// * `opts` - Optional query parameters
    pub async fn get(&self, opts: Option<Value>) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get("/users").with_query(opts))
            .await
    }

    /// Updates a user
    ///
    /// # Arguments
    /// * `id` - Identifier of the user
    /// * `user` - Fields to update
    pub async fn patch(&self, id: impl Display, user: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::patch(format!("/users/{id}")).with_body(user))
            .await
    }
}
