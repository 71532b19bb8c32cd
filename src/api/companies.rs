use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the company endpoints
pub struct Companies<'a> {
    pub(crate) client: &'a Client,
}

impl Companies<'_> {
    /// Retrieves the companies of the account
    pub async fn get(&self) -> ApiResult<Value> {
        self.client.send(ApiRequest::get("/companies")).await
    }

    /// Updates a company
    ///
    /// The API accepts company updates as POST on the id path.
    ///
    /// # Arguments
    /// * `id` - Identifier of the company
    /// * `company` - Fields to update
    pub async fn patch(&self, id: impl Display, company: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!("/companies/{id}")).with_body(company))
            .await
    }
}
