use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the attribute endpoints
pub struct Attributes<'a> {
    pub(crate) client: &'a Client,
}

impl Attributes<'_> {
    /// Creates a new attribute
    ///
    /// # Arguments
    /// * `attribute` - Attribute definition to create
    pub async fn post(&self, attribute: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post("/attributes").with_body(attribute))
            .await
    }

    /// Updates an existing attribute
    ///
    /// # Arguments
    /// * `id` - Identifier of the attribute
    /// * `attribute` - Fields to update
    pub async fn patch(&self, id: impl Display, attribute: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::patch(format!("/attributes/{id}")).with_body(attribute))
            .await
    }
}
