//! List endpoints and their nested sub-resources
//!
//! Lists are the central resource of the API; attributes, groups,
//! newsletters and recipients all hang off a list id. The nested accessors
//! mirror that hierarchy: `client.lists().groups().recipients()`.

use crate::client::Client;
use crate::error::ApiResult;
use crate::model::requests::ApiRequest;
use serde_json::Value;
use std::fmt::Display;

/// Accessor for the list endpoints
pub struct Lists<'a> {
    pub(crate) client: &'a Client,
}

impl<'a> Lists<'a> {
    /// Retrieves the lists of the account
    ///
    /// # Arguments
    /// * `opts` - Optional query parameters (filter, fields, paging)
    pub async fn get(&self, opts: Option<Value>) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get("/lists").with_query(opts))
            .await
    }

    /// Creates a new list
    ///
    /// # Arguments
    /// * `list` - List definition to create
    pub async fn post(&self, list: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post("/lists").with_body(list))
            .await
    }

    /// Deletes a list
    ///
    /// # Arguments
    /// * `id` - Identifier of the list
    pub async fn delete(&self, id: impl Display) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::delete(format!("/lists/{id}")))
            .await
    }

    /// Updates a list
    ///
    /// # Arguments
    /// * `id` - Identifier of the list
    /// * `list` - Fields to update
    pub async fn patch(&self, id: impl Display, list: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::patch(format!("/lists/{id}")).with_body(list))
            .await
    }

    /// Access to the attributes of a list
    pub fn attributes(&self) -> ListAttributes<'a> {
        ListAttributes {
            client: self.client,
        }
    }

    /// Access to the groups of a list
    pub fn groups(&self) -> ListGroups<'a> {
        ListGroups {
            client: self.client,
        }
    }

    /// Access to the newsletters of a list
    pub fn newsletters(&self) -> ListNewsletters<'a> {
        ListNewsletters {
            client: self.client,
        }
    }

    /// Access to the recipients of a list
    pub fn recipients(&self) -> ListRecipients<'a> {
        ListRecipients {
            client: self.client,
        }
    }
}

/// Accessor for the attributes of a list
pub struct ListAttributes<'a> {
    pub(crate) client: &'a Client,
}

impl ListAttributes<'_> {
    /// Retrieves the attributes of a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `opts` - Optional query parameters
    pub async fn get(&self, lid: impl Display, opts: Option<Value>) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get(format!("/lists/{lid}/attributes")).with_query(opts))
            .await
    }

    /// Removes an attribute from a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `id` - Identifier of the attribute
    pub async fn delete(&self, lid: impl Display, id: impl Display) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::delete(format!("/lists/{lid}/attributes/{id}")))
            .await
    }
}

/// Accessor for the groups of a list
pub struct ListGroups<'a> {
    pub(crate) client: &'a Client,
}

impl<'a> ListGroups<'a> {
    /// Retrieves the groups of a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `opts` - Optional query parameters
    pub async fn get(&self, lid: impl Display, opts: Option<Value>) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get(format!("/lists/{lid}/groups")).with_query(opts))
            .await
    }

    /// Access to the recipients of a group
    pub fn recipients(&self) -> GroupRecipients<'a> {
        GroupRecipients {
            client: self.client,
        }
    }
}

/// Accessor for the recipients of a group
pub struct GroupRecipients<'a> {
    pub(crate) client: &'a Client,
}

impl GroupRecipients<'_> {
    /// Retrieves the recipients of a group
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `gid` - Identifier of the group
    /// * `opts` - Optional query parameters
    pub async fn get(
        &self,
        lid: impl Display,
        gid: impl Display,
        opts: Option<Value>,
    ) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get(format!("/lists/{lid}/groups/{gid}/recipients")).with_query(opts))
            .await
    }

    /// Adds a single recipient to a group
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `gid` - Identifier of the group
    /// * `id` - Identifier of the recipient
    pub async fn post(
        &self,
        lid: impl Display,
        gid: impl Display,
        id: impl Display,
    ) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!(
                "/lists/{lid}/groups/{gid}/recipients/{id}"
            )))
            .await
    }

    /// Adds multiple recipients to a group
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `gid` - Identifier of the group
    /// * `payload` - Selection of recipients to add
    pub async fn post_bulk(
        &self,
        lid: impl Display,
        gid: impl Display,
        payload: Value,
    ) -> ApiResult<Value> {
        self.client
            .send(
                ApiRequest::post(format!("/lists/{lid}/groups/{gid}/recipients"))
                    .with_body(payload),
            )
            .await
    }

    /// Removes a single recipient from a group
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `gid` - Identifier of the group
    /// * `id` - Identifier of the recipient
    pub async fn delete(
        &self,
        lid: impl Display,
        gid: impl Display,
        id: impl Display,
    ) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::delete(format!(
                "/lists/{lid}/groups/{gid}/recipients/{id}"
            )))
            .await
    }

    /// Removes multiple recipients from a group
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `gid` - Identifier of the group
    /// * `payload` - Selection of recipients to remove
    pub async fn delete_bulk(
        &self,
        lid: impl Display,
        gid: impl Display,
        payload: Value,
    ) -> ApiResult<Value> {
        self.client
            .send(
                ApiRequest::delete(format!("/lists/{lid}/groups/{gid}/recipients"))
                    .with_body(payload),
            )
            .await
    }
}

/// Accessor for the newsletters of a list
pub struct ListNewsletters<'a> {
    pub(crate) client: &'a Client,
}

impl ListNewsletters<'_> {
    /// Retrieves the newsletters of a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `opts` - Optional query parameters
    pub async fn get(&self, lid: impl Display, opts: Option<Value>) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get(format!("/lists/{lid}/newsletters")).with_query(opts))
            .await
    }

    /// Creates a newsletter in a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `newsletter` - Newsletter definition to create
    pub async fn post(&self, lid: impl Display, newsletter: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!("/lists/{lid}/newsletters")).with_body(newsletter))
            .await
    }

    /// Retrieves aggregated statistics of a newsletter
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `nid` - Identifier of the newsletter
    /// * `opts` - Optional query parameters
    pub async fn aggregations(
        &self,
        lid: impl Display,
        nid: impl Display,
        opts: Option<Value>,
    ) -> ApiResult<Value> {
        self.client
            .send(
                ApiRequest::get(format!("/lists/{lid}/newsletters/{nid}/aggregations"))
                    .with_query(opts),
            )
            .await
    }
}

/// Accessor for the recipients of a list
pub struct ListRecipients<'a> {
    pub(crate) client: &'a Client,
}

impl ListRecipients<'_> {
    /// Retrieves the recipients of a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `opts` - Optional query parameters
    pub async fn get(&self, lid: impl Display, opts: Option<Value>) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::get(format!("/lists/{lid}/recipients")).with_query(opts))
            .await
    }

    /// Removes a recipient from a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `id` - Identifier of the recipient
    pub async fn delete(&self, lid: impl Display, id: impl Display) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::delete(format!("/lists/{lid}/recipients/{id}")))
            .await
    }

    /// Updates a single recipient of a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `id` - Identifier of the recipient
    /// * `recipient` - Fields to update
    pub async fn patch(
        &self,
        lid: impl Display,
        id: impl Display,
        recipient: Value,
    ) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::patch(format!("/lists/{lid}/recipients/{id}")).with_body(recipient))
            .await
    }

    /// Updates multiple recipients of a list in one call
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `payload` - Selection and fields to update
    pub async fn patch_bulk(&self, lid: impl Display, payload: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::patch(format!("/lists/{lid}/recipients")).with_body(payload))
            .await
    }

    /// Initializes a recipient import into a list
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `file` - Import file descriptor
    pub async fn import_init(&self, lid: impl Display, file: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!("/lists/{lid}/recipients/import/init")).with_body(file))
            .await
    }

    /// Saves a previously initialized recipient import
    ///
    /// # Arguments
    /// * `lid` - Identifier of the list
    /// * `data` - Import configuration to save
    pub async fn import_save(&self, lid: impl Display, data: Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!("/lists/{lid}/recipients/import/save")).with_body(data))
            .await
    }
}
