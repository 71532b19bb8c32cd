//! Resource namespaces for the Newsletter2Go API
//!
//! Each namespace is a borrowed accessor over [`Client`] whose methods map
//! 1:1 onto HTTP endpoints, e.g. `client.lists().recipients().patch(...)`.

/// Attribute endpoints
pub mod attributes;
/// Company endpoints
pub mod companies;
/// Form submission endpoints
pub mod forms;
/// Group endpoints
pub mod groups;
/// Import status endpoints
pub mod import;
/// List endpoints and their nested sub-resources
pub mod lists;
/// Newsletter endpoints
pub mod newsletters;
/// Recipient endpoints
pub mod recipients;
/// User endpoints
pub mod users;

use crate::client::Client;

use attributes::Attributes;
use companies::Companies;
use forms::Forms;
use groups::Groups;
use import::Import;
use lists::Lists;
use newsletters::Newsletters;
use recipients::Recipients;
use users::Users;

impl Client {
    /// Access to the attribute endpoints
    pub fn attributes(&self) -> Attributes<'_> {
        Attributes { client: self }
    }

    /// Access to the company endpoints
    pub fn companies(&self) -> Companies<'_> {
        Companies { client: self }
    }

    /// Access to the form submission endpoints
    pub fn forms(&self) -> Forms<'_> {
        Forms { client: self }
    }

    /// Access to the group endpoints
    pub fn groups(&self) -> Groups<'_> {
        Groups { client: self }
    }

    /// Access to the import status endpoints
    pub fn import(&self) -> Import<'_> {
        Import { client: self }
    }

    /// Access to the list endpoints and their nested sub-resources
    pub fn lists(&self) -> Lists<'_> {
        Lists { client: self }
    }

    /// Access to the newsletter endpoints
    pub fn newsletters(&self) -> Newsletters<'_> {
        Newsletters { client: self }
    }

    /// Access to the recipient endpoints
    pub fn recipients(&self) -> Recipients<'_> {
        Recipients { client: self }
    }

    /// Access to the user endpoints
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}
