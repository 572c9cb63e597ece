//! Auth wire types shared with the backend.

use serde::{Deserialize, Serialize};

/// The signed-in user as the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Response from both auth endpoints: the token to carry and who it belongs to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}
