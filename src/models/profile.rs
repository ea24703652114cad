//! User identity shape returned by the identity exchange

use serde::{Deserialize, Serialize};

/// Identity attributes of a signed-in user, as surfaced by the
/// OAuth provider after the code exchange.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub picture: String,
}

impl UserProfile {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        picture: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            picture: picture.into(),
        }
    }
}
