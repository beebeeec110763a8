// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User accounts

use crate::group::GroupRef;
use crate::userid::format_userid;
use serde::Deserialize;
use serde::Serialize;

/// A user account as seen by the authorization subsystem
///
/// `userid` is the compound key described in [`crate::userid`]; it embeds
/// the same authority string carried in `authority`.  The membership list
/// holds one [`GroupRef`] per group the user belongs to, as loaded by the
/// storage layer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    /// compound key, `acct:{username}@{authority}`
    pub userid: String,
    pub authority: String,
    pub admin: bool,
    pub staff: bool,
    pub memberships: Vec<GroupRef>,
}

impl User {
    /// Returns a plain (non-admin, non-staff, memberless) user, computing
    /// the compound userid from `username` and `authority`
    pub fn new(id: i64, username: &str, authority: &str) -> User {
        User {
            id,
            userid: format_userid(username, authority),
            authority: authority.to_string(),
            admin: false,
            staff: false,
            memberships: Vec::new(),
        }
    }
}
