// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group membership rows

use serde::Deserialize;
use serde::Serialize;

/// A role a user can hold within a group
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    Member,
    Moderator,
    Admin,
    Owner,
}

/// One user's membership in one group
///
/// This is the full membership row view, as opposed to the lean
/// [`crate::group::GroupRef`] list a [`crate::user::User`] carries.  The
/// membership contexts hand it to authorization so that callers deciding on
/// role changes can see the roles the target user already holds.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Membership {
    pub group_id: i64,
    pub user_id: i64,
    pub roles: Vec<MembershipRole>,
}

#[cfg(test)]
mod test {
    use super::Membership;
    use super::MembershipRole;

    #[test]
    fn test_roles_serialize_as_snake_case() {
        let membership = Membership {
            group_id: 10,
            user_id: 3,
            roles: vec![MembershipRole::Member, MembershipRole::Moderator],
        };
        let json = serde_json::to_value(&membership).unwrap();
        assert_eq!(json["roles"][0], "member");
        assert_eq!(json["roles"][1], "moderator");
        let back: Membership = serde_json::from_value(json).unwrap();
        assert_eq!(back, membership);
    }
}
