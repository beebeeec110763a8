// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Groups: the containers annotations are published into

use serde::Deserialize;
use serde::Serialize;

/// Who may read the annotations in a group
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadableBy {
    /// only members of the group
    Members,
    /// anyone, authenticated or not
    World,
}

/// Who may write annotations into a group
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteableBy {
    /// any user in the group's authority
    Authority,
    /// only members of the group
    Members,
}

/// Who may join a group
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinableBy {
    /// any user in the group's authority
    Authority,
}

/// A group as seen by the authorization subsystem
///
/// The read/write/join policy flags are each optional: a `None` flag means
/// the corresponding operation is closed for that group, no matter who asks.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Group {
    pub id: i64,
    /// public identifier, used in URLs and on annotations
    pub pubid: String,
    pub authority: String,
    /// id of the user that created the group, if the creator is still known
    pub creator_id: Option<i64>,
    pub readable_by: Option<ReadableBy>,
    pub writeable_by: Option<WriteableBy>,
    pub joinable_by: Option<JoinableBy>,
}

/// Lean group snapshot carried on a user's membership list
///
/// [`crate::user::User`] records the groups a user belongs to.  Carrying
/// whole [`Group`] values there would drag every group's policy flags around
/// with every user, so membership lists carry just the identifying pair.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GroupRef {
    pub id: i64,
    pub pubid: String,
}

impl From<&Group> for GroupRef {
    fn from(group: &Group) -> Self {
        GroupRef { id: group.id, pubid: group.pubid.clone() }
    }
}

#[cfg(test)]
mod test {
    use super::Group;
    use super::GroupRef;
    use super::ReadableBy;
    use super::WriteableBy;

    fn make_group() -> Group {
        Group {
            id: 10,
            pubid: "abc123".to_string(),
            authority: "example.com".to_string(),
            creator_id: Some(1),
            readable_by: Some(ReadableBy::World),
            writeable_by: Some(WriteableBy::Members),
            joinable_by: None,
        }
    }

    #[test]
    fn test_group_ref_from_group() {
        let group = make_group();
        let group_ref = GroupRef::from(&group);
        assert_eq!(group_ref, GroupRef { id: 10, pubid: "abc123".to_string() });
    }

    #[test]
    fn test_policy_flags_serialize_as_snake_case() {
        let group = make_group();
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["readable_by"], "world");
        assert_eq!(json["writeable_by"], "members");
        assert_eq!(json["joinable_by"], serde_json::Value::Null);
        let back: Group = serde_json::from_value(json).unwrap();
        assert_eq!(back, group);
    }
}
