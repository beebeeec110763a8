// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Annotations

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// An annotation as seen by the authorization subsystem
///
/// Deleted annotations keep their row (and so still turn up here) because
/// deletion events have to propagate to realtime subscribers; `deleted`
/// records that state.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Annotation {
    pub id: Uuid,
    /// compound userid of the annotation's creator
    pub userid: String,
    /// pubid of the group the annotation was published into
    pub groupid: String,
    /// shared annotations are visible to everyone who can read the group;
    /// unshared ("only me") annotations are visible to their creator alone
    pub shared: bool,
    pub deleted: bool,
}

#[cfg(test)]
mod test {
    use super::Annotation;

    #[test]
    fn test_serde_round_trip() {
        let annotation = Annotation {
            id: "2767e827-5b0c-4028-b8b0-4a0932a55a2f".parse().unwrap(),
            userid: "acct:river@example.com".to_string(),
            groupid: "abc123".to_string(),
            shared: true,
            deleted: false,
        };
        let json = serde_json::to_string(&annotation).unwrap();
        let back: Annotation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, annotation);
    }
}
