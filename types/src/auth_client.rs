// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registered auth clients

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A registered service principal
///
/// Auth clients are third-party (or first-party) services that authenticate
/// with a client-credential secret rather than a user session.  A client is
/// pinned to one authority and may only act on that authority's users and
/// groups; the authorization predicates enforce this by comparing the
/// client's authority against the target resource's.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthClient {
    pub id: Uuid,
    pub authority: String,
}

#[cfg(test)]
mod test {
    use super::AuthClient;

    #[test]
    fn test_serde_round_trip() {
        let client = AuthClient {
            id: "08ab2b6d-b791-4f7e-8b28-e47ed3100f4f".parse().unwrap(),
            authority: "partner.example.com".to_string(),
        };
        let json = serde_json::to_string(&client).unwrap();
        let back: AuthClient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, client);
    }
}
