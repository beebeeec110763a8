// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Who is performing the current operation
//!
//! An [`Identity`] describes a caller whose credentials have already been
//! verified by the surrounding service (session cookie, bearer token, or an
//! auth client's credential secret -- none of which this crate sees).  It is
//! built fresh per request, never persisted, and discarded when the request
//! ends.
//!
//! There are three authenticated shapes:
//!
//! - a user, acting through a session or token;
//! - an auth client, a registered service acting on its own behalf;
//! - both at once: an auth client asserting a *forwarded user*, i.e. a
//!   trusted service acting on behalf of one of its authority's users.
//!
//! An anonymous caller is represented as `Option::<Identity>::None`
//! everywhere in this crate.  There is deliberately no way to construct an
//! `Identity` with neither half present: [`Identity::from_models`] returns
//! `None` instead, so "empty identity" and "anonymous" cannot drift apart.

mod principals;
pub use principals::Principal;
pub use principals::principals_for_identity;

use gloss_types::auth_client::AuthClient;
use gloss_types::user::User;

/// The authenticated caller of an operation: a user, an auth client, or an
/// auth client with a forwarded user
///
/// See the module documentation for how anonymous callers are represented.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    user: Option<User>,
    auth_client: Option<AuthClient>,
}

impl Identity {
    /// Returns the identity of `user` acting on their own behalf
    pub fn from_user(user: User) -> Identity {
        Identity { user: Some(user), auth_client: None }
    }

    /// Returns the identity of `auth_client` acting on its own behalf
    pub fn from_auth_client(auth_client: AuthClient) -> Identity {
        Identity { user: None, auth_client: Some(auth_client) }
    }

    /// Builds an identity from whatever the authentication layer found
    ///
    /// Returns `None` when neither a user nor an auth client was present,
    /// which is how an anonymous caller is represented.
    pub fn from_models(
        user: Option<User>,
        auth_client: Option<AuthClient>,
    ) -> Option<Identity> {
        match (user, auth_client) {
            (None, None) => None,
            (user, auth_client) => Some(Identity { user, auth_client }),
        }
    }

    /// Returns the authenticated user, if any
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the authenticated auth client, if any
    pub fn auth_client(&self) -> Option<&AuthClient> {
        self.auth_client.as_ref()
    }

    /// Returns whether this identity is an auth client acting on behalf of
    /// a forwarded user (both halves present)
    pub fn is_forwarded_user(&self) -> bool {
        self.user.is_some() && self.auth_client.is_some()
    }

    /// Returns the authenticated user's compound userid, if any
    pub fn userid(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.userid.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::Identity;
    use gloss_types::auth_client::AuthClient;
    use gloss_types::user::User;

    fn make_client() -> AuthClient {
        AuthClient {
            id: "08ab2b6d-b791-4f7e-8b28-e47ed3100f4f".parse().unwrap(),
            authority: "partner.example.com".to_string(),
        }
    }

    #[test]
    fn test_from_models_with_nothing_is_anonymous() {
        assert_eq!(Identity::from_models(None, None), None);
    }

    #[test]
    fn test_from_user() {
        let identity = Identity::from_user(User::new(3, "ada", "example.com"));
        assert!(identity.user().is_some());
        assert!(identity.auth_client().is_none());
        assert!(!identity.is_forwarded_user());
        assert_eq!(identity.userid(), Some("acct:ada@example.com"));
    }

    #[test]
    fn test_from_auth_client() {
        let identity = Identity::from_auth_client(make_client());
        assert!(identity.user().is_none());
        assert!(identity.auth_client().is_some());
        assert!(!identity.is_forwarded_user());
        assert_eq!(identity.userid(), None);
    }

    #[test]
    fn test_forwarded_user_needs_both_halves() {
        let identity = Identity::from_models(
            Some(User::new(3, "ada", "example.com")),
            Some(make_client()),
        )
        .unwrap();
        assert!(identity.is_forwarded_user());
        assert_eq!(identity.userid(), Some("acct:ada@example.com"));
    }
}
