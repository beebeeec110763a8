// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deriving principal tags from an identity
//!
//! Principals are the coarse-grained string tags the platform's legacy
//! ACL-style collaborators consume: the search index filters result sets by
//! them and the realtime service fans events out by them.  They carry much
//! less information than the predicate engine works with, which is why the
//! engine itself never looks at them -- the derivation here exists for
//! those downstream consumers only.
//!
//! The derivation is a pure function of the identity.  Rendering a
//! [`Principal`] with `Display` produces the canonical wire tag, e.g.
//! `role:admin` or `group:abc123`.

use crate::authn::Identity;
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// A coarse-grained security tag derived from an identity
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Principal {
    /// every caller, authenticated or not
    Everyone,
    /// every authenticated caller
    Authenticated,
    /// the user's own compound userid
    User(String),
    RoleUser,
    RoleAdmin,
    RoleStaff,
    /// one per group the user is a member of, by pubid
    Group(String),
    /// the user's authority
    Authority(String),
    /// the auth client's own id
    AuthClient(Uuid),
    RoleAuthClient,
    /// the auth client qualified by its authority
    Client { id: Uuid, authority: String },
    /// the auth client's authority
    ClientAuthority(String),
    /// present when an auth client asserts a forwarded user
    RoleAuthClientForwardedUser,
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::Everyone => write!(f, "everyone"),
            Principal::Authenticated => write!(f, "authenticated"),
            Principal::User(userid) => write!(f, "{}", userid),
            Principal::RoleUser => write!(f, "role:user"),
            Principal::RoleAdmin => write!(f, "role:admin"),
            Principal::RoleStaff => write!(f, "role:staff"),
            Principal::Group(pubid) => write!(f, "group:{}", pubid),
            Principal::Authority(authority) => {
                write!(f, "authority:{}", authority)
            }
            Principal::AuthClient(id) => write!(f, "{}", id),
            Principal::RoleAuthClient => write!(f, "role:auth_client"),
            Principal::Client { id, authority } => {
                write!(f, "client:{}@{}", id, authority)
            }
            Principal::ClientAuthority(authority) => {
                write!(f, "client_authority:{}", authority)
            }
            Principal::RoleAuthClientForwardedUser => {
                write!(f, "role:auth_client_forwarded_user")
            }
        }
    }
}

/// Computes the full set of principal tags for a caller
///
/// An anonymous caller (`None`) gets exactly `{everyone}`.  The result is a
/// set: duplicates collapse and no ordering is meaningful, though the
/// `BTreeSet` makes iteration deterministic for callers that render it.
pub fn principals_for_identity(
    identity: Option<&Identity>,
) -> BTreeSet<Principal> {
    let mut principals = BTreeSet::new();
    principals.insert(Principal::Everyone);
    let Some(identity) = identity else {
        return principals;
    };
    principals.insert(Principal::Authenticated);

    if let Some(user) = identity.user() {
        principals.insert(Principal::User(user.userid.clone()));
        principals.insert(Principal::RoleUser);
        if user.admin {
            principals.insert(Principal::RoleAdmin);
        }
        if user.staff {
            principals.insert(Principal::RoleStaff);
        }
        for group in &user.memberships {
            principals.insert(Principal::Group(group.pubid.clone()));
        }
        principals.insert(Principal::Authority(user.authority.clone()));
    }

    if let Some(client) = identity.auth_client() {
        principals.insert(Principal::AuthClient(client.id));
        principals.insert(Principal::RoleAuthClient);
        principals.insert(Principal::Client {
            id: client.id,
            authority: client.authority.clone(),
        });
        principals
            .insert(Principal::ClientAuthority(client.authority.clone()));
    }

    if identity.is_forwarded_user() {
        principals.insert(Principal::RoleAuthClientForwardedUser);
    }

    principals
}
