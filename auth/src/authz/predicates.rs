// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The predicate catalogue
//!
//! A [`Predicate`] is a named, pure check against the identity and the
//! context.  Predicates never load data and never fail: whatever they need
//! that isn't in the context makes them return `false`.
//!
//! Most predicates only make sense on top of others.  `user_is_admin` is
//! about the calling user's admin flag, so it presupposes
//! `authenticated_user`.  That relationship is spelled out in
//! [`Predicate::requires`], and [`crate::authz::Engine`] splices the
//! required predicates into every clause ahead of the one that names them.
//! Policy tables can therefore list just the interesting predicate and get
//! the whole chain.
//!
//! The checks are nevertheless written to be total.  A predicate must
//! return the right answer (or at least not panic) even if its
//! requirements were never evaluated, because nothing but convention
//! orders a hand-built clause.

use crate::authn::Identity;
use crate::authz::Context;
use crate::LMS_AUTHORITY;
use gloss_types::group::JoinableBy;
use gloss_types::group::ReadableBy;
use gloss_types::group::WriteableBy;
use std::fmt;

/// A named check that contributes to authorization decisions
pub struct Predicate {
    /// stable name, used in decision reasons and as the memoization key
    pub name: &'static str,
    /// the check itself
    pub check: fn(Option<&Identity>, &Context<'_>) -> bool,
    /// predicates that must also hold wherever this one is used
    pub requires: &'static [&'static Predicate],
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

//
// Identity predicates
//

/// Matches any caller that presented credentials at all, user or client
pub static AUTHENTICATED: Predicate = Predicate {
    name: "authenticated",
    check: authenticated,
    requires: &[],
};

fn authenticated(identity: Option<&Identity>, _context: &Context<'_>) -> bool {
    identity.is_some()
}

/// Matches when the caller's identity includes a user
pub static AUTHENTICATED_USER: Predicate = Predicate {
    name: "authenticated_user",
    check: authenticated_user,
    requires: &[&AUTHENTICATED],
};

fn authenticated_user(
    identity: Option<&Identity>,
    _context: &Context<'_>,
) -> bool {
    identity.is_some_and(|identity| identity.user().is_some())
}

/// Matches when the caller's identity includes an auth client
pub static AUTHENTICATED_CLIENT: Predicate = Predicate {
    name: "authenticated_client",
    check: authenticated_client,
    requires: &[&AUTHENTICATED],
};

fn authenticated_client(
    identity: Option<&Identity>,
    _context: &Context<'_>,
) -> bool {
    identity.is_some_and(|identity| identity.auth_client().is_some())
}

/// Matches when the calling auth client belongs to the LMS authority
pub static AUTHENTICATED_CLIENT_IS_LMS: Predicate = Predicate {
    name: "authenticated_client_is_lms",
    check: authenticated_client_is_lms,
    requires: &[&AUTHENTICATED_CLIENT],
};

fn authenticated_client_is_lms(
    identity: Option<&Identity>,
    _context: &Context<'_>,
) -> bool {
    identity
        .and_then(Identity::auth_client)
        .is_some_and(|client| client.authority == LMS_AUTHORITY)
}

/// Matches when the calling user carries the site-wide admin flag
pub static USER_IS_ADMIN: Predicate = Predicate {
    name: "user_is_admin",
    check: user_is_admin,
    requires: &[&AUTHENTICATED_USER],
};

fn user_is_admin(identity: Option<&Identity>, _context: &Context<'_>) -> bool {
    identity.and_then(Identity::user).is_some_and(|user| user.admin)
}

/// Matches when the calling user carries the site-wide staff flag
pub static USER_IS_STAFF: Predicate = Predicate {
    name: "user_is_staff",
    check: user_is_staff,
    requires: &[&AUTHENTICATED_USER],
};

fn user_is_staff(identity: Option<&Identity>, _context: &Context<'_>) -> bool {
    identity.and_then(Identity::user).is_some_and(|user| user.staff)
}

//
// Target user predicates
//

/// Matches when the context carries a target user
pub static USER_FOUND: Predicate = Predicate {
    name: "user_found",
    check: user_found,
    requires: &[],
};

fn user_found(_identity: Option<&Identity>, context: &Context<'_>) -> bool {
    context.user().is_some()
}

/// Matches when the target user belongs to the calling client's authority
pub static USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT: Predicate = Predicate {
    name: "user_authority_matches_authenticated_client",
    check: user_authority_matches_authenticated_client,
    requires: &[&USER_FOUND, &AUTHENTICATED_CLIENT],
};

fn user_authority_matches_authenticated_client(
    identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    match (identity.and_then(Identity::auth_client), context.user()) {
        (Some(client), Some(user)) => client.authority == user.authority,
        _ => false,
    }
}

//
// Group predicates
//

/// Matches when the context carries a group that was found
pub static GROUP_FOUND: Predicate = Predicate {
    name: "group_found",
    check: group_found,
    requires: &[],
};

fn group_found(_identity: Option<&Identity>, context: &Context<'_>) -> bool {
    context.group().is_some()
}

/// Matches when the context is about a group that does not exist
pub static GROUP_NOT_FOUND: Predicate = Predicate {
    name: "group_not_found",
    check: group_not_found,
    requires: &[],
};

fn group_not_found(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context.group().is_none()
}

/// Matches when the group accepts annotations from its members
pub static GROUP_WRITABLE_BY_MEMBERS: Predicate = Predicate {
    name: "group_writable_by_members",
    check: group_writable_by_members,
    requires: &[&GROUP_FOUND],
};

fn group_writable_by_members(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context
        .group()
        .is_some_and(|group| group.writeable_by == Some(WriteableBy::Members))
}

/// Matches when the group accepts annotations from anyone in its authority
pub static GROUP_WRITABLE_BY_AUTHORITY: Predicate = Predicate {
    name: "group_writable_by_authority",
    check: group_writable_by_authority,
    requires: &[&GROUP_FOUND],
};

fn group_writable_by_authority(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context
        .group()
        .is_some_and(|group| group.writeable_by == Some(WriteableBy::Authority))
}

/// Matches when anyone at all may read the group's annotations
pub static GROUP_READABLE_BY_WORLD: Predicate = Predicate {
    name: "group_readable_by_world",
    check: group_readable_by_world,
    requires: &[&GROUP_FOUND],
};

fn group_readable_by_world(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context
        .group()
        .is_some_and(|group| group.readable_by == Some(ReadableBy::World))
}

/// Matches when only the group's members may read its annotations
pub static GROUP_READABLE_BY_MEMBERS: Predicate = Predicate {
    name: "group_readable_by_members",
    check: group_readable_by_members,
    requires: &[&GROUP_FOUND],
};

fn group_readable_by_members(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context
        .group()
        .is_some_and(|group| group.readable_by == Some(ReadableBy::Members))
}

/// Matches when anyone in the group's authority may join it
pub static GROUP_JOINABLE_BY_AUTHORITY: Predicate = Predicate {
    name: "group_joinable_by_authority",
    check: group_joinable_by_authority,
    requires: &[&GROUP_FOUND],
};

fn group_joinable_by_authority(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context
        .group()
        .is_some_and(|group| group.joinable_by == Some(JoinableBy::Authority))
}

/// Matches when the calling user created the group
pub static GROUP_CREATED_BY_USER: Predicate = Predicate {
    name: "group_created_by_user",
    check: group_created_by_user,
    requires: &[&AUTHENTICATED_USER, &GROUP_FOUND],
};

fn group_created_by_user(
    identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    match (identity.and_then(Identity::user), context.group()) {
        (Some(user), Some(group)) => group.creator_id == Some(user.id),
        _ => false,
    }
}

/// Matches when the calling user is a member of the group
pub static GROUP_HAS_USER_AS_MEMBER: Predicate = Predicate {
    name: "group_has_user_as_member",
    check: group_has_user_as_member,
    requires: &[&AUTHENTICATED_USER, &GROUP_FOUND],
};

fn group_has_user_as_member(
    identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    match (identity.and_then(Identity::user), context.group()) {
        (Some(user), Some(group)) => {
            user.memberships.iter().any(|member| member.id == group.id)
        }
        _ => false,
    }
}

/// Matches when the group and the calling user share an authority
pub static GROUP_MATCHES_USER_AUTHORITY: Predicate = Predicate {
    name: "group_matches_user_authority",
    check: group_matches_user_authority,
    requires: &[&AUTHENTICATED_USER, &GROUP_FOUND],
};

fn group_matches_user_authority(
    identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    match (identity.and_then(Identity::user), context.group()) {
        (Some(user), Some(group)) => group.authority == user.authority,
        _ => false,
    }
}

/// Matches when the group belongs to the calling client's authority
pub static GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT: Predicate = Predicate {
    name: "group_authority_matches_authenticated_client",
    check: group_authority_matches_authenticated_client,
    requires: &[&AUTHENTICATED_CLIENT, &GROUP_FOUND],
};

fn group_authority_matches_authenticated_client(
    identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    match (identity.and_then(Identity::auth_client), context.group()) {
        (Some(client), Some(group)) => group.authority == client.authority,
        _ => false,
    }
}

//
// Annotation predicates
//

/// Matches when the context carries an annotation
pub static ANNOTATION_FOUND: Predicate = Predicate {
    name: "annotation_found",
    check: annotation_found,
    requires: &[],
};

fn annotation_found(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context.annotation().is_some()
}

/// Matches when the annotation is shared with its group
pub static ANNOTATION_SHARED: Predicate = Predicate {
    name: "annotation_shared",
    check: annotation_shared,
    requires: &[&ANNOTATION_FOUND],
};

fn annotation_shared(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context.annotation().is_some_and(|annotation| annotation.shared)
}

/// Matches when the annotation is private to its author
pub static ANNOTATION_NOT_SHARED: Predicate = Predicate {
    name: "annotation_not_shared",
    check: annotation_not_shared,
    requires: &[&ANNOTATION_FOUND],
};

fn annotation_not_shared(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context.annotation().is_some_and(|annotation| !annotation.shared)
}

/// Matches when the annotation has not been marked deleted
pub static ANNOTATION_LIVE: Predicate = Predicate {
    name: "annotation_live",
    check: annotation_live,
    requires: &[&ANNOTATION_FOUND],
};

fn annotation_live(
    _identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    context.annotation().is_some_and(|annotation| !annotation.deleted)
}

/// Matches when the calling user wrote the annotation
pub static ANNOTATION_CREATED_BY_USER: Predicate = Predicate {
    name: "annotation_created_by_user",
    check: annotation_created_by_user,
    requires: &[&AUTHENTICATED_USER, &ANNOTATION_FOUND],
};

fn annotation_created_by_user(
    identity: Option<&Identity>,
    context: &Context<'_>,
) -> bool {
    match (identity.and_then(Identity::user), context.annotation()) {
        (Some(user), Some(annotation)) => annotation.userid == user.userid,
        _ => false,
    }
}

/// The whole catalogue, for tests and tooling that enumerate predicates
pub static ALL: &[&Predicate] = &[
    &AUTHENTICATED,
    &AUTHENTICATED_USER,
    &AUTHENTICATED_CLIENT,
    &AUTHENTICATED_CLIENT_IS_LMS,
    &USER_IS_ADMIN,
    &USER_IS_STAFF,
    &USER_FOUND,
    &USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT,
    &GROUP_FOUND,
    &GROUP_NOT_FOUND,
    &GROUP_WRITABLE_BY_MEMBERS,
    &GROUP_WRITABLE_BY_AUTHORITY,
    &GROUP_READABLE_BY_WORLD,
    &GROUP_READABLE_BY_MEMBERS,
    &GROUP_JOINABLE_BY_AUTHORITY,
    &GROUP_CREATED_BY_USER,
    &GROUP_HAS_USER_AS_MEMBER,
    &GROUP_MATCHES_USER_AUTHORITY,
    &GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT,
    &ANNOTATION_FOUND,
    &ANNOTATION_SHARED,
    &ANNOTATION_NOT_SHARED,
    &ANNOTATION_LIVE,
    &ANNOTATION_CREATED_BY_USER,
];

#[cfg(test)]
mod test {
    use super::*;
    use gloss_types::annotation::Annotation;
    use gloss_types::auth_client::AuthClient;
    use gloss_types::group::Group;
    use gloss_types::group::GroupRef;
    use gloss_types::user::User;
    use std::collections::BTreeSet;

    fn check(
        predicate: &Predicate,
        identity: Option<&Identity>,
        context: &Context<'_>,
    ) -> bool {
        (predicate.check)(identity, context)
    }

    fn user_identity(id: i64, username: &str) -> Identity {
        Identity::from_user(User::new(id, username, "example.com"))
    }

    fn client_identity(authority: &str) -> Identity {
        Identity::from_auth_client(make_client(authority))
    }

    fn make_client(authority: &str) -> AuthClient {
        AuthClient {
            id: "7a9bb17e-3bc7-43b8-9c10-1f45c80e5cfb".parse().unwrap(),
            authority: authority.to_string(),
        }
    }

    fn make_group() -> Group {
        Group {
            id: 10,
            pubid: "abc123".to_string(),
            authority: "example.com".to_string(),
            creator_id: Some(1),
            readable_by: Some(ReadableBy::Members),
            writeable_by: Some(WriteableBy::Members),
            joinable_by: None,
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = BTreeSet::new();
        for predicate in ALL {
            assert!(
                names.insert(predicate.name),
                "duplicate predicate name {:?}",
                predicate.name
            );
        }
        assert_eq!(ALL.len(), 24);
    }

    #[test]
    fn test_requires_stay_in_the_catalogue() {
        for predicate in ALL {
            for required in predicate.requires {
                assert!(
                    ALL.iter().any(|p| std::ptr::eq(*p, *required)),
                    "{:?} requires {:?}, which is not in ALL",
                    predicate.name,
                    required.name
                );
            }
        }
    }

    #[test]
    fn test_requires_are_acyclic() {
        fn walk(predicate: &Predicate, trail: &mut Vec<&'static str>) {
            assert!(
                !trail.contains(&predicate.name),
                "requires cycle through {:?} (trail: {:?})",
                predicate.name,
                trail
            );
            trail.push(predicate.name);
            for required in predicate.requires {
                walk(required, trail);
            }
            trail.pop();
        }
        for predicate in ALL {
            walk(predicate, &mut Vec::new());
        }
    }

    #[test]
    fn test_identity_predicates() {
        let root = Context::Root;
        let user = user_identity(1, "river");
        let client = client_identity("example.com");

        assert!(!check(&AUTHENTICATED, None, &root));
        assert!(check(&AUTHENTICATED, Some(&user), &root));
        assert!(check(&AUTHENTICATED, Some(&client), &root));

        assert!(check(&AUTHENTICATED_USER, Some(&user), &root));
        assert!(!check(&AUTHENTICATED_USER, Some(&client), &root));
        assert!(!check(&AUTHENTICATED_CLIENT, Some(&user), &root));
        assert!(check(&AUTHENTICATED_CLIENT, Some(&client), &root));

        assert!(!check(&AUTHENTICATED_CLIENT_IS_LMS, Some(&client), &root));
        let lms = client_identity(LMS_AUTHORITY);
        assert!(check(&AUTHENTICATED_CLIENT_IS_LMS, Some(&lms), &root));
    }

    #[test]
    fn test_forwarded_user_counts_as_both_user_and_client() {
        let identity = Identity::from_models(
            Some(User::new(1, "river", "example.com")),
            Some(make_client("example.com")),
        )
        .unwrap();
        let root = Context::Root;
        assert!(check(&AUTHENTICATED_USER, Some(&identity), &root));
        assert!(check(&AUTHENTICATED_CLIENT, Some(&identity), &root));
    }

    #[test]
    fn test_admin_and_staff_flags() {
        let root = Context::Root;
        let mut user = User::new(1, "river", "example.com");
        let plain = Identity::from_user(user.clone());
        assert!(!check(&USER_IS_ADMIN, Some(&plain), &root));
        assert!(!check(&USER_IS_STAFF, Some(&plain), &root));

        user.admin = true;
        user.staff = true;
        let elevated = Identity::from_user(user);
        assert!(check(&USER_IS_ADMIN, Some(&elevated), &root));
        assert!(check(&USER_IS_STAFF, Some(&elevated), &root));

        let client = client_identity("example.com");
        assert!(!check(&USER_IS_ADMIN, Some(&client), &root));
    }

    #[test]
    fn test_client_and_target_user_authorities_must_match() {
        let target = User::new(3, "desi", "example.com");
        let context = Context::for_user(&target);
        let same = client_identity("example.com");
        let other = client_identity("other.org");

        assert!(check(&USER_FOUND, None, &context));
        assert!(!check(&USER_FOUND, None, &Context::Root));
        assert!(check(
            &USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT,
            Some(&same),
            &context
        ));
        assert!(!check(
            &USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT,
            Some(&other),
            &context
        ));
        let user = user_identity(1, "river");
        assert!(!check(
            &USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT,
            Some(&user),
            &context
        ));
    }

    #[test]
    fn test_group_predicates_fail_closed_without_a_group() {
        let identity = user_identity(1, "river");
        let context = Context::for_group(None);
        assert!(check(&GROUP_NOT_FOUND, Some(&identity), &context));
        assert!(!check(&GROUP_FOUND, Some(&identity), &context));
        assert!(!check(&GROUP_READABLE_BY_WORLD, Some(&identity), &context));
        assert!(!check(&GROUP_CREATED_BY_USER, Some(&identity), &context));
        assert!(!check(&GROUP_HAS_USER_AS_MEMBER, Some(&identity), &context));
    }

    #[test]
    fn test_group_flag_predicates_read_the_flags() {
        let group = make_group();
        let context = Context::for_group(Some(&group));
        assert!(check(&GROUP_READABLE_BY_MEMBERS, None, &context));
        assert!(!check(&GROUP_READABLE_BY_WORLD, None, &context));
        assert!(check(&GROUP_WRITABLE_BY_MEMBERS, None, &context));
        assert!(!check(&GROUP_WRITABLE_BY_AUTHORITY, None, &context));
        assert!(!check(&GROUP_JOINABLE_BY_AUTHORITY, None, &context));

        let mut group = make_group();
        group.readable_by = Some(ReadableBy::World);
        group.writeable_by = Some(WriteableBy::Authority);
        group.joinable_by = Some(JoinableBy::Authority);
        let context = Context::for_group(Some(&group));
        assert!(check(&GROUP_READABLE_BY_WORLD, None, &context));
        assert!(check(&GROUP_WRITABLE_BY_AUTHORITY, None, &context));
        assert!(check(&GROUP_JOINABLE_BY_AUTHORITY, None, &context));

        let mut group = make_group();
        group.readable_by = None;
        group.writeable_by = None;
        let context = Context::for_group(Some(&group));
        assert!(!check(&GROUP_READABLE_BY_MEMBERS, None, &context));
        assert!(!check(&GROUP_WRITABLE_BY_MEMBERS, None, &context));
    }

    #[test]
    fn test_group_membership_matches_by_row_id() {
        let group = make_group();
        let context = Context::for_group(Some(&group));

        let mut user = User::new(1, "river", "example.com");
        user.memberships.push(GroupRef { id: 99, pubid: "zzz999".into() });
        let identity = Identity::from_user(user.clone());
        assert!(!check(&GROUP_HAS_USER_AS_MEMBER, Some(&identity), &context));

        user.memberships.push(GroupRef::from(&group));
        let identity = Identity::from_user(user);
        assert!(check(&GROUP_HAS_USER_AS_MEMBER, Some(&identity), &context));
    }

    #[test]
    fn test_group_creator_is_matched_by_user_id() {
        let creator = user_identity(1, "river");
        let other = user_identity(2, "desi");

        let group = make_group();
        let context = Context::for_group(Some(&group));
        assert!(check(&GROUP_CREATED_BY_USER, Some(&creator), &context));
        assert!(!check(&GROUP_CREATED_BY_USER, Some(&other), &context));

        let mut group = make_group();
        group.creator_id = None;
        let context = Context::for_group(Some(&group));
        assert!(!check(&GROUP_CREATED_BY_USER, Some(&creator), &context));
    }

    #[test]
    fn test_group_authority_predicates() {
        let group = make_group();
        let context = Context::for_group(Some(&group));

        let local_user = user_identity(1, "river");
        let mut foreign = User::new(4, "sam", "example.com");
        foreign.authority = "other.org".to_string();
        foreign.userid = "acct:sam@other.org".to_string();
        let foreign_user = Identity::from_user(foreign);
        assert!(check(
            &GROUP_MATCHES_USER_AUTHORITY,
            Some(&local_user),
            &context
        ));
        assert!(!check(
            &GROUP_MATCHES_USER_AUTHORITY,
            Some(&foreign_user),
            &context
        ));

        let local_client = client_identity("example.com");
        let foreign_client = client_identity("other.org");
        assert!(check(
            &GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT,
            Some(&local_client),
            &context
        ));
        assert!(!check(
            &GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT,
            Some(&foreign_client),
            &context
        ));
    }

    #[test]
    fn test_annotation_predicates() {
        let annotation = Annotation {
            id: "2767e827-5b0c-4028-b8b0-4a0932a55a2f".parse().unwrap(),
            userid: "acct:river@example.com".to_string(),
            groupid: "abc123".to_string(),
            shared: true,
            deleted: false,
        };
        let context = Context::for_annotation(&annotation, None);
        assert!(check(&ANNOTATION_FOUND, None, &context));
        assert!(!check(&ANNOTATION_FOUND, None, &Context::Root));
        assert!(check(&ANNOTATION_SHARED, None, &context));
        assert!(!check(&ANNOTATION_NOT_SHARED, None, &context));
        assert!(check(&ANNOTATION_LIVE, None, &context));

        let mut deleted = annotation.clone();
        deleted.shared = false;
        deleted.deleted = true;
        let context = Context::for_annotation(&deleted, None);
        assert!(!check(&ANNOTATION_SHARED, None, &context));
        assert!(check(&ANNOTATION_NOT_SHARED, None, &context));
        assert!(!check(&ANNOTATION_LIVE, None, &context));
    }

    #[test]
    fn test_annotation_ownership_compares_userids() {
        let annotation = Annotation {
            id: "2767e827-5b0c-4028-b8b0-4a0932a55a2f".parse().unwrap(),
            userid: "acct:river@example.com".to_string(),
            groupid: "abc123".to_string(),
            shared: false,
            deleted: false,
        };
        let context = Context::for_annotation(&annotation, None);
        let owner = user_identity(1, "river");
        let other = user_identity(2, "desi");
        assert!(check(&ANNOTATION_CREATED_BY_USER, Some(&owner), &context));
        assert!(!check(&ANNOTATION_CREATED_BY_USER, Some(&other), &context));
        assert!(!check(&ANNOTATION_CREATED_BY_USER, None, &context));
    }
}
