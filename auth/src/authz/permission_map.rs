// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The permission table
//!
//! Maps every [`Permission`] to the OR-list of AND-clauses that grant it.
//! [`PermissionMap::default_map`] returns the table the platform ships.
//! [`crate::authz::Engine::with_map`] accepts a substitute, which is how
//! tests exercise the engine with hand-built policies.

use super::permissions::AdminPage;
use super::permissions::Annotation;
use super::permissions::Api;
use super::permissions::Group;
use super::permissions::Permission;
use super::permissions::Profile;
use super::permissions::User;
use super::predicates::Predicate;
use super::predicates::ANNOTATION_CREATED_BY_USER;
use super::predicates::ANNOTATION_LIVE;
use super::predicates::ANNOTATION_NOT_SHARED;
use super::predicates::ANNOTATION_SHARED;
use super::predicates::AUTHENTICATED_CLIENT;
use super::predicates::AUTHENTICATED_CLIENT_IS_LMS;
use super::predicates::AUTHENTICATED_USER;
use super::predicates::GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT;
use super::predicates::GROUP_CREATED_BY_USER;
use super::predicates::GROUP_HAS_USER_AS_MEMBER;
use super::predicates::GROUP_JOINABLE_BY_AUTHORITY;
use super::predicates::GROUP_MATCHES_USER_AUTHORITY;
use super::predicates::GROUP_NOT_FOUND;
use super::predicates::GROUP_READABLE_BY_MEMBERS;
use super::predicates::GROUP_READABLE_BY_WORLD;
use super::predicates::GROUP_WRITABLE_BY_AUTHORITY;
use super::predicates::GROUP_WRITABLE_BY_MEMBERS;
use super::predicates::USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT;
use super::predicates::USER_IS_ADMIN;
use super::predicates::USER_IS_STAFF;
use std::collections::BTreeMap;

/// One element of a clause: a predicate or a reference to another
/// permission's clauses
///
/// Permission references let one entry defer to another (an annotation's
/// readability defers to its group's) without restating the other entry's
/// clauses.  The engine resolves references when it is built and rejects
/// ones that dangle or cycle.
#[derive(Clone, Copy, Debug)]
pub enum ClauseElement {
    Predicate(&'static Predicate),
    Permission(Permission),
}

impl ClauseElement {
    /// The label used for this element in decision reasons
    pub fn label(&self) -> String {
        match self {
            ClauseElement::Predicate(predicate) => predicate.name.to_string(),
            ClauseElement::Permission(permission) => permission.to_string(),
        }
    }
}

impl From<&'static Predicate> for ClauseElement {
    fn from(predicate: &'static Predicate) -> ClauseElement {
        ClauseElement::Predicate(predicate)
    }
}

impl From<Permission> for ClauseElement {
    fn from(permission: Permission) -> ClauseElement {
        ClauseElement::Permission(permission)
    }
}

/// An AND-list: the clause holds when every element holds
pub type Clause = Vec<ClauseElement>;

/// Builds the `Vec<Clause>` for one permission
///
/// Each inner bracket is one clause.  Elements are `&'static Predicate`s
/// or `Permission`s, in the order they should be checked.
macro_rules! clauses {
    ($([$($element:expr),* $(,)?]),* $(,)?) => {
        vec![$(vec![
            $($crate::authz::permission_map::ClauseElement::from($element)),*
        ]),*]
    };
}
// This file reaches the macro textually; only test code imports it by
// path.
#[cfg(test)]
pub(crate) use clauses;

/// Permission table: each permission maps to the clauses that grant it
#[derive(Clone, Debug, Default)]
pub struct PermissionMap {
    clauses: BTreeMap<Permission, Vec<Clause>>,
}

impl PermissionMap {
    /// Returns an empty map, which denies everything
    pub fn new() -> PermissionMap {
        PermissionMap { clauses: BTreeMap::new() }
    }

    /// Sets the clause list for `permission`, returning the previous one
    pub fn insert(
        &mut self,
        permission: Permission,
        clauses: Vec<Clause>,
    ) -> Option<Vec<Clause>> {
        self.clauses.insert(permission, clauses)
    }

    pub fn get(&self, permission: Permission) -> Option<&[Clause]> {
        self.clauses.get(&permission).map(Vec::as_slice)
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.clauses.contains_key(&permission)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Permission, &[Clause])> {
        self.clauses
            .iter()
            .map(|(permission, clauses)| (*permission, clauses.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The permission table the platform ships
    pub fn default_map() -> PermissionMap {
        let mut map = PermissionMap::new();

        // The sensitive admin pages are admin-only.  The rest may also be
        // served to staff.
        for page in [
            AdminPage::Admins,
            AdminPage::Badge,
            AdminPage::Features,
            AdminPage::Nipsa,
            AdminPage::OauthClients,
            AdminPage::Staff,
            AdminPage::HighRisk,
        ] {
            map.insert(Permission::AdminPage(page), clauses![[&USER_IS_ADMIN]]);
        }
        for page in [
            AdminPage::Index,
            AdminPage::Groups,
            AdminPage::Mailer,
            AdminPage::Organizations,
            AdminPage::Search,
            AdminPage::Users,
            AdminPage::LowRisk,
        ] {
            map.insert(
                Permission::AdminPage(page),
                clauses![[&USER_IS_ADMIN], [&USER_IS_STAFF]],
            );
        }

        // Accounts are provisioned and managed by the auth client for
        // their authority, not by end users.
        map.insert(
            Permission::User(User::Create),
            clauses![[&AUTHENTICATED_CLIENT]],
        );
        map.insert(
            Permission::User(User::Read),
            clauses![[&USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT]],
        );
        map.insert(
            Permission::User(User::Update),
            clauses![[&USER_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT]],
        );

        map.insert(
            Permission::Api(Api::BulkAction),
            clauses![[&AUTHENTICATED_CLIENT_IS_LMS]],
        );
        map.insert(
            Permission::Profile(Profile::Update),
            clauses![[&AUTHENTICATED_USER]],
        );

        map.insert(
            Permission::Group(Group::Create),
            clauses![[&AUTHENTICATED_USER]],
        );
        // Member lists are exactly as visible as the group itself.
        for operation in [Group::Read, Group::MemberRead] {
            map.insert(
                Permission::Group(operation),
                clauses![
                    [&GROUP_READABLE_BY_WORLD],
                    [&GROUP_READABLE_BY_MEMBERS, &GROUP_HAS_USER_AS_MEMBER],
                    [&GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT],
                ],
            );
        }
        map.insert(
            Permission::Group(Group::MemberAdd),
            clauses![[&GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT]],
        );
        map.insert(
            Permission::Group(Group::Write),
            clauses![
                [&GROUP_WRITABLE_BY_AUTHORITY, &GROUP_MATCHES_USER_AUTHORITY],
                [&GROUP_WRITABLE_BY_MEMBERS, &GROUP_HAS_USER_AS_MEMBER],
            ],
        );
        map.insert(
            Permission::Group(Group::Join),
            clauses![
                [&GROUP_JOINABLE_BY_AUTHORITY, &GROUP_MATCHES_USER_AUTHORITY],
            ],
        );
        map.insert(
            Permission::Group(Group::Flag),
            clauses![
                [&GROUP_READABLE_BY_WORLD, &AUTHENTICATED_USER],
                [&GROUP_READABLE_BY_MEMBERS, &GROUP_HAS_USER_AS_MEMBER],
            ],
        );
        map.insert(
            Permission::Group(Group::Admin),
            clauses![
                [&GROUP_CREATED_BY_USER],
                [&GROUP_AUTHORITY_MATCHES_AUTHENTICATED_CLIENT],
            ],
        );
        map.insert(
            Permission::Group(Group::Moderate),
            clauses![[&GROUP_CREATED_BY_USER]],
        );
        // Upserting against a key nobody holds is just a create.
        map.insert(
            Permission::Group(Group::Upsert),
            clauses![
                [&GROUP_CREATED_BY_USER],
                [&GROUP_NOT_FOUND, &AUTHENTICATED_USER],
            ],
        );

        map.insert(
            Permission::Annotation(Annotation::Create),
            clauses![[&AUTHENTICATED_USER]],
        );
        map.insert(
            Permission::Annotation(Annotation::Read),
            clauses![
                [
                    &ANNOTATION_LIVE,
                    &ANNOTATION_NOT_SHARED,
                    &ANNOTATION_CREATED_BY_USER,
                ],
                [
                    &ANNOTATION_LIVE,
                    &ANNOTATION_SHARED,
                    Permission::Group(Group::Read),
                ],
            ],
        );
        // No liveness requirement here: clients that could read an
        // annotation must also hear that it was deleted.
        map.insert(
            Permission::Annotation(Annotation::ReadRealtimeUpdates),
            clauses![
                [&ANNOTATION_NOT_SHARED, &ANNOTATION_CREATED_BY_USER],
                [&ANNOTATION_SHARED, Permission::Group(Group::Read)],
            ],
        );
        map.insert(
            Permission::Annotation(Annotation::Flag),
            clauses![
                [
                    &ANNOTATION_LIVE,
                    &ANNOTATION_NOT_SHARED,
                    &ANNOTATION_CREATED_BY_USER,
                ],
                [
                    &ANNOTATION_LIVE,
                    &ANNOTATION_SHARED,
                    Permission::Group(Group::Flag),
                ],
            ],
        );
        map.insert(
            Permission::Annotation(Annotation::Moderate),
            clauses![
                [
                    &ANNOTATION_LIVE,
                    &ANNOTATION_SHARED,
                    Permission::Group(Group::Moderate),
                ],
            ],
        );
        for operation in [Annotation::Update, Annotation::Delete] {
            map.insert(
                Permission::Annotation(operation),
                clauses![[&ANNOTATION_LIVE, &ANNOTATION_CREATED_BY_USER]],
            );
        }

        map
    }
}
