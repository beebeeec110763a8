// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only views of the resource a permission check runs against
//!
//! Callers load whatever rows the check needs and lend them to the engine
//! through a [`Context`].  The engine reads fields from these views and
//! nothing else: it never mutates them and never goes looking for rows that
//! weren't supplied.  Where a row might legitimately be missing (the group
//! in an upsert, the group of an orphaned annotation) the view holds an
//! `Option`, and the predicates that need the row fail closed on `None`.

use gloss_types::annotation::Annotation;
use gloss_types::group::Group;
use gloss_types::membership::Membership;
use gloss_types::membership::MembershipRole;
use gloss_types::user::User;

/// The resource under test, as lent to [`crate::authz::Engine::permits`]
#[derive(Clone, Copy, Debug)]
pub enum Context<'a> {
    /// No resource: the permission alone decides (admin pages, profile
    /// update, user creation, the bulk API)
    Root,
    /// A target user (user read/update by an auth client)
    User(UserContext<'a>),
    /// A group, possibly absent when looked up by a key that matched
    /// nothing
    Group(GroupContext<'a>),
    /// An existing membership of a user in a group
    GroupMembership(GroupMembershipContext<'a>),
    /// A proposed change to an existing membership
    EditGroupMembership(EditGroupMembershipContext<'a>),
    /// An annotation together with its group as loaded by the caller
    Annotation(AnnotationContext<'a>),
}

/// Payload of [`Context::User`]
#[derive(Clone, Copy, Debug)]
pub struct UserContext<'a> {
    pub user: &'a User,
}

/// Payload of [`Context::Group`]
#[derive(Clone, Copy, Debug)]
pub struct GroupContext<'a> {
    pub group: Option<&'a Group>,
}

/// Payload of [`Context::GroupMembership`]
#[derive(Clone, Copy, Debug)]
pub struct GroupMembershipContext<'a> {
    pub group: &'a Group,
    pub user: &'a User,
    pub membership: &'a Membership,
}

/// Payload of [`Context::EditGroupMembership`]
#[derive(Clone, Copy, Debug)]
pub struct EditGroupMembershipContext<'a> {
    pub group: &'a Group,
    pub user: &'a User,
    pub membership: &'a Membership,
    /// the roles the caller proposes the membership should have instead
    pub new_roles: &'a [MembershipRole],
}

/// Payload of [`Context::Annotation`]
#[derive(Clone, Copy, Debug)]
pub struct AnnotationContext<'a> {
    pub annotation: &'a Annotation,
    /// the annotation's group; `None` if the group row is gone, in which
    /// case anything requiring the group fails closed
    pub group: Option<&'a Group>,
}

impl<'a> Context<'a> {
    pub fn for_user(user: &'a User) -> Context<'a> {
        Context::User(UserContext { user })
    }

    pub fn for_group(group: Option<&'a Group>) -> Context<'a> {
        Context::Group(GroupContext { group })
    }

    pub fn for_group_membership(
        group: &'a Group,
        user: &'a User,
        membership: &'a Membership,
    ) -> Context<'a> {
        Context::GroupMembership(GroupMembershipContext {
            group,
            user,
            membership,
        })
    }

    pub fn for_edit_group_membership(
        group: &'a Group,
        user: &'a User,
        membership: &'a Membership,
        new_roles: &'a [MembershipRole],
    ) -> Context<'a> {
        Context::EditGroupMembership(EditGroupMembershipContext {
            group,
            user,
            membership,
            new_roles,
        })
    }

    pub fn for_annotation(
        annotation: &'a Annotation,
        group: Option<&'a Group>,
    ) -> Context<'a> {
        Context::Annotation(AnnotationContext { annotation, group })
    }

    /// Returns the target user this context exposes, if any
    ///
    /// This is the user the operation is *about* (e.g. the account being
    /// updated or the member being removed), not the caller -- the caller
    /// lives in the identity.
    pub fn user(&self) -> Option<&'a User> {
        match self {
            Context::User(UserContext { user }) => Some(user),
            Context::GroupMembership(GroupMembershipContext {
                user, ..
            }) => Some(user),
            Context::EditGroupMembership(EditGroupMembershipContext {
                user,
                ..
            }) => Some(user),
            Context::Root | Context::Group(_) | Context::Annotation(_) => None,
        }
    }

    /// Returns the group this context exposes, if any
    ///
    /// For annotation contexts this is the annotation's group.
    pub fn group(&self) -> Option<&'a Group> {
        match self {
            Context::Group(GroupContext { group }) => *group,
            Context::GroupMembership(GroupMembershipContext {
                group, ..
            }) => Some(group),
            Context::EditGroupMembership(EditGroupMembershipContext {
                group,
                ..
            }) => Some(group),
            Context::Annotation(AnnotationContext { group, .. }) => *group,
            Context::Root | Context::User(_) => None,
        }
    }

    /// Returns the annotation this context exposes, if any
    pub fn annotation(&self) -> Option<&'a Annotation> {
        match self {
            Context::Annotation(AnnotationContext { annotation, .. }) => {
                Some(annotation)
            }
            _ => None,
        }
    }
}
