// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Authorization subsystem
//!
//! ## Authorization basics
//!
//! Our authorization policy is expressed in terms of *predicates*: an
//! *identity* may perform a *permission* on a *context* if the permission
//! table contains a clause whose predicates all hold for that identity and
//! context.  Let's unpack that.
//!
//! - **identity** is the authenticated caller: a user, an auth client
//!   (a registered service), or an auth client acting on behalf of a
//!   forwarded user.  An anonymous caller has no identity at all.  See
//!   [`crate::authn`].
//! - **context** is a read-only view of the resource being acted on -- a
//!   group, an annotation, a group membership -- or no resource at all for
//!   checks like admin-page access, where who you are is the whole
//!   question.  The caller loads the rows and builds the [`Context`]; the
//!   engine never fetches anything itself.
//! - **permission** is one of a closed set of operations, namespaced by
//!   area: `group:read`, `annotation:update`, `admin_page:nipsa` and so on.
//!   The set is fixed by the system.
//! - **predicate** is a small boolean function of (identity, context):
//!   "the identity is an authenticated user", "the group is readable by
//!   the world", "the annotation was created by this user".
//!
//! The **permission table** maps each permission to an OR-list of
//! AND-clauses over predicates.  For example, `group:read` is granted if
//!
//! - the group is readable by the world; *or*
//! - the group is readable by members *and* the caller is one; *or*
//! - the caller is an auth client for the group's authority.
//!
//! To make that concrete, suppose the group "book-club" is readable by
//! members, and we have three callers:
//!
//! - "cam", a member of "book-club";
//! - "robin", a user with no membership;
//! - an anonymous visitor.
//!
//! Cam is granted `group:read` by the second clause.  Robin fails every
//! clause: the group is not world-readable, robin is not a member, and
//! robin is no auth client.  The anonymous visitor fails the same way,
//! having already failed every predicate that needs an identity.
//!
//! ## Composition
//!
//! Two mechanisms keep the table declarative rather than repetitive:
//!
//! - A predicate can `require` parent predicates.  "The annotation was
//!   created by this user" only makes sense once "there is an annotation in
//!   the context" and "the caller is an authenticated user" hold, so it
//!   declares those as parents instead of re-checking them.  When the
//!   [`Engine`] is built, every clause is expanded so parents run before
//!   their children, deduplicated within the clause.
//! - A clause element can be another *permission* instead of a predicate.
//!   `annotation:read` for a shared annotation defers to `group:read` on
//!   the annotation's group by embedding that permission in its clause, so
//!   the group rules above are written exactly once.
//!
//! Within one [`Engine::permits`] call every predicate is evaluated at most
//! once: results are memoized across clauses and across embedded permission
//! references.  That is sound because predicates are pure functions of the
//! identity and context, and it matters because the same predicate tends to
//! appear in several clauses once `requires` expansion has run.
//!
//! ## Fail closed
//!
//! A permission with no entry in the table, or an entry with no clauses, is
//! always denied.  Evaluation never errors at request time; everything that
//! could be malformed about a table is rejected when the [`Engine`] is
//! built.

mod context;
pub use context::AnnotationContext;
pub use context::Context;
pub use context::EditGroupMembershipContext;
pub use context::GroupContext;
pub use context::GroupMembershipContext;
pub use context::UserContext;

mod engine;
pub use engine::BuildError;
pub use engine::Decision;
pub use engine::Engine;

mod permission_map;
pub use permission_map::Clause;
pub use permission_map::ClauseElement;
pub use permission_map::PermissionMap;

pub mod permissions;
pub use permissions::Permission;

pub mod predicates;
pub use predicates::Predicate;
