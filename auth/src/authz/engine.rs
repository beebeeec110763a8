// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Permission evaluation
//!
//! For important background, see the [`crate::authz`] module
//! documentation.  This module holds the engine itself: construction-time
//! validation and expansion of the permission table, and the memoized
//! evaluation walk over its clauses.

use super::context::Context;
use super::permission_map::Clause;
use super::permission_map::ClauseElement;
use super::permission_map::PermissionMap;
use super::permissions::Permission;
use super::predicates::Predicate;
use crate::authn::Identity;
use slog::o;
use slog::trace;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Problems found in a permission table while building an [`Engine`]
///
/// All of these are bugs in the supplied table.  They are reported at
/// construction time precisely so that evaluation never has to.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BuildError {
    #[error("clause for {permission} references unmapped {reference}")]
    UnmappedReference { permission: Permission, reference: Permission },
    #[error("permission references cycle back to {permission}")]
    CircularReference { permission: Permission },
    #[error("requires chain of predicate {predicate:?} cycles")]
    CircularRequires { predicate: &'static str },
    #[error("two distinct predicates share the name {name:?}")]
    DuplicatePredicateName { name: &'static str },
}

/// The outcome of a permission check
///
/// Carries a human-readable reason for log lines and diagnostics.  Callers
/// that only branch use [`Decision::is_allowed`] or the `bool` conversion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    Allowed(String),
    Denied(String),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Denied(_))
    }

    pub fn reason(&self) -> &str {
        match self {
            Decision::Allowed(reason) | Decision::Denied(reason) => reason,
        }
    }
}

impl From<Decision> for bool {
    fn from(decision: Decision) -> bool {
        decision.is_allowed()
    }
}

/// Evaluates permissions against a validated table
///
/// The engine is built once, is immutable afterwards, and does no I/O, so
/// one instance is shared across all request-handling tasks (typically in
/// an `Arc`).
pub struct Engine {
    log: slog::Logger,
    map: PermissionMap,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("permissions", &self.map.len())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Builds an engine that enforces the shipped permission table
    ///
    /// # Panics
    ///
    /// Panics if the shipped table fails validation.  That table is fixed
    /// at compile time, so a failure here is a bug in the table itself,
    /// not a condition the caller can handle.
    pub fn new(log: &slog::Logger) -> Engine {
        Engine::with_map(log, PermissionMap::default_map())
            .expect("shipped permission table is well formed")
    }

    /// Builds an engine that enforces a caller-supplied permission table
    pub fn with_map(
        log: &slog::Logger,
        map: PermissionMap,
    ) -> Result<Engine, BuildError> {
        check_predicate_names(&map)?;
        check_references(&map)?;
        let mut expanded = PermissionMap::new();
        for (permission, clauses) in map.iter() {
            let clauses = clauses
                .iter()
                .map(expand_clause)
                .collect::<Result<Vec<Clause>, BuildError>>()?;
            expanded.insert(permission, clauses);
        }
        Ok(Engine {
            log: log.new(o!("component" => "authz")),
            map: expanded,
        })
    }

    /// Decides whether `identity` may exercise `permission` on `context`
    ///
    /// A permission with no entry, or an entry with no clauses, is denied.
    /// Each predicate is evaluated at most once per call: results are
    /// memoized across clauses and across nested permission references,
    /// which is sound because predicates are pure.
    pub fn permits(
        &self,
        identity: Option<&Identity>,
        context: &Context<'_>,
        permission: Permission,
    ) -> Decision {
        let mut memo = BTreeMap::new();
        let decision = self.evaluate(identity, context, permission, &mut memo);
        trace!(
            self.log,
            "authorization decision";
            "permission" => %permission,
            "granted" => decision.is_allowed(),
            "reason" => decision.reason(),
        );
        decision
    }

    /// Like [`Engine::permits`], for callers that only need the yes/no
    pub fn allows(
        &self,
        identity: Option<&Identity>,
        context: &Context<'_>,
        permission: Permission,
    ) -> bool {
        self.permits(identity, context, permission).is_allowed()
    }

    fn evaluate(
        &self,
        identity: Option<&Identity>,
        context: &Context<'_>,
        permission: Permission,
        memo: &mut BTreeMap<MemoKey, bool>,
    ) -> Decision {
        let Some(clauses) = self.map.get(permission) else {
            return Decision::Denied(format!(
                "permission {} is not mapped",
                permission
            ));
        };
        for clause in clauses {
            if self.clause_holds(identity, context, clause, memo) {
                let labels = clause
                    .iter()
                    .map(ClauseElement::label)
                    .collect::<Vec<_>>()
                    .join(" AND ");
                return Decision::Allowed(format!(
                    "{} allowed by clause [{}]",
                    permission, labels
                ));
            }
        }
        Decision::Denied(format!("no clause of {} satisfied", permission))
    }

    fn clause_holds(
        &self,
        identity: Option<&Identity>,
        context: &Context<'_>,
        clause: &Clause,
        memo: &mut BTreeMap<MemoKey, bool>,
    ) -> bool {
        clause
            .iter()
            .all(|element| self.element_holds(identity, context, element, memo))
    }

    fn element_holds(
        &self,
        identity: Option<&Identity>,
        context: &Context<'_>,
        element: &ClauseElement,
        memo: &mut BTreeMap<MemoKey, bool>,
    ) -> bool {
        match element {
            ClauseElement::Predicate(predicate) => {
                let key = MemoKey::Predicate(predicate.name);
                if let Some(&held) = memo.get(&key) {
                    return held;
                }
                let held = (predicate.check)(identity, context);
                trace!(
                    self.log,
                    "evaluated predicate";
                    "predicate" => predicate.name,
                    "held" => held,
                );
                memo.insert(key, held);
                held
            }
            ClauseElement::Permission(permission) => {
                let key = MemoKey::Permission(*permission);
                if let Some(&held) = memo.get(&key) {
                    return held;
                }
                let held = self
                    .evaluate(identity, context, *permission, memo)
                    .is_allowed();
                memo.insert(key, held);
                held
            }
        }
    }
}

/// Memoization key for one evaluated clause element
///
/// Predicates are keyed by name (validated unique), nested references by
/// permission value.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum MemoKey {
    Predicate(&'static str),
    Permission(Permission),
}

/// Rejects tables in which two distinct predicates share a name
///
/// Names key the memo table during evaluation, so they must identify their
/// predicate uniquely.
fn check_predicate_names(map: &PermissionMap) -> Result<(), BuildError> {
    let mut by_name = BTreeMap::new();
    for (_, clauses) in map.iter() {
        for clause in clauses {
            for element in clause {
                if let ClauseElement::Predicate(predicate) = *element {
                    note_predicate(predicate, &mut by_name)?;
                }
            }
        }
    }
    Ok(())
}

fn note_predicate(
    predicate: &'static Predicate,
    by_name: &mut BTreeMap<&'static str, &'static Predicate>,
) -> Result<(), BuildError> {
    match by_name.entry(predicate.name) {
        Entry::Vacant(entry) => {
            entry.insert(predicate);
        }
        Entry::Occupied(entry) => {
            if std::ptr::eq(*entry.get(), predicate) {
                // Seen before; its requires were walked then.
                return Ok(());
            }
            return Err(BuildError::DuplicatePredicateName {
                name: predicate.name,
            });
        }
    }
    for required in predicate.requires {
        note_predicate(required, by_name)?;
    }
    Ok(())
}

/// Rejects tables whose permission references dangle or cycle
///
/// A dangling reference would be silently denied at evaluation time
/// (fail-closed), which in a shipped table could only be a bug.  A
/// reference cycle would evaluate forever.
fn check_references(map: &PermissionMap) -> Result<(), BuildError> {
    for (permission, clauses) in map.iter() {
        for clause in clauses {
            for element in clause {
                if let ClauseElement::Permission(reference) = element {
                    if !map.contains(*reference) {
                        return Err(BuildError::UnmappedReference {
                            permission,
                            reference: *reference,
                        });
                    }
                }
            }
        }
    }
    for (permission, _) in map.iter() {
        check_reference_cycle(map, permission, &mut Vec::new())?;
    }
    Ok(())
}

fn check_reference_cycle(
    map: &PermissionMap,
    permission: Permission,
    trail: &mut Vec<Permission>,
) -> Result<(), BuildError> {
    if trail.contains(&permission) {
        return Err(BuildError::CircularReference { permission });
    }
    trail.push(permission);
    if let Some(clauses) = map.get(permission) {
        for clause in clauses {
            for element in clause {
                if let ClauseElement::Permission(reference) = element {
                    check_reference_cycle(map, *reference, trail)?;
                }
            }
        }
    }
    trail.pop();
    Ok(())
}

/// Expands one clause by inlining predicate `requires` parents
///
/// Parents land ahead of the predicates that need them, deduplicated
/// within the clause in first-seen order.  Permission references pass
/// through untouched.  Expanding an already-expanded clause changes
/// nothing.
fn expand_clause(clause: &Clause) -> Result<Clause, BuildError> {
    let mut expanded = Vec::new();
    let mut seen = BTreeSet::new();
    for element in clause {
        match *element {
            ClauseElement::Predicate(predicate) => {
                push_with_requires(
                    predicate,
                    &mut expanded,
                    &mut seen,
                    &mut Vec::new(),
                )?;
            }
            ClauseElement::Permission(permission) => {
                expanded.push(ClauseElement::Permission(permission));
            }
        }
    }
    Ok(expanded)
}

fn push_with_requires(
    predicate: &'static Predicate,
    expanded: &mut Clause,
    seen: &mut BTreeSet<&'static str>,
    in_progress: &mut Vec<&'static str>,
) -> Result<(), BuildError> {
    if in_progress.contains(&predicate.name) {
        return Err(BuildError::CircularRequires { predicate: predicate.name });
    }
    if seen.contains(predicate.name) {
        return Ok(());
    }
    in_progress.push(predicate.name);
    for required in predicate.requires {
        push_with_requires(required, expanded, seen, in_progress)?;
    }
    in_progress.pop();
    seen.insert(predicate.name);
    expanded.push(ClauseElement::Predicate(predicate));
    Ok(())
}
