// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authorization core for the gloss annotation platform
//!
//! This crate answers one question: may this caller perform this permission
//! on this resource?  It is deliberately free of everything that surrounds
//! that question in the running service.  Callers authenticate the request,
//! load the rows the decision needs, and enforce the answer; this crate only
//! decides.
//!
//! The two halves mirror that split:
//!
//! - [`authn`] describes *who* is asking: the [`authn::Identity`] value
//!   built from verified credentials, and the derived principal tags some
//!   legacy collaborators still consume.
//! - [`authz`] describes *what they may do*: the permission vocabulary, the
//!   declarative permission table, and the [`authz::Engine`] that evaluates
//!   it.

pub mod authn;
pub mod authz;

/// Authority reserved for the first-party LMS integration service
///
/// The bulk annotation API is restricted to auth clients registered under
/// this authority.
pub const LMS_AUTHORITY: &str = "lms.gloss.app";
