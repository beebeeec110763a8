// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building and taking apart compound user keys
//!
//! Every user on the platform is identified by a compound key of the form
//! `acct:{username}@{authority}`.  The authority half names the organization
//! that vouches for the account (for first-party accounts it's the public
//! service's own domain; third-party integrations bring their own).  The
//! compound form is what gets stored on annotations and handed to external
//! consumers, so the two halves need to round-trip exactly.

use thiserror::Error;

/// Prefix that marks a string as a compound user key
pub const USERID_PREFIX: &str = "acct:";

/// Error returned when parsing a string that is not a well-formed userid
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid userid {userid:?}")]
pub struct InvalidUserid {
    pub userid: String,
}

/// Builds the compound userid for `username` in `authority`
///
/// The inverse of [`split_userid`].
pub fn format_userid(username: &str, authority: &str) -> String {
    format!("{}{}@{}", USERID_PREFIX, username, authority)
}

/// Splits a compound userid into its `(username, authority)` halves
///
/// The username is everything between the `acct:` prefix and the first `@`
/// and must be non-empty.  The authority is everything after that `@`.  The
/// platform's authorities are DNS names, but this function does not enforce
/// that.
pub fn split_userid(userid: &str) -> Result<(&str, &str), InvalidUserid> {
    let error = || InvalidUserid { userid: userid.to_string() };
    let rest = userid.strip_prefix(USERID_PREFIX).ok_or_else(error)?;
    let (username, authority) = rest.split_once('@').ok_or_else(error)?;
    if username.is_empty() {
        return Err(error());
    }
    Ok((username, authority))
}
