// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared value types for the gloss annotation platform
//!
//! These are the domain values that flow between the platform's subsystems:
//! users, groups, annotations and registered auth clients.  They are plain
//! owned structs capturing just the fields that downstream consumers (most
//! notably the `gloss-auth` authorization crate) need to look at.  They are
//! *views*, not records: the storage layer owns the full rows and constructs
//! these from them.  Nothing here talks to a database or performs I/O.
//!
//! All of these types serialize with serde because the platform ships them
//! through job queues and session stores.

pub mod annotation;
pub mod auth_client;
pub mod group;
pub mod membership;
pub mod user;
pub mod userid;
