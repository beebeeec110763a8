// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The closed set of permissions the platform enforces
//!
//! Permissions are namespaced by the area of the product they guard.  Every
//! enforcement point in the surrounding service names one of these values;
//! the permission table (see [`crate::authz::PermissionMap`]) says what it
//! takes to be granted each one.  Rendering a permission with `Display`
//! produces the stable `area:name` form used in decision reasons and log
//! records, e.g. `group:read` or `admin_page:oauth_clients`.

use std::fmt;
use strum::EnumIter;
use strum::IntoEnumIterator;

/// Pages of the staff-facing admin interface
///
/// `HighRisk` and `LowRisk` are the umbrella permissions newer admin pages
/// are registered under; the named pages predate them.
#[derive(
    Clone,
    Copy,
    Debug,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum AdminPage {
    Index,
    Admins,
    Badge,
    Features,
    Groups,
    Mailer,
    Nipsa,
    OauthClients,
    Organizations,
    Staff,
    Users,
    Search,
    HighRisk,
    LowRisk,
}

/// Operations on user accounts, exposed to auth clients
#[derive(
    Clone,
    Copy,
    Debug,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum User {
    Create,
    Update,
    Read,
}

/// Operations on the bulk API
#[derive(
    Clone,
    Copy,
    Debug,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Api {
    BulkAction,
}

/// Operations on the caller's own profile
#[derive(
    Clone,
    Copy,
    Debug,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Profile {
    Update,
}

/// Operations on groups and their membership
#[derive(
    Clone,
    Copy,
    Debug,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Group {
    Create,
    Write,
    Join,
    Read,
    MemberRead,
    Flag,
    Admin,
    MemberAdd,
    Moderate,
    Upsert,
}

/// Operations on annotations
#[derive(
    Clone,
    Copy,
    Debug,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Annotation {
    Create,
    ReadRealtimeUpdates,
    Read,
    Flag,
    Moderate,
    Update,
    Delete,
}

/// A permission that can be checked against an identity and a context
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Permission {
    AdminPage(AdminPage),
    User(User),
    Api(Api),
    Profile(Profile),
    Group(Group),
    Annotation(Annotation),
}

impl Permission {
    /// Returns an iterator over every permission the platform defines.
    ///
    /// This is provided as a helper so dependent packages don't have to
    /// pull in strum explicitly.
    pub fn iter() -> impl Iterator<Item = Permission> {
        AdminPage::iter()
            .map(Permission::AdminPage)
            .chain(User::iter().map(Permission::User))
            .chain(Api::iter().map(Permission::Api))
            .chain(Profile::iter().map(Permission::Profile))
            .chain(Group::iter().map(Permission::Group))
            .chain(Annotation::iter().map(Permission::Annotation))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::AdminPage(page) => write!(f, "admin_page:{}", page),
            Permission::User(operation) => write!(f, "user:{}", operation),
            Permission::Api(operation) => write!(f, "api:{}", operation),
            Permission::Profile(operation) => {
                write!(f, "profile:{}", operation)
            }
            Permission::Group(operation) => write!(f, "group:{}", operation),
            Permission::Annotation(operation) => {
                write!(f, "annotation:{}", operation)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::AdminPage;
    use super::Annotation;
    use super::Group;
    use super::Permission;
    use std::collections::BTreeSet;

    #[test]
    fn test_display_uses_stable_area_name_form() {
        assert_eq!(
            Permission::AdminPage(AdminPage::OauthClients).to_string(),
            "admin_page:oauth_clients"
        );
        assert_eq!(
            Permission::AdminPage(AdminPage::HighRisk).to_string(),
            "admin_page:high_risk"
        );
        assert_eq!(Permission::Group(Group::Read).to_string(), "group:read");
        assert_eq!(
            Permission::Annotation(Annotation::ReadRealtimeUpdates).to_string(),
            "annotation:read_realtime_updates"
        );
    }

    #[test]
    fn test_iter_covers_every_permission_once() {
        let all: Vec<Permission> = Permission::iter().collect();
        assert_eq!(all.len(), 36);
        let unique: BTreeSet<Permission> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
        // Display strings are the stable external names, so they must be
        // unique too.
        let names: BTreeSet<String> =
            all.iter().map(|p| p.to_string()).collect();
        assert_eq!(names.len(), all.len());
    }
}
