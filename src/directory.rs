//! The remote-directory capability consumed by path resolution.

use std::str::FromStr;

use async_trait::async_trait;
use serde_plain::forward_display_to_serde;

/// The error type produced by [`OrgDirectory`] implementations.
///
/// **Note:** for the AWS implementation this will always be some variant of
/// `SdkError`, but since those are generic over the type of service errors we
/// either need a variant per API used, or `Box`. If you do need to
/// programmatically match a particular API error you can use
/// [`Box::downcast`].
pub type DirectoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A narrow view of the AWS Organizations API.
///
/// This is the seam between path resolution and the remote service: exactly
/// the two operations the resolver needs, and nothing else. It is implemented
/// for [`aws_sdk_organizations::Client`] and for [`Client`](crate::Client),
/// and can be implemented over an in-memory tree for tests.
#[async_trait]
pub trait OrgDirectory: Send + Sync {
    /// List the immediate parent(s) of `child_id`.
    ///
    /// AWS Organizations enforces a single-parent tree, so a valid non-root
    /// child has exactly one parent. An empty list signals that the directory
    /// knows no parent for `child_id` (which is *not* interpreted as "this is
    /// the root" — see [`walk_parents`](crate::walk_parents)).
    ///
    /// # Errors
    ///
    /// Any error from the underlying `ListParents` call.
    async fn list_parents(&self, child_id: &str) -> Result<Vec<Parent>, DirectoryError>;

    /// Describe the organization that owns the calling account's tree.
    ///
    /// # Errors
    ///
    /// Any error from the underlying `DescribeOrganization` call.
    async fn describe_organization(&self) -> Result<Organization, DirectoryError>;
}

/// The immediate parent of an Organizations entity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parent {
    /// The ID of the parent entity.
    pub id: String,

    /// The type of the parent entity.
    pub r#type: ParentType,
}

impl Parent {
    pub(crate) fn from_sdk(parent: aws_sdk_organizations::types::Parent) -> Self {
        Self {
            id: parent.id.expect("Parent without id"),
            r#type: parent
                .r#type
                .expect("Parent without type")
                .as_str()
                .parse()
                .expect("Parent with unrecognized type"),
        }
    }
}

/// Possible parent entity types.
///
/// Accounts and organizational units are always parented by either the tree's
/// root or another organizational unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParentType {
    Root,
    OrganizationalUnit,
}

forward_display_to_serde!(ParentType);

impl FromStr for ParentType {
    type Err = InvalidParentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| InvalidParentType)
    }
}

/// An error marker returned when trying to parse an invalid parent type.
#[derive(Debug, Eq, PartialEq)]
pub struct InvalidParentType;

/// An organization — the container for an entire multi-account tree.
///
/// Only the ID is modeled; it is the leading segment of every principal path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Organization {
    /// The ID of the organization (`o-` prefixed).
    pub id: String,
}

impl Organization {
    pub(crate) fn from_sdk(organization: aws_sdk_organizations::types::Organization) -> Self {
        Self {
            id: organization.id.expect("Organization without id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_type() {
        // only two variants, so check them both.
        assert_eq!(format!("{}", ParentType::Root).as_str(), "ROOT");
        assert_eq!(
            format!("{}", ParentType::OrganizationalUnit).as_str(),
            "ORGANIZATIONAL_UNIT"
        );
        assert_eq!("ROOT".parse(), Ok(ParentType::Root));
        assert_eq!(
            "ORGANIZATIONAL_UNIT".parse(),
            Ok(ParentType::OrganizationalUnit)
        );
        assert_eq!("oh no".parse::<ParentType>(), Err(InvalidParentType));
    }
}
