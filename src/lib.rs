#![warn(clippy::pedantic)]

//! Extension traits for `aws-sdk-organizations`.
//!
//! The main attraction is [`resolve_principal_org_path`][1], which computes the
//! slash-delimited "principal path" of an entity in an AWS Organizations tree
//! (the string IAM policy conditions such as `aws:PrincipalOrgPaths` match
//! against). The path is resolved by walking the parent chain upward via
//! `ListParents` until the root is reached, then prefixing the organization ID
//! obtained from `DescribeOrganization`:
//!
//! ```text
//! <organization-id>/<root-id>/<ou-1>/.../<ou-n>/<leaf-id>/
//! ```
//!
//! Remote calls go through the [`OrgDirectory`] trait, which is implemented
//! for [`aws_sdk_organizations::Client`] and is the natural seam for test
//! doubles.
//!
//! ```no_run
//! use organizatious::{Client, ResolvePathInput};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = aws_config::load_from_env().await;
//! let client = Client::new(&config);
//!
//! let output = client
//!     .resolve_principal_org_path(ResolvePathInput::new("ou-aaa111"))
//!     .await?;
//! println!("{}", output.path);
//! # Ok(())
//! # }
//! ```
//!
//! [1]: Organizatious::resolve_principal_org_path

mod aws;
mod client;
mod directory;
mod entity;
mod resolve_path;
mod walk;

pub use client::Client;
pub use directory::{
    DirectoryError, InvalidParentType, Organization, OrgDirectory, Parent, ParentType,
};
pub use entity::EntityKind;
pub use resolve_path::{Organizatious, ResolvePathError, ResolvePathInput, ResolvePathOutput};
pub use walk::walk_parents;
