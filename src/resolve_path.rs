//! An operation to resolve an entity's principal org path.

use std::fmt;

use async_trait::async_trait;
use futures_util::{pin_mut, TryStreamExt};
use tracing::debug;

use crate::{
    directory::{DirectoryError, OrgDirectory, ParentType},
    walk::walk_parents,
};

/// The input for a `resolve_principal_org_path` operation.
///
/// You can create an input via the [`new`](Self::new) associated function. A
/// setter is available for the optional depth guard.
///
/// ```
/// use organizatious::ResolvePathInput;
///
/// let input = ResolvePathInput::new("ou-aaa111").set_max_depth(32);
/// ```
#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ResolvePathInput {
    /// The ID of the entity whose path is being resolved.
    ///
    /// No format validation is performed: an invalid or nonexistent ID
    /// surfaces as an upstream error or a no-parent condition from the
    /// directory.
    pub child_id: String,

    /// An optional upper bound on the number of organizational units the walk
    /// may pass through before reaching the root.
    ///
    /// Unset by default: the real API cannot produce cycles, so an unbounded
    /// walk always terminates. Setting a bound guards against a misbehaving
    /// directory implementation (a broken mock, say) looping forever.
    pub max_depth: Option<usize>,
}

impl ResolvePathInput {
    /// Construct an input for the given `child_id`.
    pub fn new(child_id: impl Into<String>) -> Self {
        Self {
            child_id: child_id.into(),
            max_depth: None,
        }
    }

    /// Set the value for `max_depth`.
    ///
    /// **Note:** this consumes and returns `self` for chaining.
    #[must_use]
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// The output of a `resolve_principal_org_path` operation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub struct ResolvePathOutput {
    /// The ID of the organization owning the tree.
    pub organization_id: String,

    /// The ID of the tree's root.
    pub root_id: String,

    /// The assembled principal path.
    ///
    /// Slash-separated, root-to-leaf, with a trailing slash:
    /// `<organization-id>/<root-id>/<ou-1>/.../<leaf-id>/`. If the resolved
    /// entity is the root itself this degenerates to
    /// `<organization-id>/<root-id>/` (the root appears once, not twice).
    pub path: String,
}

impl fmt::Display for ResolvePathOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Errors emitted by a `resolve_principal_org_path` operation.
///
/// All variants are terminal: the operation returns no partial or degraded
/// result, and performs no retries of its own. Callers wanting resilience
/// against transient upstream failures should wrap the directory they pass
/// in.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ResolvePathError {
    /// A `ListParents` call returned an error.
    #[error("ListParents error for {child_id}: {source}")]
    ListParents {
        /// The ID whose parents were being listed when the call failed.
        child_id: String,

        /// The underlying directory error.
        source: DirectoryError,
    },

    /// A `ListParents` call returned no parents.
    ///
    /// Every non-root entity in a well-formed tree has exactly one parent, so
    /// this indicates either that the walk was started *on* the root itself,
    /// or that the directory's consistency guarantee was violated.
    #[error("no parent found for {child_id}")]
    NoParentFound {
        /// The ID for which no parent was reported.
        child_id: String,
    },

    /// The `DescribeOrganization` call returned an error after the root was
    /// reached.
    #[error("DescribeOrganization error: {0}")]
    DescribeOrganization(#[source] DirectoryError),

    /// The depth guard configured via
    /// [`ResolvePathInput::set_max_depth`] tripped before the root was
    /// reached.
    #[error("parent chain for {child_id} exceeded {max_depth} organizational units")]
    MaxDepthExceeded {
        /// The ID the walk started from.
        child_id: String,

        /// The configured bound.
        max_depth: usize,
    },
}

/// An extension trait offering principal path resolution over any
/// [`OrgDirectory`].
///
/// The trait is blanket-implemented, so bringing it into scope is all that's
/// needed:
///
/// ```no_run
/// use organizatious::{Organizatious, ResolvePathInput};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = aws_config::load_from_env().await;
/// let client = aws_sdk_organizations::Client::new(&config);
///
/// let output = client
///     .resolve_principal_org_path(ResolvePathInput::new("123456789012"))
///     .await?;
/// assert!(output.path.ends_with("/123456789012/"));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Organizatious: OrgDirectory {
    /// Resolve the canonical principal path of the entity named by `input`.
    ///
    /// This walks the parent chain upward with one `ListParents` call per
    /// level until a `ROOT`-typed parent is reached, then calls
    /// `DescribeOrganization` exactly once and assembles the path. The walk
    /// is read-only and holds no state between calls; cancelling (dropping)
    /// the returned future aborts it with nothing to clean up.
    ///
    /// # Errors
    ///
    /// Any upstream failure, a missing parent anywhere in the chain, or a
    /// tripped depth guard aborts the whole operation. See
    /// [`ResolvePathError`] for the taxonomy. The error messages name the
    /// entity on which the walk failed, so an operator can locate the
    /// offending spot in the tree.
    async fn resolve_principal_org_path(
        &self,
        input: ResolvePathInput,
    ) -> Result<ResolvePathOutput, ResolvePathError>;
}

#[async_trait]
impl<T> Organizatious for T
where
    T: OrgDirectory + ?Sized,
{
    async fn resolve_principal_org_path(
        &self,
        input: ResolvePathInput,
    ) -> Result<ResolvePathOutput, ResolvePathError> {
        resolve(self, input).await
    }
}

pub(crate) async fn resolve<D>(
    directory: &D,
    input: ResolvePathInput,
) -> Result<ResolvePathOutput, ResolvePathError>
where
    D: OrgDirectory + ?Sized,
{
    let child_id = input.child_id;

    // Collected leaf-to-root and reversed once at the end.
    let mut segments = vec![child_id.clone()];
    let mut root_id = None;

    let parents = walk_parents(directory, child_id.clone());
    pin_mut!(parents);

    let mut depth = 0;
    while let Some(parent) = parents.try_next().await? {
        match parent.r#type {
            ParentType::Root => {
                root_id = Some(parent.id);
                break;
            }
            ParentType::OrganizationalUnit => {
                depth += 1;
                if let Some(max_depth) = input.max_depth {
                    if depth > max_depth {
                        return Err(ResolvePathError::MaxDepthExceeded {
                            child_id,
                            max_depth,
                        });
                    }
                }
                segments.push(parent.id);
            }
        }
    }
    let root_id = root_id.expect("parent walk ended without reaching the root");

    // Only reached once the root has been observed.
    let organization = directory
        .describe_organization()
        .await
        .map_err(ResolvePathError::DescribeOrganization)?;

    // A directory that models the root as its own parent would otherwise
    // duplicate the root segment.
    if segments.last() == Some(&root_id) {
        segments.pop();
    }
    segments.reverse();

    let mut path = format!("{}/{}/", organization.id, root_id);
    for segment in &segments {
        path.push_str(segment);
        path.push('/');
    }

    debug!(%path, "resolved principal org path");

    Ok(ResolvePathOutput {
        organization_id: organization.id,
        root_id,
        path,
    })
}
