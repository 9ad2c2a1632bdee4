//! The upward parent-chain walk.

use async_stream::try_stream;
use futures_util::Stream;
use tracing::debug;

use crate::{
    directory::{OrgDirectory, Parent, ParentType},
    entity::EntityKind,
    resolve_path::ResolvePathError,
};

/// Walk the parent chain of `child_id` upward to the root.
///
/// The returned stream queries the directory lazily, one `ListParents` call
/// per item, and yields each discovered ancestor in leaf-to-root order. The
/// stream ends after yielding the `ROOT`-typed parent. The walk is inherently
/// sequential: the next ID to query is only known once the previous response
/// has arrived.
///
/// Each item is a `Result`, since any `ListParents` call might fail:
///
/// - An upstream error ends the stream with [`ResolvePathError::ListParents`],
///   recording the ID whose parents were being listed.
/// - An empty parent list ends the stream with
///   [`ResolvePathError::NoParentFound`]. Organizations enforces a
///   single-parent tree, so a valid non-root child always has a parent; the
///   real API reports an *error* (not an empty list) when asked for the
///   parents of the root itself, and a mock directory modelling the root with
///   an empty parent list gets the same treatment.
///
/// The stream imposes no iteration cap and performs no cycle detection: a
/// directory that never reports a `ROOT` parent produces an unbounded stream.
/// [`resolve_principal_org_path`][1] offers an optional depth guard on top.
///
/// [1]: crate::Organizatious::resolve_principal_org_path
pub fn walk_parents<D>(
    directory: &D,
    child_id: impl Into<String>,
) -> impl Stream<Item = Result<Parent, ResolvePathError>> + '_
where
    D: OrgDirectory + ?Sized,
{
    let mut current_id = child_id.into();
    try_stream! {
        loop {
            let parents = directory
                .list_parents(&current_id)
                .await
                .map_err(|source| ResolvePathError::ListParents {
                    child_id: current_id.clone(),
                    source,
                })?;
            let parent = parents
                .into_iter()
                .next()
                .ok_or_else(|| ResolvePathError::NoParentFound {
                    child_id: current_id.clone(),
                })?;

            debug!(
                child_id = %current_id,
                child_kind = ?EntityKind::of(&current_id),
                parent_id = %parent.id,
                parent_type = %parent.r#type,
                "discovered parent"
            );

            let is_root = parent.r#type == ParentType::Root;
            current_id.clone_from(&parent.id);
            yield parent;

            if is_root {
                return;
            }
        }
    }
}
