use async_trait::async_trait;
use aws_config::SdkConfig;

use crate::{
    directory::{DirectoryError, Organization, OrgDirectory, Parent},
    resolve_path::{ResolvePathError, ResolvePathInput, ResolvePathOutput},
};

/// A client for performing Organizations path resolution.
///
/// This is a thin wrapper around [`aws_sdk_organizations::Client`]. It
/// implements [`OrgDirectory`], so it can be used anywhere the directory seam
/// is accepted, and it exposes the resolution operation as an inherent method
/// so no trait import is needed:
///
/// ```no_run
/// use organizatious::{Client, ResolvePathInput};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = aws_config::load_from_env().await;
/// let client = Client::new(&config);
/// let output = client
///     .resolve_principal_org_path(ResolvePathInput::new("123456789012"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: aws_sdk_organizations::Client,
}

impl Client {
    /// Construct a client from an AWS SDK configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: aws_sdk_organizations::Client::new(config),
        }
    }

    /// Resolve the principal org path for the entity named by `input`.
    ///
    /// See [`Organizatious::resolve_principal_org_path`][1] for the full
    /// contract.
    ///
    /// # Errors
    ///
    /// See [`ResolvePathError`] for details.
    ///
    /// [1]: crate::Organizatious::resolve_principal_org_path
    pub async fn resolve_principal_org_path(
        &self,
        input: ResolvePathInput,
    ) -> Result<ResolvePathOutput, ResolvePathError> {
        crate::resolve_path::resolve(&self.inner, input).await
    }
}

#[async_trait]
impl OrgDirectory for Client {
    async fn list_parents(&self, child_id: &str) -> Result<Vec<Parent>, DirectoryError> {
        OrgDirectory::list_parents(&self.inner, child_id).await
    }

    async fn describe_organization(&self) -> Result<Organization, DirectoryError> {
        OrgDirectory::describe_organization(&self.inner).await
    }
}
