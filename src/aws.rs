//! [`OrgDirectory`] implementation for the AWS SDK client.

use async_trait::async_trait;

use crate::directory::{DirectoryError, Organization, OrgDirectory, Parent};

#[async_trait]
impl OrgDirectory for aws_sdk_organizations::Client {
    async fn list_parents(&self, child_id: &str) -> Result<Vec<Parent>, DirectoryError> {
        // No pagination: a valid child has exactly one parent, and only the
        // first element is ever consumed.
        let output = self
            .list_parents()
            .child_id(child_id)
            .send()
            .await
            .map_err(DirectoryError::from)?;
        Ok(output
            .parents
            .unwrap_or_default()
            .into_iter()
            .map(Parent::from_sdk)
            .collect())
    }

    async fn describe_organization(&self) -> Result<Organization, DirectoryError> {
        let output = self
            .describe_organization()
            .send()
            .await
            .map_err(DirectoryError::from)?;
        Ok(Organization::from_sdk(
            output
                .organization
                .expect("DescribeOrganizationOutput without organization"),
        ))
    }
}
