//! VPC adapter
//!
//! Same contract as the gateway adapter, applied to VPCs. Records produced
//! here are what gateway attachment takes as input.

use serde_json::{Value, json};
use tracing::info;

use unity_core::document;
use unity_core::manager::{ApiError, ApiManager, ApiResult};

use crate::tags;

const DESCRIBE: &str = "DescribeVpcs";
const CREATE: &str = "CreateVpc";
const TAG: &str = "CreateTags";

/// Normalized view of a remote VPC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpcRecord {
    /// Provider-assigned identifier (`vpc-...`)
    pub id: String,
    /// Logical name from the `EnvName` tag, or [`tags::UNKNOWN_NAME`]
    pub name: String,
    /// IPv4 CIDR block, empty when the provider omits it
    pub cidr_block: String,
}

/// VPC operations over a query API manager
pub struct Vpc<M> {
    manager: M,
}

impl<M: ApiManager> Vpc<M> {
    /// Create an adapter that issues its calls through `manager`
    pub fn new(manager: M) -> Self {
        Self { manager }
    }

    /// List the VPCs managed by Microbox
    pub async fn list(&self) -> ApiResult<Vec<VpcRecord>> {
        let params = json!({ "Filter": tags::managed_filter() });
        let res = self.manager.call(DESCRIBE, params).await?;
        let body = document::envelope(&res, DESCRIBE)?;

        document::items(body.get("vpcSet"))
            .into_iter()
            .map(|raw| project(DESCRIBE, raw))
            .collect()
    }

    /// Find the first managed VPC carrying the given logical name
    pub async fn show(&self, name: &str) -> ApiResult<Option<VpcRecord>> {
        let vpcs = self.list().await?;
        Ok(vpcs.into_iter().find(|vpc| vpc.name == name))
    }

    /// Create a VPC named `name` over `cidr_block`, unless one already exists
    ///
    /// An existing VPC is returned as-is without touching the provider, its
    /// CIDR block left as found. Otherwise the VPC is created and tagged,
    /// and the projection of the raw creation response is returned; that
    /// response carries no tags yet, so its record reads as unnamed until
    /// the next describe.
    pub async fn create(&self, name: &str, cidr_block: &str) -> ApiResult<VpcRecord> {
        if let Some(existing) = self.show(name).await? {
            info!("VPC '{name}' already exists");
            return Ok(existing);
        }

        info!("Creating VPC '{name}'");
        let res = self
            .manager
            .call(CREATE, json!({ "CidrBlock": cidr_block }))
            .await?;
        let raw = document::envelope(&res, CREATE)?
            .get("vpc")
            .ok_or_else(|| ApiError::malformed(CREATE, "vpc"))?;
        let vpc = project(CREATE, raw)?;

        info!("Tagging VPC '{name}'");
        let params = json!({
            "ResourceId": vpc.id,
            "Tag": tags::resource_tags(name),
        });
        self.manager.call(TAG, params).await?;

        Ok(vpc)
    }
}

/// Project a raw VPC document into a [`VpcRecord`]
fn project(action: &str, raw: &Value) -> ApiResult<VpcRecord> {
    let id = raw
        .get("vpcId")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::malformed(action, "vpcId"))?;
    let name = document::tag_value(raw.get("tagSet"), tags::ENV_NAME_KEY)
        .unwrap_or(tags::UNKNOWN_NAME);
    let cidr_block = raw
        .get("cidrBlock")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(VpcRecord {
        id: id.to_string(),
        name: name.to_string(),
        cidr_block: cidr_block.to_string(),
    })
}
