//! Internet gateway adapter
//!
//! Wraps the query API's internet gateway actions behind idempotent,
//! tag-scoped operations. Gateways are looked up by their `EnvName` tag and
//! projected into plain [`GatewayRecord`]s computed fresh on every call.

use serde_json::{Value, json};
use tracing::info;

use unity_core::document;
use unity_core::manager::{ApiError, ApiManager, ApiResult};

use crate::tags;
use crate::vpc::VpcRecord;

const DESCRIBE: &str = "DescribeInternetGateways";
const CREATE: &str = "CreateInternetGateway";
const TAG: &str = "CreateTags";
const ATTACH: &str = "AttachInternetGateway";

/// Normalized view of a remote internet gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRecord {
    /// Provider-assigned identifier (`igw-...`)
    pub id: String,
    /// Logical name from the `EnvName` tag, or [`tags::UNKNOWN_NAME`]
    pub name: String,
    /// Identifiers of the VPCs the gateway was attached to when described
    pub attached_vpc_ids: Vec<String>,
}

/// Internet gateway operations over a query API manager
pub struct Gateway<M> {
    manager: M,
}

impl<M: ApiManager> Gateway<M> {
    /// Create an adapter that issues its calls through `manager`
    pub fn new(manager: M) -> Self {
        Self { manager }
    }

    /// List the internet gateways managed by Microbox
    ///
    /// Issues one describe call scoped by the ownership filter. An absent
    /// or empty collection yields an empty vector.
    pub async fn list(&self) -> ApiResult<Vec<GatewayRecord>> {
        let params = json!({ "Filter": tags::managed_filter() });
        let res = self.manager.call(DESCRIBE, params).await?;
        let body = document::envelope(&res, DESCRIBE)?;

        document::items(body.get("internetGatewaySet"))
            .into_iter()
            .map(|raw| project(DESCRIBE, raw))
            .collect()
    }

    /// Find the first managed gateway carrying the given logical name
    pub async fn show(&self, name: &str) -> ApiResult<Option<GatewayRecord>> {
        let gateways = self.list().await?;
        Ok(gateways.into_iter().find(|gateway| gateway.name == name))
    }

    /// Create an internet gateway named `name`, unless one already exists
    ///
    /// An existing gateway is returned as-is without touching the provider.
    /// Otherwise the gateway is created and tagged, and the projection of
    /// the raw creation response is returned; that response carries no tags
    /// and no attachments yet, so its record reads as unnamed and detached
    /// until the next describe.
    pub async fn create(&self, name: &str) -> ApiResult<GatewayRecord> {
        if let Some(existing) = self.show(name).await? {
            info!("Internet Gateway '{name}' already exists");
            return Ok(existing);
        }

        info!("Creating Internet Gateway '{name}'");
        let res = self.manager.call(CREATE, json!({})).await?;
        let raw = document::envelope(&res, CREATE)?
            .get("internetGateway")
            .ok_or_else(|| ApiError::malformed(CREATE, "internetGateway"))?;
        let gateway = project(CREATE, raw)?;

        info!("Tagging Internet Gateway '{name}'");
        let params = json!({
            "ResourceId": gateway.id,
            "Tag": tags::resource_tags(name),
        });
        self.manager.call(TAG, params).await?;

        Ok(gateway)
    }

    /// Attach a gateway to a VPC, reporting the provider's success flag
    ///
    /// The caller's `gateway` snapshot is trusted as-is: when it already
    /// lists `vpc`, the call is skipped and `true` is returned, so a stale
    /// snapshot can skip or repeat an attach.
    pub async fn attach(&self, vpc: &VpcRecord, gateway: &GatewayRecord) -> ApiResult<bool> {
        if gateway.attached_vpc_ids.iter().any(|id| id == &vpc.id) {
            info!(
                "Internet Gateway '{}' already attached to VPC '{}'",
                gateway.name, vpc.name
            );
            return Ok(true);
        }

        info!(
            "Attaching Internet Gateway '{}' to VPC '{}'",
            gateway.name, vpc.name
        );
        let params = json!({
            "InternetGatewayId": gateway.id,
            "VpcId": vpc.id,
        });
        let res = self.manager.call(ATTACH, params).await?;
        let body = document::envelope(&res, ATTACH)?;

        Ok(document::flag(body.get("return")))
    }
}

/// Project a raw gateway document into a [`GatewayRecord`]
///
/// The identifier must be present; name and attachments degrade to the
/// fallback name and an empty list instead of failing.
fn project(action: &str, raw: &Value) -> ApiResult<GatewayRecord> {
    let id = raw
        .get("internetGatewayId")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::malformed(action, "internetGatewayId"))?;
    let name = document::tag_value(raw.get("tagSet"), tags::ENV_NAME_KEY)
        .unwrap_or(tags::UNKNOWN_NAME);

    Ok(GatewayRecord {
        id: id.to_string(),
        name: name.to_string(),
        attached_vpc_ids: attached_vpc_ids(raw.get("attachmentSet")),
    })
}

/// Collect attached VPC identifiers from a possibly absent attachment set
fn attached_vpc_ids(set: Option<&Value>) -> Vec<String> {
    document::items(set)
        .into_iter()
        .filter_map(|attachment| attachment.get("vpcId").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}
