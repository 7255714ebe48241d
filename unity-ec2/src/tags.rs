//! Microbox tagging and filter conventions
//!
//! Every resource Unity creates carries the same three tags: the ownership
//! marker, a human-readable display name, and the logical environment name
//! that lookups key on. Describe calls scope themselves with a filter on the
//! ownership marker so Unity never sees resources it does not manage.

use serde_json::{Value, json};

/// Tag key marking a resource as managed by Microbox
pub const MANAGED_KEY: &str = "Microbox";

/// Value of the ownership marker tag
pub const MANAGED_VALUE: &str = "true";

/// Tag key carrying the logical name resources are looked up by
pub const ENV_NAME_KEY: &str = "EnvName";

/// Tag key carrying the human-readable display name
pub const NAME_KEY: &str = "Name";

/// Fallback name for resources whose name tag is absent or unreadable
pub const UNKNOWN_NAME: &str = "unknown";

/// Filter list scoping a describe call to Microbox-managed resources
pub fn managed_filter() -> Value {
    json!([
        {
            "Name": format!("tag:{MANAGED_KEY}"),
            "Value": MANAGED_VALUE,
        }
    ])
}

/// Display name written into the `Name` tag
pub fn display_name(name: &str) -> String {
    format!("Microbox-Unity-{name}")
}

/// Tag list applied to every resource Unity creates
pub fn resource_tags(name: &str) -> Value {
    json!([
        {
            "Key": MANAGED_KEY,
            "Value": MANAGED_VALUE,
        },
        {
            "Key": NAME_KEY,
            "Value": display_name(name),
        },
        {
            "Key": ENV_NAME_KEY,
            "Value": name,
        },
    ])
}
