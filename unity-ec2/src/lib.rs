//! Unity EC2
//!
//! Adapters for the EC2 networking resources a Microbox environment is built
//! from. Every adapter follows the same contract: describe calls are scoped
//! to Microbox-managed resources by tag filter, creation is idempotent by
//! logical name, and response documents are projected into plain records.
//! The remote provider stays the only source of truth; nothing is cached
//! between calls.
//!
//! ## Module Structure
//!
//! - `gateway` - Internet gateway adapter
//! - `vpc` - VPC adapter
//! - `tags` - Microbox tagging and filter conventions

pub mod gateway;
pub mod tags;
pub mod vpc;

#[cfg(test)]
mod testing;

// Re-export main types
pub use gateway::{Gateway, GatewayRecord};
pub use vpc::{Vpc, VpcRecord};
