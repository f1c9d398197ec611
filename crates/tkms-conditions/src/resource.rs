//! # Signing Resource Identifier
//!
//! A flat record naming the resource a signing request is scoped to. It has
//! no nested children and no operator structure; its digest binds a signed
//! payload to one resource.

use serde::{Deserialize, Serialize};

/// Identifier for a resource a client may request signatures over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    /// Base URL of the protected resource.
    pub base_url: String,
    /// Path below the base URL.
    pub path: String,
    /// Organization identifier; empty when unused.
    pub org_id: String,
    /// Role the requester claims; empty when unused.
    pub role: String,
    /// Free-form extra data bound into the digest.
    pub extra_data: String,
}
