//! Indexed-search service integration (`searchIntegration`).
//!
//! Absent section means search is disabled; when present, both the API key
//! and the index name are required.

use serde::{Deserialize, Serialize};

use crate::config::raw::RawObject;
use crate::config::types::ConfigDiagnostics;

/// Third-party indexed-search credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Search service API key.
    pub api_key: String,
    /// Name of the index holding this site's pages.
    pub index_name: String,
}

impl SearchConfig {
    pub(crate) fn parse(obj: &RawObject<'_>, diag: &mut ConfigDiagnostics) -> Option<Self> {
        // Read both fields before bailing so one pass reports both problems
        let api_key = obj.require_str("apiKey", diag);
        let index_name = obj.require_str("indexName", diag);
        Some(Self {
            api_key: api_key?,
            index_name: index_name?,
        })
    }
}
