//! Common wire payloads

use serde::{Deserialize, Serialize};

/// Soft-delete payload
///
/// The backend never hard-deletes; delete endpoints are PUTs carrying this
/// marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftDelete {
    pub is_deleted: bool,
}

impl Default for SoftDelete {
    fn default() -> Self {
        Self { is_deleted: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_delete_wire_shape() {
        let json = serde_json::to_value(SoftDelete::default()).unwrap();
        assert_eq!(json, serde_json::json!({"isDeleted": true}));
    }
}
