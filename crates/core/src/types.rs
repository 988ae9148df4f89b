//! Core types used throughout Kitbase
//!
//! This module contains the fundamental identifier and limit types shared
//! by the domain model, the API client, and the UI form layer.

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for equipment record unique identifiers
///
/// Ids are assigned by the backend; the client treats them as opaque and
/// only ever echoes them back in request paths.
pub type EquipmentId = uuid::Uuid;

// ============================================================================
// Field Limits
// ============================================================================
//
// Server-enforced lengths, mirrored here so the client can reject values
// before a request is made. Lengths are counted in characters.

/// Maximum length of an equipment title
pub const TITLE_MAX_LEN: usize = 255;

/// Maximum length of an equipment description
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// Maximum length of an equipment category
pub const CATEGORY_MAX_LEN: usize = 100;

/// Maximum length of an equipment location
pub const LOCATION_MAX_LEN: usize = 100;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_id_is_opaque_uuid() {
        let id = EquipmentId::new_v4();
        let text = id.to_string();
        let parsed: EquipmentId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_limits_match_catalog_schema() {
        assert_eq!(TITLE_MAX_LEN, 255);
        assert_eq!(DESCRIPTION_MAX_LEN, 255);
        assert_eq!(CATEGORY_MAX_LEN, 100);
        assert_eq!(LOCATION_MAX_LEN, 100);
    }
}
