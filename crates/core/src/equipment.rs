//! Equipment catalog records and API payloads
//!
//! This module contains the `Equipment` record served by the backend plus
//! the request/response shapes the API speaks: the create and partial
//! update payloads and the paged list envelope.

use serde::{Deserialize, Serialize};

use crate::types::{
    CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN, EquipmentId, LOCATION_MAX_LEN, TITLE_MAX_LEN,
};
use crate::validation::{FieldViolation, Rule, Validatable, check};

// ============================================================================
// Equipment
// ============================================================================

/// A single equipment record in the catalog
///
/// The backend owns these; the client holds transient copies for display
/// and editing. The only mutation path back is an update request, whose
/// response is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Unique identifier, assigned by the backend
    pub id: EquipmentId,

    /// Display title (required, up to 255 characters)
    pub title: String,

    /// Free-form description (optional, up to 255 characters)
    pub description: Option<String>,

    /// Catalog category, e.g. "Power Tools" (required, up to 100 characters)
    pub category: String,

    /// Storage location (required, up to 100 characters)
    pub location: String,
}

impl Equipment {
    /// Create a new record with a random id
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: EquipmentId::new_v4(),
            title: title.into(),
            description: None,
            category: category.into(),
            location: location.into(),
        }
    }

    /// Set the description, builder style
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Apply a partial update, overwriting only the fields it sets
    pub fn apply_update(&mut self, update: &EquipmentUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Payload for creating a new equipment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCreate {
    /// Display title (required)
    pub title: String,

    /// Free-form description
    pub description: Option<String>,

    /// Catalog category (required)
    pub category: String,

    /// Storage location (required)
    pub location: String,
}

impl EquipmentCreate {
    /// Create a payload with the required fields and no description
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: category.into(),
            location: location.into(),
        }
    }

    /// Set the description, builder style
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Payload for partially updating an existing record
///
/// Unset fields are omitted from the serialized body entirely, so the
/// server only touches the fields that are present. Constructed fresh
/// per submission from current form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentUpdate {
    /// New title, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New category, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// New location, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EquipmentUpdate {
    /// Create an empty update that touches nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.location.is_none()
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// One page of the equipment listing
///
/// `count` is the total number of records in the catalog, not the length
/// of `data`, so callers can show "N items" under a limited page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentsPage {
    /// Records in this page
    pub data: Vec<Equipment>,

    /// Total record count across all pages
    pub count: usize,
}

impl EquipmentsPage {
    /// An empty page
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            count: 0,
        }
    }
}

/// Plain confirmation message returned by delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Human-readable confirmation text
    pub message: String,
}

// ============================================================================
// Validation
// ============================================================================

/// Rules enforced on `title`, shared with the form layer
pub const TITLE_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(TITLE_MAX_LEN)];

/// Rules enforced on `description`
pub const DESCRIPTION_RULES: &[Rule] = &[Rule::MaxLength(DESCRIPTION_MAX_LEN)];

/// Rules enforced on `category`
pub const CATEGORY_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(CATEGORY_MAX_LEN)];

/// Rules enforced on `location`
pub const LOCATION_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(LOCATION_MAX_LEN)];

fn check_field(out: &mut Vec<FieldViolation>, field: &'static str, value: &str, rules: &[Rule]) {
    for error in check(value, rules) {
        out.push(FieldViolation::new(field, error));
    }
}

impl Validatable for EquipmentCreate {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        check_field(&mut violations, "title", &self.title, TITLE_RULES);
        if let Some(description) = &self.description {
            check_field(&mut violations, "description", description, DESCRIPTION_RULES);
        }
        check_field(&mut violations, "category", &self.category, CATEGORY_RULES);
        check_field(&mut violations, "location", &self.location, LOCATION_RULES);
        violations
    }
}

impl Validatable for EquipmentUpdate {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if let Some(title) = &self.title {
            check_field(&mut violations, "title", title, TITLE_RULES);
        }
        if let Some(description) = &self.description {
            check_field(&mut violations, "description", description, DESCRIPTION_RULES);
        }
        if let Some(category) = &self.category {
            check_field(&mut violations, "category", category, CATEGORY_RULES);
        }
        if let Some(location) = &self.location {
            check_field(&mut violations, "location", location, LOCATION_RULES);
        }
        violations
    }
}

// ============================================================================
// Tests
// ============================================================================
