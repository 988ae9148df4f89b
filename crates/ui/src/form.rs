//! # Form State
//!
//! Pure form models backing the equipment dialogs.
//!
//! This module provides:
//! - **FieldState**: a single text field with its initial snapshot,
//!   touched flag, and current validation error
//! - **EditEquipmentForm**: form state for editing an existing record
//! - **AddEquipmentForm**: form state for creating a new record
//!
//! Validation follows the touched-field convention: a field shows no
//! error until it has been blurred once, and from then on every change
//! re-evaluates all of its rules. Submit gating does not depend on the
//! touched flags, so an untouched invalid field still blocks submission.
//!
//! Nothing in here talks to the network or to Dioxus; the dialogs own a
//! copy of these structs inside a signal and drive them from events.

use kitbase_core::equipment::{
    CATEGORY_RULES, DESCRIPTION_RULES, LOCATION_RULES, TITLE_RULES,
};
use kitbase_core::validation::{FieldError, Rule, check};
use kitbase_core::{Equipment, EquipmentCreate, EquipmentId, EquipmentUpdate};

// ============================================================================
// Field State
// ============================================================================

/// A single editable text field
///
/// Holds the current value next to the snapshot it was seeded from, so
/// dirtiness is a comparison rather than a flag that can drift. The error
/// slot holds at most one error, the first failing rule from the latest
/// validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    /// Current value as typed
    pub value: String,

    /// Value the field was seeded with
    initial: String,

    /// Rules evaluated on blur and on edits after the first blur
    rules: &'static [Rule],

    /// Whether the field has been blurred at least once
    pub touched: bool,

    /// Latest validation failure, if any
    pub error: Option<FieldError>,
}

impl FieldState {
    /// Create an empty field with the given rules
    pub fn new(rules: &'static [Rule]) -> Self {
        Self::seeded("", rules)
    }

    /// Create a field seeded from an existing value
    pub fn seeded(initial: impl Into<String>, rules: &'static [Rule]) -> Self {
        let initial = initial.into();
        Self {
            value: initial.clone(),
            initial,
            rules,
            touched: false,
            error: None,
        }
    }

    /// Replace the value from an input event
    ///
    /// Once the field has been touched, every change re-runs all of its
    /// rules so the error slot tracks the value as the user types.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.touched {
            self.validate();
        }
    }

    /// Mark the field touched and validate it
    pub fn blur(&mut self) {
        self.touched = true;
        self.validate();
    }

    /// Restore the seeded value and clear touched state and errors
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.touched = false;
        self.error = None;
    }

    /// Whether the value differs from the seeded snapshot
    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }

    /// Whether the current value passes all rules
    ///
    /// Independent of the touched flag; an untouched invalid field is
    /// still invalid, it just does not show its error yet.
    pub fn is_valid(&self) -> bool {
        check(&self.value, self.rules).is_empty()
    }

    /// The current error rendered for display
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    fn validate(&mut self) {
        self.error = check(&self.value, self.rules).into_iter().next();
    }
}

// ============================================================================
// Edit Form
// ============================================================================

/// Form state for the edit dialog
///
/// Seeded from the record under edit; tracks which record so the owner
/// can detect when it is retargeted at a different one. Only title and
/// description are editable here, and the update payload sets exactly
/// those two fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EditEquipmentForm {
    /// Id of the record this form was seeded from
    pub record_id: EquipmentId,

    /// Title field (required)
    pub title: FieldState,

    /// Description field (optional)
    pub description: FieldState,

    /// Whether a submission is currently in flight
    pub submitting: bool,
}

impl EditEquipmentForm {
    /// Seed the form from a record's current values
    pub fn seeded(equipment: &Equipment) -> Self {
        Self {
            record_id: equipment.id,
            title: FieldState::seeded(&equipment.title, TITLE_RULES),
            description: FieldState::seeded(
                equipment.description.as_deref().unwrap_or_default(),
                DESCRIPTION_RULES,
            ),
            submitting: false,
        }
    }

    /// Whether any field differs from the seeded record
    pub fn is_dirty(&self) -> bool {
        self.title.is_dirty() || self.description.is_dirty()
    }

    /// Whether every field passes its rules
    pub fn is_valid(&self) -> bool {
        self.title.is_valid() && self.description.is_valid()
    }

    /// Whether the save control is enabled
    ///
    /// A clean form has nothing to save, an invalid one must not be
    /// saved, and at most one submission may be in flight.
    pub fn can_submit(&self) -> bool {
        self.is_dirty() && self.is_valid() && !self.submitting
    }

    /// Mark every field touched so all errors become visible
    ///
    /// Used when a submit attempt is blocked by validation on fields the
    /// user never visited.
    pub fn touch_all(&mut self) {
        self.title.blur();
        self.description.blur();
    }

    /// Restore every field to the seeded snapshot
    pub fn reset(&mut self) {
        self.title.reset();
        self.description.reset();
    }

    /// Build the partial update payload from the current values
    pub fn to_update(&self) -> EquipmentUpdate {
        EquipmentUpdate {
            title: Some(self.title.value.clone()),
            description: Some(self.description.value.clone()),
            ..Default::default()
        }
    }
}

// ============================================================================
// Add Form
// ============================================================================

/// Form state for the create dialog
///
/// Starts empty across all four fields. There is no dirty requirement
/// for submission; a pristine form is simply invalid because the
/// required fields are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AddEquipmentForm {
    /// Title field (required)
    pub title: FieldState,

    /// Description field (optional)
    pub description: FieldState,

    /// Category field (required)
    pub category: FieldState,

    /// Location field (required)
    pub location: FieldState,

    /// Whether a submission is currently in flight
    pub submitting: bool,
}

impl AddEquipmentForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self {
            title: FieldState::new(TITLE_RULES),
            description: FieldState::new(DESCRIPTION_RULES),
            category: FieldState::new(CATEGORY_RULES),
            location: FieldState::new(LOCATION_RULES),
            submitting: false,
        }
    }

    /// Whether every field passes its rules
    pub fn is_valid(&self) -> bool {
        self.title.is_valid()
            && self.description.is_valid()
            && self.category.is_valid()
            && self.location.is_valid()
    }

    /// Whether the create control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    /// Mark every field touched so all errors become visible
    pub fn touch_all(&mut self) {
        self.title.blur();
        self.description.blur();
        self.category.blur();
        self.location.blur();
    }

    /// Build the create payload from the current values
    ///
    /// A blank description is sent as absent rather than as an empty
    /// string.
    pub fn to_create(&self) -> EquipmentCreate {
        let description = self.description.value.clone();
        EquipmentCreate {
            title: self.title.value.clone(),
            description: (!description.trim().is_empty()).then_some(description),
            category: self.category.value.clone(),
            location: self.location.value.clone(),
        }
    }
}

impl Default for AddEquipmentForm {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_equipment() -> Equipment {
        Equipment::new("Drill", "Power Tools", "Shelf A").with_description("Cordless")
    }

    // ------------------------------------------------------------------------
    // FieldState
    // ------------------------------------------------------------------------

    #[test]
    fn test_field_starts_clean_and_untouched() {
        let field = FieldState::seeded("Drill", TITLE_RULES);
        assert!(!field.is_dirty());
        assert!(!field.touched);
        assert_eq!(field.error, None);
        assert!(field.is_valid());
    }

    #[test]
    fn test_field_edit_before_blur_shows_no_error() {
        let mut field = FieldState::seeded("Drill", TITLE_RULES);
        field.edit("");

        // Invalid, but silent until the user leaves the field
        assert!(!field.is_valid());
        assert_eq!(field.error, None);
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_field_blur_surfaces_error() {
        let mut field = FieldState::seeded("Drill", TITLE_RULES);
        field.edit("   ");
        field.blur();

        assert!(field.touched);
        assert_eq!(field.error, Some(FieldError::Required));
        assert_eq!(
            field.error_message().as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn test_touched_field_revalidates_on_every_edit() {
        let mut field = FieldState::seeded("Drill", TITLE_RULES);
        field.edit("");
        field.blur();
        assert_eq!(field.error, Some(FieldError::Required));

        // Typing again fixes the error without another blur
        field.edit("Hammer Drill");
        assert_eq!(field.error, None);

        // And a different rule can take over the slot
        field.edit("x".repeat(256));
        assert_eq!(field.error, Some(FieldError::TooLong { max: 255 }));
    }

    #[test]
    fn test_field_error_slot_holds_one_error() {
        // Whitespace over the limit violates both rules; only the first
        // failure occupies the slot
        let mut field = FieldState::seeded("Drill", &[Rule::Required, Rule::MaxLength(3)]);
        field.edit("     ");
        field.blur();
        assert_eq!(field.error, Some(FieldError::Required));
    }

    #[test]
    fn test_field_reset_restores_snapshot() {
        let mut field = FieldState::seeded("Drill", TITLE_RULES);
        field.edit("");
        field.blur();
        field.reset();

        assert_eq!(field.value, "Drill");
        assert!(!field.is_dirty());
        assert!(!field.touched);
        assert_eq!(field.error, None);
    }

    // ------------------------------------------------------------------------
    // EditEquipmentForm
    // ------------------------------------------------------------------------

    #[test]
    fn test_edit_form_seeds_from_record() {
        let equipment = sample_equipment();
        let form = EditEquipmentForm::seeded(&equipment);

        assert_eq!(form.record_id, equipment.id);
        assert_eq!(form.title.value, "Drill");
        assert_eq!(form.description.value, "Cordless");
        assert!(!form.is_dirty());
        assert!(!form.submitting);
    }

    #[test]
    fn test_edit_form_seeds_missing_description_as_empty() {
        let equipment = Equipment::new("Drill", "Power Tools", "Shelf A");
        let form = EditEquipmentForm::seeded(&equipment);
        assert_eq!(form.description.value, "");
    }

    #[test]
    fn test_save_disabled_until_dirty() {
        let equipment = sample_equipment();
        let mut form = EditEquipmentForm::seeded(&equipment);

        // Clean form, nothing to save
        assert!(!form.can_submit());

        form.title.edit("Hammer Drill");
        assert!(form.can_submit());
    }

    #[test]
    fn test_save_disabled_while_invalid() {
        let equipment = sample_equipment();
        let mut form = EditEquipmentForm::seeded(&equipment);

        form.title.edit("   ");
        assert!(form.is_dirty());
        assert!(!form.is_valid());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_save_disabled_while_submitting() {
        let equipment = sample_equipment();
        let mut form = EditEquipmentForm::seeded(&equipment);

        form.title.edit("Hammer Drill");
        form.submitting = true;
        assert!(!form.can_submit());

        form.submitting = false;
        assert!(form.can_submit());
    }

    #[test]
    fn test_untouched_invalid_field_still_blocks_submit() {
        let equipment = sample_equipment();
        let mut form = EditEquipmentForm::seeded(&equipment);

        // Dirty via description, invalid via a never-blurred title
        form.title.edit("");
        form.description.edit("Cordless, 18V");
        assert!(form.is_dirty());
        assert!(!form.can_submit());
        assert_eq!(form.title.error, None);

        // A blocked submit attempt makes the hidden error visible
        form.touch_all();
        assert_eq!(form.title.error, Some(FieldError::Required));
    }

    #[test]
    fn test_edit_form_update_payload_carries_current_values() {
        let equipment = sample_equipment();
        let mut form = EditEquipmentForm::seeded(&equipment);
        form.title.edit("Hammer Drill");

        let update = form.to_update();
        assert_eq!(update.title.as_deref(), Some("Hammer Drill"));
        assert_eq!(update.description.as_deref(), Some("Cordless"));
        assert_eq!(update.category, None);
        assert_eq!(update.location, None);
    }

    #[test]
    fn test_edit_form_sends_cleared_description_as_empty_string() {
        let equipment = sample_equipment();
        let mut form = EditEquipmentForm::seeded(&equipment);
        form.description.edit("");

        let update = form.to_update();
        assert_eq!(update.description.as_deref(), Some(""));
    }

    #[test]
    fn test_edit_form_reset_returns_to_snapshot() {
        let equipment = sample_equipment();
        let mut form = EditEquipmentForm::seeded(&equipment);

        form.title.edit("");
        form.title.blur();
        form.description.edit("18V");
        form.reset();

        assert_eq!(form.title.value, "Drill");
        assert_eq!(form.description.value, "Cordless");
        assert!(!form.is_dirty());
        assert_eq!(form.title.error, None);
    }

    #[test]
    fn test_reseeding_replaces_snapshot_and_clears_state() {
        let first = sample_equipment();
        let second = Equipment::new("Circular Saw", "Power Tools", "Shelf B");

        let mut form = EditEquipmentForm::seeded(&first);
        form.title.edit("");
        form.title.blur();
        assert!(form.is_dirty());

        form = EditEquipmentForm::seeded(&second);
        assert_eq!(form.record_id, second.id);
        assert_eq!(form.title.value, "Circular Saw");
        assert!(!form.is_dirty());
        assert_eq!(form.title.error, None);
    }

    // ------------------------------------------------------------------------
    // AddEquipmentForm
    // ------------------------------------------------------------------------

    #[test]
    fn test_add_form_starts_invalid_but_silent() {
        let form = AddEquipmentForm::new();
        assert!(!form.is_valid());
        assert!(!form.can_submit());
        assert_eq!(form.title.error, None);
        assert_eq!(form.category.error, None);
    }

    #[test]
    fn test_add_form_submit_needs_all_required_fields() {
        let mut form = AddEquipmentForm::new();
        form.title.edit("Ladder");
        form.category.edit("Access");
        assert!(!form.can_submit());

        form.location.edit("Garage");
        assert!(form.can_submit());

        form.submitting = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn test_add_form_touch_all_surfaces_every_error() {
        let mut form = AddEquipmentForm::new();
        form.touch_all();

        assert_eq!(form.title.error, Some(FieldError::Required));
        assert_eq!(form.category.error, Some(FieldError::Required));
        assert_eq!(form.location.error, Some(FieldError::Required));
        // Description is optional and stays clean
        assert_eq!(form.description.error, None);
    }

    #[test]
    fn test_add_form_payload_omits_blank_description() {
        let mut form = AddEquipmentForm::new();
        form.title.edit("Ladder");
        form.category.edit("Access");
        form.location.edit("Garage");
        form.description.edit("   ");

        let payload = form.to_create();
        assert_eq!(payload.title, "Ladder");
        assert_eq!(payload.description, None);

        form.description.edit("8ft, aluminium");
        let payload = form.to_create();
        assert_eq!(payload.description.as_deref(), Some("8ft, aluminium"));
    }
}
