use crate::domain::{entities::layout::ProjectLayout, error::DomainError, value_objects::ModuleName};

/// Registry-aware checks shared by the planners.
///
/// Shape rules live in the value object constructors; what is checked here
/// depends on the current registry snapshot or on the layout.
pub struct DomainValidator;

impl DomainValidator {
    /// A name that may be given to a new module (create or rename target).
    pub fn validate_new_module(
        name: &ModuleName,
        registered: &[ModuleName],
        layout: &ProjectLayout,
    ) -> Result<(), DomainError> {
        if name.as_str() == layout.admin_segment() {
            return Err(DomainError::InvalidModuleName {
                name: name.to_string(),
                reason: format!(
                    "'{}' is reserved for the admin routes of every module",
                    layout.admin_segment()
                ),
            });
        }
        if registered.contains(name) {
            return Err(DomainError::ModuleExists {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn require_registered(
        name: &ModuleName,
        registered: &[ModuleName],
    ) -> Result<(), DomainError> {
        if registered.contains(name) {
            Ok(())
        } else {
            Err(DomainError::ModuleNotFound {
                name: name.to_string(),
            })
        }
    }
}
