//! Donor field validation

use thiserror::Error;

/// Errors that can occur during donor validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DonorValidationError {
    #[error("Donor name cannot be empty")]
    EmptyName,

    #[error("Age must be between {min} and {max}")]
    AgeOutOfRange { min: u8, max: u8 },

    #[error("Unknown blood group '{0}'")]
    UnknownBloodGroup(String),

    #[error("Phone number cannot be empty")]
    EmptyPhone,
}

/// Minimum age for an eligible donor
pub const MIN_DONOR_AGE: u8 = 18;
/// Maximum age for an eligible donor
pub const MAX_DONOR_AGE: u8 = 65;

/// Validate a donor name (must be non-empty after trimming)
pub fn validate_donor_name(name: &str) -> Result<(), DonorValidationError> {
    if name.trim().is_empty() {
        return Err(DonorValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a donor age against the eligibility window
pub fn validate_donor_age(age: u8) -> Result<(), DonorValidationError> {
    if !(MIN_DONOR_AGE..=MAX_DONOR_AGE).contains(&age) {
        return Err(DonorValidationError::AgeOutOfRange {
            min: MIN_DONOR_AGE,
            max: MAX_DONOR_AGE,
        });
    }

    Ok(())
}

/// Validate a donor phone number (must be non-empty after trimming)
pub fn validate_donor_phone(phone: &str) -> Result<(), DonorValidationError> {
    if phone.trim().is_empty() {
        return Err(DonorValidationError::EmptyPhone);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_donor_name() {
        assert!(validate_donor_name("John Smith").is_ok());
        assert!(validate_donor_name("  padded  ").is_ok());
    }

    #[test]
    fn test_empty_donor_name() {
        assert_eq!(validate_donor_name(""), Err(DonorValidationError::EmptyName));
        assert_eq!(
            validate_donor_name("   "),
            Err(DonorValidationError::EmptyName)
        );
    }

    #[test]
    fn test_age_boundaries() {
        assert!(validate_donor_age(18).is_ok());
        assert!(validate_donor_age(65).is_ok());
        assert!(validate_donor_age(40).is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        assert_eq!(
            validate_donor_age(17),
            Err(DonorValidationError::AgeOutOfRange { min: 18, max: 65 })
        );
        assert_eq!(
            validate_donor_age(66),
            Err(DonorValidationError::AgeOutOfRange { min: 18, max: 65 })
        );
    }

    #[test]
    fn test_valid_phone() {
        assert!(validate_donor_phone("555-0101").is_ok());
    }

    #[test]
    fn test_empty_phone() {
        assert_eq!(validate_donor_phone(""), Err(DonorValidationError::EmptyPhone));
        assert_eq!(
            validate_donor_phone("  "),
            Err(DonorValidationError::EmptyPhone)
        );
    }
}
