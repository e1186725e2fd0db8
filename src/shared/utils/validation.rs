use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// True iff the string contains no character outside `[a-zA-Z]`.
    /// The empty string passes.
    pub fn pet_type_is_valid(pet_type: &str) -> bool {
        let re = Regex::new(r"[^a-zA-Z]").unwrap();
        !re.is_match(pet_type)
    }

    pub fn validate_pet_type(pet_type: &str) -> Result<(), AppError> {
        if !Self::pet_type_is_valid(pet_type) {
            return Err(AppError::ValidationError(
                "The pet type should contain only letters and cannot contain numbers or special characters.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_only_strings_are_valid() {
        assert!(Validator::pet_type_is_valid("Dog"));
        assert!(Validator::pet_type_is_valid("cat"));
        assert!(Validator::pet_type_is_valid("GuineaPig"));
        assert!(Validator::pet_type_is_valid("HAMSTER"));
    }

    #[test]
    fn empty_string_is_valid() {
        assert!(Validator::pet_type_is_valid(""));
    }

    #[test]
    fn digits_are_rejected() {
        assert!(!Validator::pet_type_is_valid("Dog2"));
        assert!(!Validator::pet_type_is_valid("123"));
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(!Validator::pet_type_is_valid("guinea pig"));
        assert!(!Validator::pet_type_is_valid(" "));
        assert!(!Validator::pet_type_is_valid("dog\t"));
    }

    #[test]
    fn punctuation_is_rejected() {
        assert!(!Validator::pet_type_is_valid("dog!"));
        assert!(!Validator::pet_type_is_valid("cat-dog"));
        assert!(!Validator::pet_type_is_valid("d.o.g"));
    }

    #[test]
    fn non_ascii_letters_are_rejected() {
        assert!(!Validator::pet_type_is_valid("chién"));
    }

    #[test]
    fn validate_pet_type_reports_validation_error() {
        assert!(Validator::validate_pet_type("Dog").is_ok());
        assert!(matches!(
            Validator::validate_pet_type("Dog2"),
            Err(AppError::ValidationError(_))
        ));
    }
}
