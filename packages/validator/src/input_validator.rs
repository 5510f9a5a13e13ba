use crate::validation_error::ValidationError;
use crate::validator::Validator;

/// Implemented by request payloads that check their own fields
pub trait InputValidator {
    fn check_fields(&self, v: &mut Validator);

    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.check_fields(&mut v);
        v.into_result()
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
