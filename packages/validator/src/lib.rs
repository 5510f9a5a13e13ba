pub mod email;
pub mod field_validators;
pub mod input_validator;
pub mod rules;
pub mod validation_error;
pub mod validator;

#[cfg(test)]
pub mod test_helpers;

pub use email::{is_email, EMAIL_RX};
pub use field_validators::FieldValidator;
pub use input_validator::InputValidator;
pub use rules::{matches, permitted_value, unique};
pub use validation_error::ValidationError;
pub use validator::{FieldErrors, Validator};
