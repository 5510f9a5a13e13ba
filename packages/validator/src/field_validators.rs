use std::hash::Hash;

use crate::email::is_email;
use crate::rules::{permitted_value, unique};
use crate::validator::Validator;

pub struct FieldValidator;

impl FieldValidator {
    pub fn required(value: &str, field: &str, v: &mut Validator) {
        v.check(!value.trim().is_empty(), field, format!("{} must be provided", field));
    }

    pub fn email(value: &str, field: &str, v: &mut Validator) {
        Self::required(value, field, v);
        v.check(
            is_email(value),
            field,
            format!("{} must be a valid email address", field),
        );
    }

    pub fn max_chars(value: &str, max: usize, field: &str, v: &mut Validator) {
        v.check(
            value.chars().count() <= max,
            field,
            format!("{} must not be more than {} characters long", field, max),
        );
    }

    pub fn one_of(value: &str, permitted: &[&str], field: &str, v: &mut Validator) {
        v.check(
            permitted_value(value, permitted),
            field,
            format!("{} must be one of: {}", field, permitted.join(", ")),
        );
    }

    pub fn distinct<T: Eq + Hash>(values: &[T], field: &str, v: &mut Validator) {
        v.check(
            unique(values),
            field,
            format!("{} must not contain duplicate values", field),
        );
    }
}
