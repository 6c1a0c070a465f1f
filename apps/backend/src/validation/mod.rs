//! Request validation: field-level failure collection, derive-rule checks,
//! the registration validator and the restaurant list guard.

use std::collections::BTreeMap;

use heck::ToLowerCamelCase;
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;

pub mod register_user;
pub mod restaurant_query;

pub use register_user::RegisterUserValidator;
pub use restaurant_query::{validate_restaurant_query, ALLOWED_PAGE_SIZES, SORTABLE_COLUMNS};

/// Field name (camelCase, as sent on the wire) to its failure messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, failures) in errors.field_errors() {
            let field = field.to_lower_camel_case();
            for failure in failures.iter() {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("'{field}' is invalid ({})", failure.code));
                out.add(field.clone(), message);
            }
        }
        out
    }
}

/// Run the derive-generated rules and convert failures to a 400 problem.
pub fn ensure_valid<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::invalid(FieldErrors::from(e)))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "too short"))]
        first_name: String,
        #[validate(email)]
        contact_email: String,
    }

    #[test]
    fn converts_validator_errors_to_camel_case_fields() {
        let sample = Sample {
            first_name: "ab".into(),
            contact_email: "not-an-email".into(),
        };
        let errors: FieldErrors = sample.validate().unwrap_err().into();

        assert_eq!(errors.messages("firstName"), ["too short".to_string()]);
        assert!(errors.contains("contactEmail"));
        assert!(errors.messages("contactEmail")[0].contains("email"));
    }

    #[test]
    fn merge_keeps_every_message() {
        let mut a = FieldErrors::new();
        a.add("email", "invalid");
        let mut b = FieldErrors::new();
        b.add("email", "taken");
        b.add("password", "short");

        a.merge(b);
        assert_eq!(a.messages("email").len(), 2);
        assert_eq!(a.fields().collect::<Vec<_>>(), ["email", "password"]);
    }

    #[test]
    fn empty_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn ensure_valid_reports_field_errors() {
        let sample = Sample {
            first_name: "abc".into(),
            contact_email: "bad".into(),
        };
        let err = ensure_valid(&sample).unwrap_err();
        assert_eq!(err.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let fields: Vec<_> = err.field_errors().unwrap().fields().collect();
        assert_eq!(fields, ["contactEmail"]);
    }

    #[derive(Validate)]
    struct Registration {
        #[validate(must_match(other = "password"))]
        confirm_password: String,
        password: String,
    }

    #[test]
    fn multi_word_fields_use_wire_names() {
        let reg = Registration {
            confirm_password: "a".into(),
            password: "b".into(),
        };
        let errors: FieldErrors = reg.validate().unwrap_err().into();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["confirmPassword"]);
        assert!(errors.messages("confirmPassword")[0].contains("must_match"));
    }
}
