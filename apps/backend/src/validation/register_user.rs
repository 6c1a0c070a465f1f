//! Registration validator: syntax rules plus email uniqueness.

use validator::Validate;

use super::FieldErrors;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::models::account::{normalize_email, RegisterUserDto};
use crate::repos::AccountRepo;

pub const EMAIL_TAKEN: &str = "That email is taken";

/// Checks a registration request against the syntax rules and the set of
/// existing accounts. Never writes.
pub struct RegisterUserValidator<'a> {
    accounts: &'a dyn AccountRepo,
}

impl<'a> RegisterUserValidator<'a> {
    pub fn new(accounts: &'a dyn AccountRepo) -> Self {
        Self { accounts }
    }

    /// Every violated rule, keyed by field. A failing lookup is returned as
    /// `Err`, not folded into the field errors.
    ///
    /// The email is checked in the form it is stored in, so surrounding
    /// whitespace and case never fail the syntax rule.
    pub async fn validate(&self, dto: &RegisterUserDto) -> Result<FieldErrors, DomainError> {
        let email = normalize_email(&dto.email);
        let normalized = RegisterUserDto {
            email: email.clone(),
            ..dto.clone()
        };
        let mut errors = match normalized.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if !email.is_empty() && self.accounts.email_exists(&email).await? {
            errors.add("email", EMAIL_TAKEN);
        }

        Ok(errors)
    }

    pub async fn ensure_valid(&self, dto: &RegisterUserDto) -> Result<(), AppError> {
        self.validate(dto)
            .await?
            .into_result()
            .map_err(AppError::invalid)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::errors::domain::InfraErrorKind;
    use crate::repos::{NewUser, User};

    struct Emails(&'static [&'static str]);

    #[async_trait]
    impl AccountRepo for Emails {
        async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
            Ok(self.0.contains(&email))
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
            Ok(None)
        }
        async fn create_user(&self, _user: NewUser) -> Result<User, DomainError> {
            unreachable!("validator never writes")
        }
    }

    struct Down;

    #[async_trait]
    impl AccountRepo for Down {
        async fn email_exists(&self, _email: &str) -> Result<bool, DomainError> {
            Err(DomainError::infra(InfraErrorKind::DbUnavailable, "down"))
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
            Ok(None)
        }
        async fn create_user(&self, _user: NewUser) -> Result<User, DomainError> {
            unreachable!("validator never writes")
        }
    }

    const SEEDED: Emails = Emails(&["test2@test.com", "test3@test.com"]);

    fn dto(email: &str, password: &str, confirm: &str) -> RegisterUserDto {
        RegisterUserDto {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn unused_email_with_matching_passwords_is_valid() {
        let errors = RegisterUserValidator::new(&SEEDED)
            .validate(&dto("test@test.com", "password", "password"))
            .await
            .unwrap();
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[tokio::test]
    async fn taken_email_is_rejected_even_when_passwords_match() {
        let errors = RegisterUserValidator::new(&SEEDED)
            .validate(&dto("test2@test.com", "password", "password"))
            .await
            .unwrap();
        assert_eq!(errors.messages("email"), [EMAIL_TAKEN.to_string()]);
        assert_eq!(errors.fields().count(), 1);
    }

    #[tokio::test]
    async fn taken_check_ignores_case() {
        let errors = RegisterUserValidator::new(&SEEDED)
            .validate(&dto("Test3@Test.com", "password", "password"))
            .await
            .unwrap();
        assert!(errors.contains("email"));
    }

    #[tokio::test]
    async fn padded_email_is_checked_as_stored() {
        let fresh = RegisterUserValidator::new(&SEEDED)
            .validate(&dto("  New@Test.com ", "password", "password"))
            .await
            .unwrap();
        assert!(fresh.is_empty(), "{fresh:?}");

        let taken = RegisterUserValidator::new(&SEEDED)
            .validate(&dto(" TEST2@test.com  ", "password", "password"))
            .await
            .unwrap();
        assert_eq!(taken.messages("email"), [EMAIL_TAKEN.to_string()]);
    }

    #[tokio::test]
    async fn mismatch_is_reported_whatever_the_email() {
        for email in ["test@test.com", "not-an-email", "test2@test.com"] {
            let errors = RegisterUserValidator::new(&SEEDED)
                .validate(&dto(email, "password1233", "password123"))
                .await
                .unwrap();
            assert!(errors.contains("confirmPassword"), "email {email}: {errors:?}");
        }
    }

    #[tokio::test]
    async fn malformed_email_and_short_password_are_separate_errors() {
        let errors = RegisterUserValidator::new(&SEEDED)
            .validate(&dto("nope", "abc", "abc"))
            .await
            .unwrap();
        assert_eq!(errors.messages("email").len(), 1);
        assert!(errors.contains("password"));
        assert!(!errors.contains("confirmPassword"));
    }

    #[tokio::test]
    async fn lookup_failure_is_not_a_validation_error() {
        let result = RegisterUserValidator::new(&Down)
            .validate(&dto("test@test.com", "password", "password"))
            .await;
        assert!(matches!(result, Err(DomainError::Infra(_, _))));
    }

    #[tokio::test]
    async fn ensure_valid_maps_to_validation_problem() {
        let err = RegisterUserValidator::new(&SEEDED)
            .ensure_valid(&dto("test2@test.com", "password", "password"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(err.field_errors().is_some_and(|e| e.contains("email")));
    }
}
