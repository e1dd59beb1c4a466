//! Client-side login/sign-up form state. There is no credential exchange:
//! a form that passes validation counts as a successful sign in.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::SignUp,
            Self::SignUp => Self::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthField {
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display("ईमेल आवश्यक है")]
    EmailRequired,
    #[display("अमान्य ईमेल प्रारूप")]
    EmailInvalid,
    #[display("पासवर्ड आवश्यक है")]
    PasswordRequired,
    #[display("पासवर्ड कम से कम 6 अक्षर का होना चाहिए")]
    PasswordTooShort,
    #[display("पासवर्ड मेल नहीं खाते")]
    PasswordMismatch,
}

/// Field errors keyed by field. Empty when the form is valid.
pub type AuthErrors = BTreeMap<AuthField, ValidationError>;

/// Result of a successful submission, owned by the top-level app state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthSession {
    #[default]
    SignedOut,
    SignedIn { email: String },
}

impl AuthSession {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    /// Only checked in [`AuthMode::SignUp`].
    pub confirm_password: String,
    pub errors: AuthErrors,
}

impl AuthForm {
    /// Switch between login and sign up. Entered email and password are kept;
    /// errors are cleared.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.errors.clear();
    }

    /// Back to an empty login form. Called whenever the modal closes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn error(&self, field: AuthField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Validate and, on success, reset the form and return the signed-in
    /// session. On failure the errors are stored on the form.
    pub fn submit(&mut self) -> Option<AuthSession> {
        let errors = validate(self);
        if !errors.is_empty() {
            tracing::debug!(?errors, "auth form rejected");
            self.errors = errors;
            return None;
        }

        let session = AuthSession::SignedIn {
            email: self.email.trim().to_string(),
        };
        self.reset();
        Some(session)
    }
}

/// Check every rule and collect all failures, not only the first.
pub fn validate(form: &AuthForm) -> AuthErrors {
    let mut errors = AuthErrors::new();

    if form.email.is_empty() {
        errors.insert(AuthField::Email, ValidationError::EmailRequired);
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(AuthField::Email, ValidationError::EmailInvalid);
    }

    if form.password.is_empty() {
        errors.insert(AuthField::Password, ValidationError::PasswordRequired);
    } else if form.password.chars().count() < PASSWORD_MIN_LEN {
        errors.insert(AuthField::Password, ValidationError::PasswordTooShort);
    }

    if form.mode == AuthMode::SignUp && form.password != form.confirm_password
    {
        errors.insert(
            AuthField::ConfirmPassword,
            ValidationError::PasswordMismatch,
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(mode: AuthMode, email: &str, password: &str) -> AuthForm {
        AuthForm {
            mode,
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_reports_both_required_errors() {
        let errors = validate(&form(AuthMode::Login, "", ""));
        assert_eq!(
            errors.get(&AuthField::Email),
            Some(&ValidationError::EmailRequired)
        );
        assert_eq!(
            errors.get(&AuthField::Password),
            Some(&ValidationError::PasswordRequired)
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_short_password() {
        let errors = validate(&form(AuthMode::Login, "a@b.com", "123"));
        assert_eq!(errors.get(&AuthField::Email), None);
        assert_eq!(
            errors.get(&AuthField::Password),
            Some(&ValidationError::PasswordTooShort)
        );

        // five characters is still too short
        let errors = validate(&form(AuthMode::Login, "a@b.com", "12345"));
        assert_eq!(
            errors.get(&AuthField::Password),
            Some(&ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        let errors = validate(&form(AuthMode::Login, "a@b.com", "पासवर्ड"));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_email_shape() {
        for bad in ["plainaddress", "a@b", "@b.com", "a b@c.d", "a@b."] {
            let errors = validate(&form(AuthMode::Login, bad, "secret1"));
            assert_eq!(
                errors.get(&AuthField::Email),
                Some(&ValidationError::EmailInvalid),
                "{bad}"
            );
        }
        for good in ["a@b.com", "first.last@hotel.co.in"] {
            assert!(validate(&form(AuthMode::Login, good, "secret1")).is_empty());
        }
    }

    #[test]
    fn test_confirm_password_only_checked_on_sign_up() {
        let mut signup = form(AuthMode::SignUp, "a@b.com", "abcdef");
        signup.confirm_password = "abcdex".into();
        let errors = validate(&signup);
        assert_eq!(
            errors.get(&AuthField::ConfirmPassword),
            Some(&ValidationError::PasswordMismatch)
        );

        let mut login = signup.clone();
        login.mode = AuthMode::Login;
        assert!(validate(&login).is_empty());

        signup.confirm_password = "abcdef".into();
        assert!(validate(&signup).is_empty());
    }

    #[test]
    fn test_submit_failure_keeps_input_and_stores_errors() {
        let mut auth = form(AuthMode::Login, "not-an-email", "abcdef");
        assert_eq!(auth.submit(), None);
        assert_eq!(auth.email, "not-an-email");
        assert_eq!(
            auth.error(AuthField::Email),
            Some(ValidationError::EmailInvalid)
        );
    }

    #[test]
    fn test_submit_success_resets_and_signs_in() {
        let mut auth = form(AuthMode::SignUp, "guest@hotel.in", "abcdef");
        auth.confirm_password = "abcdef".into();

        let session = auth.submit();
        assert_eq!(
            session,
            Some(AuthSession::SignedIn {
                email: "guest@hotel.in".into()
            })
        );
        assert_eq!(auth, AuthForm::default());
    }

    #[test]
    fn test_toggle_mode_clears_errors_but_keeps_credentials() {
        let mut auth = form(AuthMode::Login, "", "abc");
        auth.submit();
        assert!(!auth.errors.is_empty());

        auth.toggle_mode();
        assert_eq!(auth.mode, AuthMode::SignUp);
        assert!(auth.errors.is_empty());
        assert_eq!(auth.password, "abc");

        auth.toggle_mode();
        assert_eq!(auth.mode, AuthMode::Login);
    }

    #[test]
    fn test_reset() {
        let mut auth = form(AuthMode::SignUp, "a@b.com", "abcdef");
        auth.confirm_password = "x".into();
        auth.submit();
        auth.reset();
        assert_eq!(auth, AuthForm::default());
        assert_eq!(auth.mode, AuthMode::Login);
    }
}
