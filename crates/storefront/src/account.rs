//! Account form validation.
//!
//! Registration, profile edits, and the two password flows. Forms holding
//! passwords derive no `Debug`.

use secrecy::SecretString;
use serde::Deserialize;
use woo_storefront_core::{Address, Email};

use crate::forms::{FieldErrors, FormField, trimmed};
use crate::woo::{PasswordChange, PasswordReset, ProfileUpdate, Registration};

/// Shortest accepted password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// What is wrong with a proposed password, if anything.
#[must_use]
pub fn password_problem(password: &str) -> Option<&'static str> {
    if password.trim().is_empty() {
        return Some("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Some("Password must be at least 6 characters");
    }
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Some("Password must contain an uppercase letter, a lowercase letter, and a digit");
    }
    None
}

fn check_new_password(errors: &mut FieldErrors, field: FormField, password: &str, confirm: &str) {
    if let Some(problem) = password_problem(password) {
        errors.push(field, problem);
    }
    if confirm.trim().is_empty() {
        errors.push(FormField::ConfirmPassword, "Please confirm the password");
    } else if confirm != password {
        errors.push(FormField::ConfirmPassword, "Passwords do not match");
    }
}

fn check_email(errors: &mut FieldErrors, raw: &str) -> Option<String> {
    match Email::parse(raw) {
        Ok(email) => Some(email.into_inner()),
        Err(e) => {
            errors.push(FormField::Email, format!("Invalid email: {e}"));
            None
        }
    }
}

/// Sign-up form as posted.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every invalid field at once.
    pub fn validate(self) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::default();

        let username = trimmed(&self.username);
        if username.is_none() {
            errors.push(FormField::Username, "Username is required");
        }
        let email = if self.email.trim().is_empty() {
            errors.push(FormField::Email, "Email is required");
            None
        } else {
            check_email(&mut errors, &self.email)
        };
        check_new_password(
            &mut errors,
            FormField::Password,
            &self.password,
            &self.confirm_password,
        );

        errors.or_ok(|| Registration {
            username: username.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: SecretString::from(self.password),
            first_name: trimmed(&self.first_name),
            last_name: trimmed(&self.last_name),
        })
    }
}

/// Profile edit form. Blank fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub billing: Option<Address>,
    pub shipping: Option<Address>,
}

impl ProfileForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied email is malformed or nothing would
    /// change.
    pub fn validate(self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = if self.email.trim().is_empty() {
            None
        } else {
            check_email(&mut errors, &self.email)
        };

        let update = ProfileUpdate {
            first_name: trimmed(&self.first_name),
            last_name: trimmed(&self.last_name),
            email,
            billing: self.billing,
            shipping: self.shipping,
        };
        if errors.is_empty() && update == ProfileUpdate::default() {
            errors.push(FormField::FirstName, "Nothing to update");
        }
        errors.or_ok(|| update)
    }
}

/// Change-password form as posted.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every invalid field at once.
    pub fn validate(self) -> Result<PasswordChange, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.current_password.trim().is_empty() {
            errors.push(FormField::CurrentPassword, "Current password is required");
        }
        check_new_password(
            &mut errors,
            FormField::NewPassword,
            &self.new_password,
            &self.confirm_password,
        );
        if !self.current_password.is_empty() && self.current_password == self.new_password {
            errors.push(
                FormField::NewPassword,
                "New password must differ from the current one",
            );
        }

        errors.or_ok(|| PasswordChange {
            current_password: SecretString::from(self.current_password),
            new_password: SecretString::from(self.new_password),
        })
    }
}

/// Forgot-password form: a username or email to send the reset link to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PasswordResetRequestForm {
    pub username: String,
}

impl PasswordResetRequestForm {
    /// The trimmed login.
    ///
    /// # Errors
    ///
    /// Returns an error if the login is blank.
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::default();
        let username = trimmed(&self.username);
        if username.is_none() {
            errors.push(FormField::Username, "Username or email is required");
        }
        errors.or_ok(|| username.unwrap_or_default())
    }
}

/// Reset form reached from the emailed link.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct PasswordResetForm {
    pub key: String,
    pub login: String,
    pub password: String,
    pub confirm_password: String,
}

impl PasswordResetForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every invalid field at once.
    pub fn validate(self) -> Result<PasswordReset, FieldErrors> {
        let mut errors = FieldErrors::default();
        let key = trimmed(&self.key);
        let login = trimmed(&self.login);
        if key.is_none() {
            errors.push(FormField::ResetKey, "Reset link is invalid");
        }
        if login.is_none() {
            errors.push(FormField::Username, "Reset link is invalid");
        }
        check_new_password(
            &mut errors,
            FormField::Password,
            &self.password,
            &self.confirm_password,
        );

        errors.or_ok(|| PasswordReset {
            key: key.unwrap_or_default(),
            login: login.unwrap_or_default(),
            password: SecretString::from(self.password),
        })
    }
}
