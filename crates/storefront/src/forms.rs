//! Field-level validation errors shared by the account and checkout forms.

use serde::Serialize;

/// Form field identifiers, as echoed back in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    State,
    PaymentMethod,
    Username,
    Password,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
    ResetKey,
}

/// One invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Every invalid field in a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    /// The error for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Record an error for `field`.
    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(value)` when no errors were recorded, else the errors.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field was invalid.
    pub fn or_ok<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Trimmed value, or `None` when blank.
pub(crate) fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
