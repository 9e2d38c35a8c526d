//! Checkout form validation.
//!
//! The form collects a single address that is used for both billing and
//! shipping. Country comes from configuration and the city mirrors the
//! selected state/province, matching how Vietnamese addresses are entered.

use serde::Deserialize;
use woo_storefront_core::{Address, Email};

use crate::config::CheckoutConfig;
use crate::forms::{FieldError, FieldErrors, FormField, trimmed};
use crate::woo::{CheckoutSubmission, PaymentGateway};

/// Gateway used when the store lists none.
pub const FALLBACK_PAYMENT_METHOD: &str = "cod";

/// Raw checkout form as posted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub state: String,
    pub postcode: String,
    pub payment_method: String,
    pub note: String,
}

impl CheckoutForm {
    /// Validate the form and build a submission.
    ///
    /// # Errors
    ///
    /// Returns every missing or malformed field at once.
    pub fn validate(&self, config: &CheckoutConfig) -> Result<CheckoutSubmission, FieldErrors> {
        let mut errors = Vec::new();
        let mut require = |field: FormField, value: &str, message: &str| {
            let value = trimmed(value);
            if value.is_none() {
                errors.push(FieldError {
                    field,
                    message: message.to_string(),
                });
            }
            value
        };

        let first_name = require(FormField::FirstName, &self.first_name, "First name is required");
        let last_name = require(FormField::LastName, &self.last_name, "Last name is required");
        let phone = require(FormField::Phone, &self.phone, "Phone number is required");
        let address = require(FormField::Address, &self.address, "Address is required");
        let state = require(FormField::State, &self.state, "Please choose a province or city");
        let payment_method = require(
            FormField::PaymentMethod,
            &self.payment_method,
            "Please choose a payment method",
        );

        let email = if self.email.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Email,
                message: "Email is required".to_string(),
            });
            None
        } else {
            match Email::parse(&self.email) {
                Ok(email) => Some(email),
                Err(e) => {
                    errors.push(FieldError {
                        field: FormField::Email,
                        message: format!("Invalid email: {e}"),
                    });
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(FieldErrors(errors));
        }

        Ok(CheckoutSubmission {
            payment_method: payment_method.unwrap_or_default(),
            billing: Address {
                first_name,
                last_name,
                company: None,
                address1: address,
                address2: None,
                city: state.clone(),
                state,
                postcode: trimmed(&self.postcode),
                country: Some(config.country.clone()),
                email: email.map(Email::into_inner),
                phone,
            },
            customer_note: trimmed(&self.note),
        })
    }
}

/// Payment method to preselect: the first listed gateway, else cash on delivery.
#[must_use]
pub fn default_payment_method(gateways: &[PaymentGateway]) -> &str {
    gateways
        .first()
        .map_or(FALLBACK_PAYMENT_METHOD, |gateway| gateway.id.as_str())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> CheckoutForm {
        CheckoutForm {
            first_name: "An".to_string(),
            last_name: "Nguyễn".to_string(),
            email: " an@example.vn ".to_string(),
            phone: "0901234567".to_string(),
            address: "12 Lê Lợi".to_string(),
            state: "Hồ Chí Minh".to_string(),
            postcode: String::new(),
            payment_method: "cod".to_string(),
            note: "  ".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_submission() {
        let submission = filled().validate(&CheckoutConfig::default()).unwrap();
        assert_eq!(submission.payment_method, "cod");
        assert_eq!(submission.billing.country.as_deref(), Some("VN"));
        assert_eq!(submission.billing.city, submission.billing.state);
        assert_eq!(submission.billing.email.as_deref(), Some("an@example.vn"));
        assert_eq!(submission.billing.postcode, None);
        assert_eq!(submission.customer_note, None);
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let errors = CheckoutForm::default()
            .validate(&CheckoutConfig::default())
            .unwrap_err();
        let fields: Vec<FormField> = errors.0.iter().map(|e| e.field).collect();
        for field in [
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Phone,
            FormField::Address,
            FormField::State,
            FormField::PaymentMethod,
        ] {
            assert!(fields.contains(&field), "missing error for {field:?}");
        }
    }

    #[test]
    fn test_malformed_email_is_reported() {
        let form = CheckoutForm {
            email: "an@localhost".to_string(),
            ..filled()
        };
        let errors = form.validate(&CheckoutConfig::default()).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert!(errors.get(FormField::Email).is_some());
    }

    #[test]
    fn test_default_payment_method() {
        assert_eq!(default_payment_method(&[]), "cod");
        let gateways = [PaymentGateway {
            id: "bacs".to_string(),
            title: "Bank transfer".to_string(),
            description: None,
        }];
        assert_eq!(default_payment_method(&gateways), "bacs");
    }
}
