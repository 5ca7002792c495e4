// src/contact.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const ACKNOWLEDGEMENT: &str = "Thanks! We’ll be in touch.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartnerType {
    #[default]
    Retailer,
    Grower,
    LogisticsPartner,
}

impl PartnerType {
    pub const ALL: [PartnerType; 3] = [
        PartnerType::Retailer,
        PartnerType::Grower,
        PartnerType::LogisticsPartner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PartnerType::Retailer => "Retailer",
            PartnerType::Grower => "Grower",
            PartnerType::LogisticsPartner => "Logistics partner",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("{0} is not a valid email address.")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub partner_type: PartnerType,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace; anything stricter is the mail
/// server's job.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let f = form("Asha", "asha@orchard.in");
        assert_eq!(f.validate(), Ok(()));
        assert_eq!(f.partner_type, PartnerType::Retailer);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(form("  ", "a@b.co").validate(), Err(ContactError::MissingName));
        assert_eq!(form("Asha", " ").validate(), Err(ContactError::MissingEmail));
    }

    #[test]
    fn test_invalid_emails() {
        for bad in ["asha", "@b.co", "a@b", "a@.co", "a@b.", "a b@c.co", "a@b@c.co"] {
            assert_eq!(
                form("Asha", bad).validate(),
                Err(ContactError::InvalidEmail(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_partner_type_labels() {
        for t in PartnerType::ALL {
            assert_eq!(PartnerType::from_label(t.label()), Some(t));
        }
        assert_eq!(
            PartnerType::from_label("Logistics partner"),
            Some(PartnerType::LogisticsPartner)
        );
        assert_eq!(PartnerType::from_label("Investor"), None);
        assert_eq!(PartnerType::Grower.to_string(), "Grower");
    }
}
