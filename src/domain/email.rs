//! Attendee email addresses, parsed once at the boundary.

use serde::Serialize;

/// A validated, normalized (lowercased) email address. Registrations are
/// keyed on `(event_id, email)`, so normalization happens here and nowhere
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("email address must not be empty".to_string());
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(format!(
                "'{trimmed}' is not a valid email address: contains whitespace"
            ));
        }
        match trimmed.rsplit_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_lowercase()))
            }
            _ => Err(format!("'{trimmed}' is not a valid email address")),
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_plain_address_parses() {
        let email = EmailAddress::parse("ada.lovelace@example.com").unwrap();
        assert_eq!(email.as_ref(), "ada.lovelace@example.com");
    }

    #[test]
    fn addresses_are_lowercased() {
        let email = EmailAddress::parse("Ada.Lovelace@Example.COM").unwrap();
        assert_eq!(email.as_ref(), "ada.lovelace@example.com");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let email = EmailAddress::parse("  ada@example.com ").unwrap();
        assert_eq!(email.as_ref(), "ada@example.com");
    }

    #[test]
    fn an_empty_string_is_rejected() {
        assert!(EmailAddress::parse("").is_err());
        assert!(EmailAddress::parse("   ").is_err());
    }

    #[test]
    fn a_missing_at_symbol_is_rejected() {
        assert!(EmailAddress::parse("ada.example.com").is_err());
    }

    #[test]
    fn a_missing_local_part_or_domain_is_rejected() {
        assert!(EmailAddress::parse("@example.com").is_err());
        assert!(EmailAddress::parse("ada@").is_err());
    }

    #[test]
    fn embedded_whitespace_is_rejected() {
        assert!(EmailAddress::parse("ada lovelace@example.com").is_err());
    }
}
