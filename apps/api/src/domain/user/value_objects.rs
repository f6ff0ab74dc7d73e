use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address used as a login
///
/// Stored trimmed and lower-cased so lookups are case-insensitive.
///
/// # Invariants
/// - Exactly one '@'
/// - Non-empty local part and domain
/// - No whitespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address
    ///
    /// # Example
    /// ```
    /// use ligamanager_api::domain::user::Email;
    ///
    /// let email = Email::new(" Captain@Example.com ").expect("valid email");
    /// assert_eq!(email.as_str(), "captain@example.com");
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, String> {
        let normalized = email.as_ref().trim().to_lowercase();
        if Self::is_valid(&normalized) {
            Ok(Email(normalized))
        } else {
            Err(format!("Invalid email: {}", email.as_ref()))
        }
    }

    fn is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
