use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating email addresses at the account store boundary
    /// Dot-separated groups on both sides, no leading/trailing/double dots
    /// - Valid: "user@example.com", "first.last@mail.example.org"
    /// - Invalid: "invalidEmail", "@example.com", "user@", "a..b@example.com"
    pub static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9_+&*-]+(?:\.[A-Za-z0-9_+&*-]+)*@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*$"
    )
    .unwrap();

    /// Regex for validating phone numbers
    /// Must be all digits with at least 9 of them
    /// - Valid: "987654321", "6281234567890"
    /// - Invalid: "12345678", "0812-345-678", "phone"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\d{9,}$").unwrap();
}
