//! Identification-number validation.
//!
//! The customer service only depends on the single-method [`IdentityRule`]
//! contract, so deployments with a different national-id format swap the rule
//! without touching the service.

/// Predicate over a candidate identification number. Implementations must be
/// pure and deterministic; the service calls this before any store access.
pub trait IdentityRule: Send + Sync {
    fn is_valid(&self, identification_number: &str) -> bool;
}

/// Default rule: exactly eleven ASCII digits with a non-zero leading digit,
/// the fixed-length national-id format the service was written against.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigitFormat;

impl DigitFormat {
    pub const LENGTH: usize = 11;
}

impl IdentityRule for DigitFormat {
    fn is_valid(&self, identification_number: &str) -> bool {
        let bytes = identification_number.as_bytes();
        bytes.len() == Self::LENGTH
            && bytes.iter().all(u8::is_ascii_digit)
            && bytes[0] != b'0'
    }
}

impl<F> IdentityRule for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, identification_number: &str) -> bool {
        self(identification_number)
    }
}
