//! Validation of the password length field.  The raw text must be present,
//! numeric and inside `[MIN_LENGTH, MAX_LENGTH]`; every violated rule is
//! reported, not just the first one.

/// Smallest password length the form accepts.
pub const MIN_LENGTH: usize = 6;
/// Largest password length the form accepts.
pub const MAX_LENGTH: usize = 16;

/// Identifies a violated validation rule, together with the message the
/// frontend renders next to the length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Missing,
    NotNumeric,
    TooShort,
    TooLong,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            Self::Missing => "Mandatory Field",
            Self::NotNumeric => "Password length must be a number",
            Self::TooShort => "Should have at least 6 characters",
            Self::TooLong => "Password length must be less than 16",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// The length field as typed, after number coercion has been attempted.
#[derive(Debug, Clone, Copy)]
enum RawLength {
    Empty,
    NotANumber,
    Value(i64),
}

fn coerce(raw: &str) -> RawLength {
    let raw = raw.trim();
    if raw.is_empty() {
        return RawLength::Empty;
    }
    match raw.parse::<i64>() {
        Ok(value) => RawLength::Value(value),
        Err(_) => RawLength::NotANumber,
    }
}

fn present(raw: RawLength) -> bool {
    !matches!(raw, RawLength::Empty)
}

fn numeric(raw: RawLength) -> bool {
    !matches!(raw, RawLength::NotANumber)
}

fn at_least_min(raw: RawLength) -> bool {
    match raw {
        RawLength::Value(value) => value >= MIN_LENGTH as i64,
        _ => true,
    }
}

fn at_most_max(raw: RawLength) -> bool {
    match raw {
        RawLength::Value(value) => value <= MAX_LENGTH as i64,
        _ => true,
    }
}

/// The rules are evaluated independently, in declaration order.
const RULES: &[(fn(RawLength) -> bool, ValidationError)] = &[
    (present, ValidationError::Missing),
    (numeric, ValidationError::NotNumeric),
    (at_least_min, ValidationError::TooShort),
    (at_most_max, ValidationError::TooLong),
];

/// Validates the raw text of the length field.  Returns the coerced length on
/// success, otherwise every violated rule.
pub fn validate_length(raw: &str) -> Result<usize, Vec<ValidationError>> {
    let coerced = coerce(raw);

    let violations: Vec<ValidationError> = RULES
        .iter()
        .filter(|(rule, _)| !rule(coerced))
        .map(|(_, error)| *error)
        .collect();

    if violations.is_empty() {
        if let RawLength::Value(value) = coerced {
            return Ok(value as usize);
        }
    }

    Err(violations)
}

#[cfg(test)]
#[path = "tests/validator.rs"]
mod validator;
