//! Identifier grammar shared by parameter and macro names:
//! `[A-Za-z_][A-Za-z0-9_]*`.

#[must_use]
pub fn is_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[must_use]
pub fn is_middle_char(c: char) -> bool {
    is_start_char(c) || c.is_ascii_digit()
}

#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_start_char(first) => chars.all(is_middle_char),
        _ => false,
    }
}

/// A bare trailing token made of ASCII letters and digits, such as a random seed.
#[must_use]
pub fn is_seed_token(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_alphanumeric())
}
