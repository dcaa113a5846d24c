//! Validation utilities for registration numbers and classification codes

const GSTIN_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Highest state/UT code issued in a GSTIN prefix
const MAX_STATE_CODE: u32 = 38;

/// Validate a GSTIN: shape and mod-36 check character.
///
/// Layout: 2-digit state code, 10-character PAN, entity number, `Z`, check character.
pub fn validate_gstin(gstin: &str) -> bool {
    let gstin = gstin.trim().to_ascii_uppercase();
    let chars: Vec<char> = gstin.chars().collect();
    if chars.len() != 15 {
        return false;
    }

    let state_code: String = chars[0..2].iter().collect();
    match state_code.parse::<u32>() {
        Ok(code) if (1..=MAX_STATE_CODE).contains(&code) => {}
        _ => return false,
    }

    let pan: String = chars[2..12].iter().collect();
    if !validate_pan(&pan) {
        return false;
    }

    if !chars[12].is_ascii_alphanumeric() || chars[13] != 'Z' {
        return false;
    }

    gstin_check_char(&chars[..14]) == Some(chars[14])
}

fn gstin_check_char(body: &[char]) -> Option<char> {
    let mut sum = 0u32;
    for (i, c) in body.iter().enumerate() {
        let value = GSTIN_ALPHABET.find(*c)? as u32;
        let product = value * if i % 2 == 0 { 1 } else { 2 };
        sum += product / 36 + product % 36;
    }
    let check = ((36 - sum % 36) % 36) as usize;
    GSTIN_ALPHABET.chars().nth(check)
}

/// Validate a PAN: five letters, four digits, one letter
pub fn validate_pan(pan: &str) -> bool {
    let chars: Vec<char> = pan.chars().collect();
    chars.len() == 10
        && chars[0..5].iter().all(char::is_ascii_uppercase)
        && chars[5..9].iter().all(char::is_ascii_digit)
        && chars[9].is_ascii_uppercase()
}

/// Whether `code` looks like an HSN or SAC code (4, 6 or 8 digits)
pub fn is_valid_classification_code(code: &str) -> bool {
    matches!(code.len(), 4 | 6 | 8) && code.chars().all(|c| c.is_ascii_digit())
}

/// Normalize a state name for regime comparison
pub fn normalize_state(state: &str) -> String {
    state.trim().to_lowercase()
}
