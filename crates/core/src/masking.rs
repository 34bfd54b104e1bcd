//! Incremental input masks for Brazilian phone and postal code fields.
//!
//! Masks are applied on every keystroke, not on blur: the UI feeds the
//! whole current field value (which may already contain punctuation from
//! the previous keystroke) back through the mask and stores the result.
//! Both masks are therefore idempotent over their own output, and the
//! draft stores the formatted value, never a normalized one.

use std::sync::LazyLock;

use regex::Regex;

/// A complete masked WhatsApp number: `(NN) NNNNN-NNNN`.
static WHATSAPP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").expect("valid regex"));

/// A complete masked postal code (CEP): `NNNNN-NNN`.
static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("valid regex"));

/// Digits in a full mobile number (2-digit area code + 9-digit number).
pub const WHATSAPP_DIGITS: usize = 11;

/// Digits in a full postal code.
pub const POSTAL_CODE_DIGITS: usize = 8;

// ---------------------------------------------------------------------------
// Masks
// ---------------------------------------------------------------------------

/// Progressively mask a WhatsApp number as `(NN) NNNNN-NNNN`.
///
/// Non-digits in the input are discarded and digits beyond the eleventh
/// are dropped, so feeding the previous masked value plus one more typed
/// character produces the next masked value.
///
/// # Examples
///
/// ```
/// use vitrine_core::masking::mask_whatsapp;
///
/// assert_eq!(mask_whatsapp("1"), "(1");
/// assert_eq!(mask_whatsapp("(11) 999"), "(11) 999");
/// assert_eq!(mask_whatsapp("11999998888"), "(11) 99999-8888");
/// assert_eq!(mask_whatsapp("(11) 99999-8888"), "(11) 99999-8888");
/// ```
pub fn mask_whatsapp(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(WHATSAPP_DIGITS)
        .collect();

    if digits.is_empty() {
        return String::new();
    }

    let mut masked = String::with_capacity(16);
    masked.push('(');
    masked.push_str(&digits[..digits.len().min(2)]);
    if digits.len() <= 2 {
        return masked;
    }

    masked.push_str(") ");
    let rest = &digits[2..];
    masked.push_str(&rest[..rest.len().min(5)]);
    if rest.len() <= 5 {
        return masked;
    }

    masked.push('-');
    masked.push_str(&rest[5..]);
    masked
}

/// Progressively mask a postal code (CEP) as `NNNNN-NNN`.
///
/// # Examples
///
/// ```
/// use vitrine_core::masking::mask_postal_code;
///
/// assert_eq!(mask_postal_code("01310"), "01310");
/// assert_eq!(mask_postal_code("013101"), "01310-1");
/// assert_eq!(mask_postal_code("01310100"), "01310-100");
/// ```
pub fn mask_postal_code(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(POSTAL_CODE_DIGITS)
        .collect();

    if digits.len() <= 5 {
        return digits;
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether a value is a fully masked WhatsApp number.
pub fn is_complete_whatsapp(value: &str) -> bool {
    WHATSAPP_RE.is_match(value)
}

/// Whether a value is a fully masked postal code.
pub fn is_complete_postal_code(value: &str) -> bool {
    POSTAL_CODE_RE.is_match(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- mask_whatsapp --

    #[test]
    fn whatsapp_empty_input_stays_empty() {
        assert_eq!(mask_whatsapp(""), "");
        assert_eq!(mask_whatsapp("abc"), "");
    }

    #[test]
    fn whatsapp_incremental_typing() {
        // Each keystroke feeds the previous masked value plus one digit.
        let raw = "11999998888";
        let mut field = String::new();
        for c in raw.chars() {
            field.push(c);
            field = mask_whatsapp(&field);
        }
        assert_eq!(field, "(11) 99999-8888");
    }

    #[test]
    fn whatsapp_partial_shapes() {
        assert_eq!(mask_whatsapp("1"), "(1");
        assert_eq!(mask_whatsapp("11"), "(11");
        assert_eq!(mask_whatsapp("119"), "(11) 9");
        assert_eq!(mask_whatsapp("1199999"), "(11) 99999");
        assert_eq!(mask_whatsapp("11999998"), "(11) 99999-8");
    }

    #[test]
    fn whatsapp_excess_digits_are_dropped() {
        assert_eq!(mask_whatsapp("119999988887777"), "(11) 99999-8888");
    }

    #[test]
    fn whatsapp_mask_is_idempotent() {
        let once = mask_whatsapp("11999998888");
        assert_eq!(mask_whatsapp(&once), once);
    }

    #[test]
    fn whatsapp_strips_foreign_punctuation() {
        assert_eq!(mask_whatsapp("+55 11 99999-8888"), "(55) 11999-9988");
    }

    // -- mask_postal_code --

    #[test]
    fn postal_code_full_input_is_masked() {
        assert_eq!(mask_postal_code("01310100"), "01310-100");
    }

    #[test]
    fn postal_code_incremental_typing() {
        let raw = "01310100";
        let mut field = String::new();
        for c in raw.chars() {
            field.push(c);
            field = mask_postal_code(&field);
        }
        assert_eq!(field, "01310-100");
    }

    #[test]
    fn postal_code_partial_shapes() {
        assert_eq!(mask_postal_code(""), "");
        assert_eq!(mask_postal_code("0"), "0");
        assert_eq!(mask_postal_code("01310"), "01310");
        assert_eq!(mask_postal_code("013101"), "01310-1");
    }

    #[test]
    fn postal_code_excess_digits_are_dropped() {
        assert_eq!(mask_postal_code("013101009999"), "01310-100");
    }

    #[test]
    fn postal_code_mask_is_idempotent() {
        let once = mask_postal_code("01310100");
        assert_eq!(mask_postal_code(&once), once);
    }

    // -- predicates --

    #[test]
    fn complete_whatsapp_accepted() {
        assert!(is_complete_whatsapp("(11) 99999-8888"));
    }

    #[test]
    fn incomplete_whatsapp_rejected() {
        assert!(!is_complete_whatsapp(""));
        assert!(!is_complete_whatsapp("(11) 99999"));
        assert!(!is_complete_whatsapp("11999998888"));
        assert!(!is_complete_whatsapp("(11) 9999-8888"));
    }

    #[test]
    fn complete_postal_code_accepted() {
        assert!(is_complete_postal_code("01310-100"));
    }

    #[test]
    fn incomplete_postal_code_rejected() {
        assert!(!is_complete_postal_code(""));
        assert!(!is_complete_postal_code("01310"));
        assert!(!is_complete_postal_code("01310100"));
        assert!(!is_complete_postal_code("0131-0100"));
    }
}
