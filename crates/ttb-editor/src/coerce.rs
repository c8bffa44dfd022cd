//! Per-field coercion of raw input.
//!
//! Every function here is total: any input maps to a value, nothing panics.

use ttb_model::{MAX_HOLIDAYS, default_batches};

use crate::field::FieldInput;

/// Parses the leading integer of the input.
///
/// Leading whitespace is skipped and an optional sign accepted, then the run
/// of ASCII digits is read (`"12abc"` is 12, `"3.7"` is 3). No digits, a
/// negative number, or a checkbox state all give 0. Overflow saturates.
pub fn integer(input: &FieldInput) -> u32 {
    match input {
        FieldInput::Text(text) => leading_integer(text),
        FieldInput::Checked(_) => 0,
    }
}

/// [`integer`] capped at the number of selectable weekdays.
pub fn holiday_allowance(input: &FieldInput) -> u32 {
    integer(input).min(MAX_HOLIDAYS)
}

fn leading_integer(text: &str) -> u32 {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: Vec<u32> = unsigned
        .chars()
        .map_while(|c| c.to_digit(10))
        .collect();
    if negative || digits.is_empty() {
        return 0;
    }
    digits.into_iter().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(digit)
    })
}

/// Splits a batch list on runs of commas and whitespace.
///
/// Empty tokens are dropped; an empty result becomes the default batch.
pub fn batches(input: &FieldInput) -> Vec<String> {
    let FieldInput::Text(text) = input else {
        return default_batches();
    };
    let parsed: Vec<String> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect();
    if parsed.is_empty() {
        default_batches()
    } else {
        parsed
    }
}

/// Truthiness of a checkbox-like input.
///
/// Text is false when blank or one of `0`, `false`, `no`, `off`.
pub fn truthy(input: &FieldInput) -> bool {
    match input {
        FieldInput::Checked(checked) => *checked,
        FieldInput::Text(text) => {
            let text = text.trim();
            !(text.is_empty()
                || text == "0"
                || text.eq_ignore_ascii_case("false")
                || text.eq_ignore_ascii_case("no")
                || text.eq_ignore_ascii_case("off"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldInput {
        FieldInput::from(value)
    }

    #[test]
    fn integer_reads_leading_digits() {
        assert_eq!(integer(&text("18")), 18);
        assert_eq!(integer(&text("  12abc")), 12);
        assert_eq!(integer(&text("3.7")), 3);
        assert_eq!(integer(&text("+4")), 4);
    }

    #[test]
    fn integer_falls_back_to_zero() {
        assert_eq!(integer(&text("")), 0);
        assert_eq!(integer(&text("abc")), 0);
        assert_eq!(integer(&text("-3")), 0);
        assert_eq!(integer(&text("-")), 0);
        assert_eq!(integer(&FieldInput::Checked(true)), 0);
    }

    #[test]
    fn integer_saturates() {
        assert_eq!(integer(&text("99999999999999999999")), u32::MAX);
    }

    #[test]
    fn holiday_allowance_is_capped() {
        assert_eq!(holiday_allowance(&text("2")), 2);
        assert_eq!(holiday_allowance(&text("9")), 6);
    }

    #[test]
    fn batches_split_on_commas_and_spaces() {
        assert_eq!(batches(&text("b1, b2  b3")), vec!["b1", "b2", "b3"]);
        assert_eq!(batches(&text(",,A1,\tA2,")), vec!["A1", "A2"]);
    }

    #[test]
    fn batches_never_empty() {
        assert_eq!(batches(&text("")), vec!["B1"]);
        assert_eq!(batches(&text(" , \n ")), vec!["B1"]);
        assert_eq!(batches(&FieldInput::Checked(true)), vec!["B1"]);
    }

    #[test]
    fn truthiness() {
        assert!(truthy(&FieldInput::Checked(true)));
        assert!(!truthy(&FieldInput::Checked(false)));
        assert!(truthy(&text("yes")));
        assert!(truthy(&text("1")));
        assert!(!truthy(&text("")));
        assert!(!truthy(&text("OFF")));
        assert!(!truthy(&text("false")));
    }
}
