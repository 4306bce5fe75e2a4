//! Measurement parsing.

/// Parses a measurement cell.
///
/// Accepts surrounding whitespace, a sign, scientific notation
/// (`1.5E-3`) and thousands grouping with commas (`1,234.5`). A comma
/// anywhere else makes the cell unparseable, so a decimal comma such as
/// `4,7` is rejected rather than read as `47`.
///
/// Returns None if the value is not a number.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains(',') {
        ungroup_thousands(trimmed)?.parse().ok()
    } else {
        trimmed.parse().ok()
    }
}

/// Removes the separators from `-1,234,567.89` style grouping.
///
/// The leading group has one to three digits, every later group exactly
/// three, and an optional fraction follows the last group.
fn ungroup_thousands(value: &str) -> Option<String> {
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    let sign = &value[..value.len() - unsigned.len()];
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut groups = integer.split(',');
    let lead = groups.next()?;
    if !(1..=3).contains(&lead.len()) || !all_digits(lead) {
        return None;
    }

    let mut digits = format!("{sign}{lead}");
    for group in groups {
        if group.len() != 3 || !all_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !all_digits(fraction) {
            return None;
        }
        digits.push('.');
        digits.push_str(fraction);
    }
    Some(digits)
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
