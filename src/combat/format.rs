//! Number rendering shared by every report.
//!
//! Reports follow JavaScript number printing: `fixed` rounds exact ties away
//! from zero like `toFixed`, and `plain` switches to exponent form outside
//! `1e-6..1e21`. Non-finite values come out of zero divisors; they are shown
//! as `∞`, `-∞` or `NaN` instead of Rust's `inf`.

const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-6;

/// Renders `value` with exactly `places` decimals.
pub fn fixed(value: f64, places: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value.abs() >= EXPONENT_UPPER {
        return plain(value);
    }

    // -0 prints without a sign
    let value = if value == 0.0 { 0.0 } else { value };
    match round_tie_away(value, places) {
        Some(text) => text,
        None => format!("{:.*}", places, value),
    }
}

/// Renders `value` with as many decimals as it needs (`50`, `12.5`).
pub fn plain(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// Returns the rounded text when `value` sits exactly halfway between two
/// `places`-decimal neighbours, `None` otherwise.
fn round_tie_away(value: f64, places: usize) -> Option<String> {
    // Wide enough that a non-tie always shows a nonzero digit after the 5
    let extra = places + 20;
    let expanded = format!("{:.*}", places + extra, value.abs());
    let (kept, tail) = expanded.split_at(expanded.len() - extra);

    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return None;
    }

    let mut digits: Vec<char> = kept.trim_end_matches('.').chars().collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        match *digit {
            '.' => continue,
            '9' => *digit = '0',
            d => {
                *digit = char::from(d as u8 + 1);
                carry = false;
                break;
            }
        }
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let lead = if carry { "1" } else { "" };
    Some(format!("{}{}{}", sign, lead, digits.into_iter().collect::<String>()))
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}
