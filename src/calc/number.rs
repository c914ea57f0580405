// ---------------------------------------------------------------------------
// Reading numbers out of form text
// ---------------------------------------------------------------------------
//
// Two grammars are in play. The time field takes the longest leading number
// and ignores whatever follows it ("30 min" is 30). Each pace part must be a
// number as a whole; blank is zero and anything else is NaN.

const INFINITY: &str = "Infinity";

/// Read the longest numeric prefix of `text`, skipping leading whitespace.
///
/// Accepts an optional sign followed by `Infinity` or a decimal literal with
/// an optional exponent. Returns `None` when no digits start the text.
pub fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let sign_len = sign_len(text);
    let (sign, body) = text.split_at(sign_len);

    if body.starts_with(INFINITY) {
        return Some(signed_infinity(sign));
    }

    let len = decimal_prefix_len(body);
    if len == 0 {
        return None;
    }
    text[..sign_len + len].parse().ok()
}

/// Read a whole pace part as a number: blank is `0`, malformed is NaN.
///
/// Besides signed decimal literals this accepts `Infinity` spelled exactly so
/// and unsigned `0x`, `0o` and `0b` integers.
pub fn read_number(part: &str) -> f64 {
    let part = part.trim();
    if part.is_empty() {
        return 0.0;
    }
    if let Some(value) = radix_integer(part) {
        return value;
    }

    let (sign, body) = part.split_at(sign_len(part));
    if body == INFINITY {
        return signed_infinity(sign);
    }
    if body.is_empty() || decimal_prefix_len(body) != body.len() {
        return f64::NAN;
    }
    part.parse().unwrap_or(f64::NAN)
}

fn sign_len(text: &str) -> usize {
    usize::from(text.starts_with('+') || text.starts_with('-'))
}

fn signed_infinity(sign: &str) -> f64 {
    if sign == "-" {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

fn radix_integer(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    // Folding keeps precision loss consistent for integers beyond u64.
    Some(
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d)),
    )
}

/// Length of the longest prefix of `body` that is an unsigned decimal
/// literal: `12`, `12.`, `.5`, `1.5e-3`. Zero if there is none.
fn decimal_prefix_len(body: &str) -> usize {
    let bytes = body.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(0);
    let mut end = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits == 0 && frac_digits == 0 {
            return 0;
        }
        end += 1 + frac_digits;
    } else if int_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from((end + 1 + exp_sign).min(bytes.len()));
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::{leading_float, read_number};

    #[test]
    fn leading_float_stops_at_trailing_text() {
        assert_eq!(leading_float("30 min"), Some(30.0));
        assert_eq!(leading_float("30,5"), Some(30.0));
        assert_eq!(leading_float("  12.5km"), Some(12.5));
        assert_eq!(leading_float("1e2x"), Some(100.0));
        assert_eq!(leading_float("3e"), Some(3.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("-4."), Some(-4.0));
    }

    #[test]
    fn leading_float_needs_digits_up_front() {
        assert_eq!(leading_float(""), None);
        assert_eq!(leading_float("min 30"), None);
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("-"), None);
        assert_eq!(leading_float("inf"), None);
        assert_eq!(leading_float("nan"), None);
    }

    #[test]
    fn leading_float_reads_infinity() {
        assert_eq!(leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(leading_float("-Infinityx"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn read_number_accepts_plain_literals() {
        assert_eq!(read_number(" 30 "), 30.0);
        assert_eq!(read_number("-5"), -5.0);
        assert_eq!(read_number("+1.5e1"), 15.0);
        assert_eq!(read_number(""), 0.0);
        assert_eq!(read_number("0x1e"), 30.0);
        assert_eq!(read_number("0b11"), 3.0);
        assert_eq!(read_number("Infinity"), f64::INFINITY);
        assert_eq!(read_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn read_number_rejects_other_spellings() {
        for text in ["inf", "infinity", "nan", "NaN", "30s", "1e", "-", ".", "0x", "-0x1", "0xz"] {
            assert!(read_number(text).is_nan(), "{text:?} should read as NaN");
        }
    }
}
