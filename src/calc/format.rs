// ---------------------------------------------------------------------------
// Fixed-point display of computed values
// ---------------------------------------------------------------------------

/// Enough fractional digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Format `value` with exactly `digits` decimals.
///
/// Non-finite values print as `Infinity`, `-Infinity` and `NaN`. A value
/// lying exactly halfway between two outputs rounds away from zero, and
/// negative zero prints without a sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 == 0.0
    if value == 0.0 {
        return format!("{:.digits$}", 0.0_f64);
    }

    // `{:.N}` breaks exact ties to even; only exact ties need adjusting.
    match round_exact_tie(value.abs(), digits) {
        Some(magnitude) if value < 0.0 => format!("-{magnitude}"),
        Some(magnitude) => magnitude,
        None => format!("{value:.digits$}"),
    }
}

/// If the exact decimal expansion of `magnitude` is `5` followed only by
/// zeros past `digits`, return it rounded up at that position.
fn round_exact_tie(magnitude: f64, digits: usize) -> Option<String> {
    let exact = format!("{:.*}", EXACT_DIGITS, magnitude);
    let (int_part, frac_part) = exact.split_once('.')?;
    let kept = frac_part.get(..digits)?;
    let rest = frac_part.get(digits..)?;

    let tail = rest.strip_prefix('5')?;
    if tail.bytes().any(|b| b != b'0') {
        return None;
    }

    let mut number: Vec<u8> = format!("{int_part}{kept}").into_bytes();
    let mut carry = true;
    for d in number.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry {
        number.insert(0, b'1');
    }

    let split = number.len() - digits;
    let (int_digits, frac_digits) = number.split_at(split);
    let int_digits = String::from_utf8_lossy(int_digits);
    if digits == 0 {
        Some(int_digits.into_owned())
    } else {
        Some(format!("{int_digits}.{}", String::from_utf8_lossy(frac_digits)))
    }
}
