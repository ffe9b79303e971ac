//! Reverse the decimal digits of a signed 32-bit integer
//!
//! Both variants return 0 when the reversed value does not fit in `i32`.

/// Reverse by formatting the magnitude, reversing the characters and parsing back.
pub fn reverse_string(x: i32) -> i32 {
    let digits: String = x.unsigned_abs().to_string().chars().rev().collect();
    let Ok(reversed) = digits.parse::<i64>() else {
        return 0;
    };
    let signed = if x < 0 { -reversed } else { reversed };
    i32::try_from(signed).unwrap_or(0)
}

/// Reverse by peeling digits off with `%` and `/`, checking for overflow
/// before every multiply-add.
pub fn reverse_math(mut x: i32) -> i32 {
    let mut result: i32 = 0;

    while x != 0 {
        let digit = x % 10;
        x /= 10;

        if result > i32::MAX / 10 || (result == i32::MAX / 10 && digit > 7) {
            return 0;
        }
        if result < i32::MIN / 10 || (result == i32::MIN / 10 && digit < -8) {
            return 0;
        }

        result = result * 10 + digit;
    }

    result
}
