//! Fixed-capacity text helpers for display lines.
//!
//! Nothing here allocates. Text that does not fit a [`Line`] is cut off at
//! its capacity rather than failing, since a display line is only ever shown,
//! never parsed back.

use heapless::String;

use crate::config::MAX_LINE_SIZE;
use crate::error::Error;

/// One rendered display line.
pub type Line = String<MAX_LINE_SIZE>;

/// Push one character, dropping it if the line is full.
pub(crate) fn push_char(line: &mut Line, c: char) {
    let _ = line.push(c);
}

/// Push at most `max_chars` characters of `s`.
pub(crate) fn push_truncated(line: &mut Line, s: &str, max_chars: usize) {
    for c in s.chars().take(max_chars) {
        if line.push(c).is_err() {
            break;
        }
    }
}

/// Push `s` cut or padded with trailing spaces to exactly `width` characters.
pub(crate) fn push_padded(line: &mut Line, s: &str, width: usize) {
    let mut written = 0;
    for c in s.chars().take(width) {
        push_char(line, c);
        written += 1;
    }
    for _ in written..width {
        push_char(line, ' ');
    }
}

/// Push `value` right-justified in a field of `width` characters.
///
/// Digits above 9 are written as `A`-`F`. A radix outside `2..=16` falls back
/// to decimal. With `lead_zero` the field is padded with `0` instead of spaces.
///
/// # Errors
///
/// If the number and its sign do not fit the field, the field is filled with
/// spaces and a single `overflow` marker in the last position, and
/// [`Error::DisplayOverflow`] is returned.
pub fn push_number(
    line: &mut Line,
    value: i64,
    radix: u8,
    width: usize,
    lead_zero: bool,
    overflow: char,
) -> Result<(), Error> {
    let radix = if (2..=16).contains(&radix) {
        u64::from(radix)
    } else {
        10
    };

    // 64 binary digits is the longest possible rendering of an i64 magnitude.
    let mut digits = [0u8; 64];
    let mut len = 0;
    let mut rest = value.unsigned_abs();
    loop {
        let digit = (rest % radix) as u32;
        digits[len] = char::from_digit(digit, radix as u32)
            .map(|c| c.to_ascii_uppercase() as u8)
            .unwrap_or(b'?');
        len += 1;
        rest /= radix;
        if rest == 0 {
            break;
        }
    }

    let sign = usize::from(value < 0);
    if len + sign > width {
        return push_overflow(line, width, overflow);
    }

    let pad = width - len - sign;
    if lead_zero {
        if sign == 1 {
            push_char(line, '-');
        }
        for _ in 0..pad {
            push_char(line, '0');
        }
    } else {
        for _ in 0..pad {
            push_char(line, ' ');
        }
        if sign == 1 {
            push_char(line, '-');
        }
    }
    for &d in digits[..len].iter().rev() {
        push_char(line, d as char);
    }
    Ok(())
}

/// Fill a field of `width` characters with spaces and a trailing `marker`.
fn push_overflow(line: &mut Line, width: usize, marker: char) -> Result<(), Error> {
    for _ in 1..width {
        push_char(line, ' ');
    }
    push_char(line, marker);
    Err(Error::DisplayOverflow)
}

/// `10^exponent`.
pub(crate) const fn pow10(exponent: u8) -> i64 {
    let mut value = 1;
    let mut i = 0;
    while i < exponent {
        value *= 10;
        i += 1;
    }
    value
}

/// Push a scaled decimal right-justified in a field of `width` characters.
///
/// The last `decimals` digits of `magnitude` are the fraction. The integer part
/// takes the field less the fraction and the decimal point; the fraction is
/// zero padded. Values between -1 and 0 keep their sign (`-0.50`).
///
/// # Errors
///
/// [`Error::DisplayOverflow`] if the integer part does not fit, in which case
/// the whole field shows the overflow marker.
pub(crate) fn push_decimal(
    line: &mut Line,
    magnitude: i64,
    decimals: u8,
    width: usize,
    point: char,
    overflow: char,
) -> Result<(), Error> {
    if decimals == 0 {
        return push_number(line, magnitude, 10, width, false, overflow);
    }

    let scale = pow10(decimals);
    let whole = magnitude / scale;
    let fraction = (magnitude % scale).abs();
    let whole_width = width.saturating_sub(usize::from(decimals) + 1);

    let mut field = Line::new();
    let fits = if magnitude < 0 && whole == 0 {
        if whole_width < 2 {
            Err(Error::DisplayOverflow)
        } else {
            for _ in 2..whole_width {
                push_char(&mut field, ' ');
            }
            push_truncated(&mut field, "-0", 2);
            Ok(())
        }
    } else {
        push_number(&mut field, whole, 10, whole_width, false, overflow)
    };
    if fits.is_err() {
        return push_overflow(line, width, overflow);
    }

    push_char(&mut field, point);
    push_number(&mut field, fraction, 10, usize::from(decimals), true, overflow)?;
    push_truncated(line, &field, MAX_LINE_SIZE);
    Ok(())
}

/// Number of entries in a separated list. An empty string is an empty list.
///
/// ```rust
/// use lcdmenu::text::list_count;
///
/// assert_eq!(list_count("Apple|Orange|Pear", '|'), 3);
/// assert_eq!(list_count("", '|'), 0);
/// ```
pub fn list_count(list: &str, separator: char) -> usize {
    if list.is_empty() {
        0
    } else {
        list.split(separator).count()
    }
}

/// The zero based `index`th entry of a separated list.
///
/// ```rust
/// use lcdmenu::text::list_item;
///
/// assert_eq!(list_item("Apple|Orange|Pear", 1, '|'), Some("Orange"));
/// assert_eq!(list_item("Apple|Orange|Pear", 3, '|'), None);
/// ```
pub fn list_item(list: &str, index: usize, separator: char) -> Option<&str> {
    if list.is_empty() {
        return None;
    }
    list.split(separator).nth(index)
}
