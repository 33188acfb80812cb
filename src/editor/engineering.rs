//! Engineering values with SI prefixes.
//!
//! The value is `magnitude × 10^power` where the last
//! [`Style::engu_decimals`] digits of the magnitude are the fraction and the
//! power is a multiple of three. Stepping keeps the magnitude inside one
//! prefix band, `1.000 <= magnitude < 1000.000`, moving to the next band up or
//! down when a step crosses either edge:
//!
//! ```text
//!   999.999 k  ──Increment──▶  1.000 M
//!     1.000 k  ──Decrement──▶  999.000 (no prefix)
//! ```
//!
//! Bounds compare on the numeric value `magnitude × 10^power`, so a step that
//! overshoots the band is still held at the range ends.

use core::cmp::Ordering;

use super::{Context, Direction, Edit, saturate};
use crate::catalog::{InputDefinition, Value};
use crate::config::{ENGU_RANGE, MAX_DECIMALS, Style};
use crate::error::Error;
use crate::text::{self, Line};

/// Ratio between neighbouring prefix bands.
const BAND: i64 = 1000;

#[derive(Debug)]
pub(crate) struct EngineeringEditor {
    value: Value,
}

impl EngineeringEditor {
    /// The power is clamped to the prefix range and rounded toward zero to a
    /// multiple of three.
    pub(crate) fn new(value: Value) -> Self {
        let power = value.power.clamp(-ENGU_RANGE, ENGU_RANGE) / 3 * 3;
        Self {
            value: Value::with_power(value.magnitude, power),
        }
    }
}

/// Order `a × 10^a_power` against `b × 10^b_power`.
fn compare(a: i64, a_power: i8, b: i64, b_power: i8) -> Ordering {
    if a_power < b_power {
        return compare(b, b_power, a, a_power).reverse();
    }
    let shift = (i16::from(a_power) - i16::from(b_power)) as u32;
    let a = i128::from(a);
    let b = i128::from(b);
    match 10i128.checked_pow(shift).and_then(|p| a.checked_mul(p)) {
        Some(scaled) => scaled.cmp(&b),
        // a is non-zero and scaled beyond any i64
        None if a != 0 => a.cmp(&0),
        None => 0.cmp(&b),
    }
}

fn above(power: i8, magnitude: i64, bound: &Value) -> bool {
    compare(magnitude, power, i64::from(bound.magnitude), bound.power) == Ordering::Greater
}

fn below(power: i8, magnitude: i64, bound: &Value) -> bool {
    compare(magnitude, power, i64::from(bound.magnitude), bound.power) == Ordering::Less
}

impl Edit for EngineeringEditor {
    fn value(&self) -> Value {
        self.value
    }

    fn step(&mut self, direction: Direction, input: &InputDefinition, cx: &Context<'_>) -> bool {
        let scale = text::pow10(cx.style.engu_decimals.min(MAX_DECIMALS));
        let step = i64::from(input.base) * i64::from(cx.inc_delta);
        let [lo, hi] = input.range;
        let mut power = self.value.power;
        let mut magnitude = i64::from(self.value.magnitude);

        match direction {
            Direction::Up => {
                magnitude += step;
                while magnitude >= BAND * scale && power < ENGU_RANGE {
                    magnitude /= BAND;
                    power += 3;
                }
                if above(power, magnitude, &hi) {
                    magnitude = i64::from(hi.magnitude);
                    power = hi.power;
                }
            }
            Direction::Down => {
                magnitude -= step;
                // Only positive values move down a band; zero and below are
                // left to the lower bound.
                while magnitude > 0 && magnitude < scale && power > -ENGU_RANGE {
                    magnitude *= BAND;
                    power -= 3;
                }
                if below(power, magnitude, &lo) {
                    magnitude = i64::from(lo.magnitude);
                    power = lo.power;
                }
            }
        }

        let next = Value::with_power(saturate(magnitude), power);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    fn render_field(
        &self,
        input: &InputDefinition,
        style: &Style,
        line: &mut Line,
    ) -> Result<(), Error> {
        text::push_decimal(
            line,
            i64::from(self.value.magnitude),
            style.engu_decimals.min(MAX_DECIMALS),
            usize::from(input.field_width),
            style.decimal_point,
            style.overflow_marker,
        )
    }

    fn render_suffix(&self, input: &InputDefinition, style: &Style, line: &mut Line) {
        text::push_char(line, style.unit_prefix(self.value.power));
        text::push_truncated(line, input.aux, input.aux.len());
    }
}
