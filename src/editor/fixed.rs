//! Fixed-point decimals.
//!
//! The magnitude is an integer whose last [`Style::float_decimals`] digits are
//! the fraction, so with two decimals `12345` is `123.45`. The input's `base`
//! is the step in raw units: `50` steps by `0.50`.

use super::{Context, Direction, Edit, ordered, saturate};
use crate::catalog::{InputDefinition, Value};
use crate::config::{MAX_DECIMALS, Style};
use crate::error::Error;
use crate::text::{self, Line};

#[derive(Debug)]
pub(crate) struct FixedPointEditor {
    value: i32,
}

impl FixedPointEditor {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value: value.magnitude,
        }
    }
}

impl Edit for FixedPointEditor {
    fn value(&self) -> Value {
        Value::new(self.value)
    }

    fn step(&mut self, direction: Direction, input: &InputDefinition, cx: &Context<'_>) -> bool {
        let (lo, hi) = ordered(
            i64::from(input.range[0].magnitude),
            i64::from(input.range[1].magnitude),
        );
        let step = i64::from(input.base) * i64::from(cx.inc_delta);
        let current = i64::from(self.value);
        let next = match direction {
            Direction::Up => current + step,
            Direction::Down => current - step,
        }
        .clamp(lo, hi);

        let next = saturate(next);
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
            i64::from(self.value),
            style.float_decimals.min(MAX_DECIMALS),
            usize::from(input.field_width),
            style.decimal_point,
            style.overflow_marker,
        )
    }
}
