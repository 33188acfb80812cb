//! Signed integers.

use super::{Context, Direction, Edit, ordered, saturate};
use crate::catalog::{InputDefinition, Value};
use crate::config::Style;
use crate::error::Error;
use crate::text::{self, Line};

/// Integer in `range[0]..=range[1]`, shown in radix `base`.
///
/// Steps clamp at the range ends; integers never wrap.
#[derive(Debug)]
pub(crate) struct IntegerEditor {
    value: i32,
}

impl IntegerEditor {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value: value.magnitude,
        }
    }
}

impl Edit for IntegerEditor {
    fn value(&self) -> Value {
        Value::new(self.value)
    }

    fn step(&mut self, direction: Direction, input: &InputDefinition, cx: &Context<'_>) -> bool {
        let (lo, hi) = ordered(
            i64::from(input.range[0].magnitude),
            i64::from(input.range[1].magnitude),
        );
        let delta = i64::from(cx.inc_delta);
        let current = i64::from(self.value);
        let next = match direction {
            Direction::Up => current + delta,
            Direction::Down => current - delta,
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
        text::push_number(
            line,
            i64::from(self.value),
            input.base,
            usize::from(input.field_width),
            false,
            style.overflow_marker,
        )
    }
}
