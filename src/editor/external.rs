//! Values supplied by the application.
//!
//! Used for inputs the menu cannot step itself, such as a potentiometer or a
//! numeric keypad handled by application code. The value is fetched again on
//! every poll and shown as an integer; `Select` confirms the last one seen.

use super::{Context, Direction, Edit};
use crate::catalog::{InputDefinition, Value};
use crate::config::Style;
use crate::error::Error;
use crate::text::{self, Line};

#[derive(Debug)]
pub(crate) struct ExternalEditor {
    value: i32,
}

impl ExternalEditor {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value: value.magnitude,
        }
    }

    /// Take a freshly fetched value. Returns whether it differs.
    pub(crate) fn refresh(&mut self, value: Value) -> bool {
        let changed = value.magnitude != self.value;
        self.value = value.magnitude;
        changed
    }
}

impl Edit for ExternalEditor {
    fn value(&self) -> Value {
        Value::new(self.value)
    }

    fn step(&mut self, _direction: Direction, _input: &InputDefinition, _cx: &Context<'_>) -> bool {
        false
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
