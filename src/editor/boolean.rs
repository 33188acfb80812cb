//! Y/N flags.

use super::{Context, Direction, Edit};
use crate::catalog::{InputDefinition, Value};
use crate::config::Style;
use crate::error::Error;
use crate::text::{self, Line};

#[derive(Debug)]
pub(crate) struct BooleanEditor {
    value: bool,
}

impl BooleanEditor {
    /// Any non-zero magnitude is true.
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value: value.magnitude != 0,
        }
    }
}

impl Edit for BooleanEditor {
    fn value(&self) -> Value {
        Value::new(i32::from(self.value))
    }

    // Both directions toggle.
    fn step(&mut self, _direction: Direction, _input: &InputDefinition, _cx: &Context<'_>) -> bool {
        self.value = !self.value;
        true
    }

    fn render_field(
        &self,
        _input: &InputDefinition,
        style: &Style,
        line: &mut Line,
    ) -> Result<(), Error> {
        let token = if self.value {
            style.bool_true
        } else {
            style.bool_false
        };
        text::push_truncated(line, token, token.len());
        Ok(())
    }
}
