//! Pick list selection.

use super::{Context, Direction, Edit};
use crate::catalog::{InputDefinition, Value};
use crate::config::Style;
use crate::error::Error;
use crate::text::{self, Line};

/// Index into the separated entries of the input's `aux` list.
#[derive(Debug)]
pub(crate) struct ListEditor {
    index: i32,
}

impl ListEditor {
    /// An index outside the list starts at the first entry.
    pub(crate) fn new(value: Value, input: &InputDefinition, style: &Style) -> Self {
        let len = text::list_count(input.aux, style.list_separator) as i32;
        let index = if (0..len).contains(&value.magnitude) {
            value.magnitude
        } else {
            0
        };
        Self { index }
    }
}

impl Edit for ListEditor {
    fn value(&self) -> Value {
        Value::new(self.index)
    }

    fn step(&mut self, direction: Direction, input: &InputDefinition, cx: &Context<'_>) -> bool {
        let len = text::list_count(input.aux, cx.style.list_separator) as i32;
        if len == 0 {
            return false;
        }
        let last = len - 1;
        let next = match direction {
            Direction::Up if self.index < last => self.index + 1,
            Direction::Up if cx.wrap => 0,
            Direction::Down if self.index > 0 => self.index - 1,
            Direction::Down if cx.wrap => last,
            _ => self.index,
        };
        let changed = next != self.index;
        self.index = next;
        changed
    }

    fn render_field(
        &self,
        input: &InputDefinition,
        style: &Style,
        line: &mut Line,
    ) -> Result<(), Error> {
        let entry = text::list_item(input.aux, self.index as usize, style.list_separator);
        text::push_padded(line, entry.unwrap_or(""), usize::from(input.field_width));
        Ok(())
    }
}
