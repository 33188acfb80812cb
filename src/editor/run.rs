//! Action items.

use super::{Context, Direction, Edit};
use crate::catalog::{InputDefinition, Value};
use crate::config::Style;
use crate::error::Error;
use crate::text::{self, Line};

/// Waits for `Select` and then lets the application run its code from
/// [`ValueRequest::set`](crate::platform::ValueRequest::set).
#[derive(Debug)]
pub(crate) struct RunEditor {
    status: Option<Line>,
}

impl RunEditor {
    pub(crate) fn new(status: Option<Line>) -> Self {
        Self { status }
    }

    /// `[status]`, or `[label]` when the application gave no status.
    pub(crate) fn render(&self, input: &InputDefinition, style: &Style, line: &mut Line) {
        text::push_char(line, super::FIELD_OPEN);
        match &self.status {
            Some(status) => text::push_truncated(line, status, status.len()),
            None => text::push_truncated(line, input.label, style.input_label_size),
        }
        text::push_char(line, super::FIELD_CLOSE);
    }
}

impl Edit for RunEditor {
    fn value(&self) -> Value {
        Value::default()
    }

    fn step(&mut self, _direction: Direction, _input: &InputDefinition, _cx: &Context<'_>) -> bool {
        false
    }

    fn render_field(
        &self,
        _input: &InputDefinition,
        _style: &Style,
        _line: &mut Line,
    ) -> Result<(), Error> {
        Ok(())
    }
}
