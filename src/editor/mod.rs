//! Value editors.
//!
//! One editor exists per kind of [`InputDefinition`]. An edit session follows
//! the same lifecycle for every kind:
//!
//! ```text
//!  start ──▶ get(id) ──None──▶ ended, nothing changed
//!               │
//!               ▼
//!        scratch copy ◀──┐
//!               │        │ Increment / Decrement
//!               ├────────┘ (set(id) after each change with live feedback)
//!               │
//!               ├── Select ──▶ set(id, scratch), ended
//!               └── Escape ──▶ ended by the menu, scratch dropped
//! ```
//!
//! The editors only hold the scratch state for their kind. The definition is
//! passed in on every call, so it is always the catalog record and never a
//! stale copy.

mod boolean;
mod engineering;
mod external;
mod fixed;
mod integer;
mod list;
mod run;


pub(crate) use boolean::BooleanEditor;
pub(crate) use engineering::EngineeringEditor;
pub(crate) use external::ExternalEditor;
pub(crate) use fixed::FixedPointEditor;
pub(crate) use integer::IntegerEditor;
pub(crate) use list::ListEditor;
pub(crate) use run::RunEditor;

use crate::catalog::{InputDefinition, InputKind, Value};
use crate::config::Style;
use crate::error::Error;
use crate::platform::{NavAction, ValueRequest};
use crate::text::{self, Line};

/// Direction of an Increment or Decrement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
}

/// Settings an editor needs while stepping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context<'s> {
    pub style: &'s Style,
    pub wrap: bool,
    pub inc_delta: u16,
}

/// Outcome of applying one navigation action to an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Nothing changed; the display is still current.
    Unchanged,
    /// The scratch value changed and must be shown again.
    Changed,
    /// The edit is over.
    Ended,
}

/// Per-kind editing policy.
pub(crate) trait Edit {
    /// The scratch value as it would be committed.
    fn value(&self) -> Value;

    /// Move the scratch value one step. Returns whether it changed.
    fn step(&mut self, direction: Direction, input: &InputDefinition, cx: &Context<'_>) -> bool;

    /// Write the value field, the part between the field delimiters.
    fn render_field(
        &self,
        input: &InputDefinition,
        style: &Style,
        line: &mut Line,
    ) -> Result<(), Error>;

    /// Write anything that follows the closing delimiter.
    fn render_suffix(&self, _input: &InputDefinition, _style: &Style, _line: &mut Line) {}
}

/// The active editor, one variant per input kind.
#[derive(Debug)]
pub(crate) enum Editor {
    List(ListEditor),
    Boolean(BooleanEditor),
    Integer(IntegerEditor),
    FixedPoint(FixedPointEditor),
    Engineering(EngineeringEditor),
    Run(RunEditor),
    External(ExternalEditor),
}

macro_rules! dispatch {
    ($editor:expr, $e:ident => $body:expr) => {
        match $editor {
            Editor::List($e) => $body,
            Editor::Boolean($e) => $body,
            Editor::Integer($e) => $body,
            Editor::FixedPoint($e) => $body,
            Editor::Engineering($e) => $body,
            Editor::Run($e) => $body,
            Editor::External($e) => $body,
        }
    };
}

impl Editor {
    /// Begin editing `input`, fetching its value from the application.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyList`] for a list input without entries.
    /// - [`Error::ValueUnavailable`] if the application returns no value.
    pub(crate) fn start<V>(
        input: &InputDefinition,
        style: &Style,
        values: &mut V,
    ) -> Result<Self, Error>
    where
        V: ValueRequest + ?Sized,
    {
        if input.kind == InputKind::RunAction {
            return Ok(Editor::Run(RunEditor::new(values.status(input.id))));
        }

        if input.kind == InputKind::List && text::list_count(input.aux, style.list_separator) == 0 {
            return Err(Error::EmptyList);
        }

        let value = values.get(input.id).ok_or(Error::ValueUnavailable)?;
        let editor = match input.kind {
            InputKind::List => Editor::List(ListEditor::new(value, input, style)),
            InputKind::Boolean => Editor::Boolean(BooleanEditor::new(value)),
            InputKind::Integer => Editor::Integer(IntegerEditor::new(value)),
            InputKind::FixedPoint => Editor::FixedPoint(FixedPointEditor::new(value)),
            InputKind::EngineeringUnit => Editor::Engineering(EngineeringEditor::new(value)),
            InputKind::External => Editor::External(ExternalEditor::new(value)),
            InputKind::RunAction => Editor::Run(RunEditor::new(None)),
        };
        Ok(editor)
    }

    /// The scratch value.
    pub(crate) fn value(&self) -> Value {
        dispatch!(self, e => e.value())
    }

    /// Whether the application should see intermediate changes of this editor
    /// when the item asks for live feedback.
    pub(crate) fn reports_live(&self) -> bool {
        !matches!(self, Editor::Run(_) | Editor::External(_))
    }

    /// Apply one navigation action.
    ///
    /// `Select` commits the scratch value through [`ValueRequest::set`].
    /// `Escape` is handled by the menu and is ignored here.
    ///
    /// # Errors
    ///
    /// [`Error::ValueUnavailable`] if an external input stops providing values.
    pub(crate) fn apply<V>(
        &mut self,
        action: NavAction,
        input: &InputDefinition,
        cx: &Context<'_>,
        values: &mut V,
    ) -> Result<Step, Error>
    where
        V: ValueRequest + ?Sized,
    {
        if action == NavAction::Select {
            values.set(input.id, &self.value());
            return Ok(Step::Ended);
        }

        if let Editor::External(e) = self {
            if action == NavAction::Escape {
                return Ok(Step::Unchanged);
            }
            let changed = e.refresh(values.get(input.id).ok_or(Error::ValueUnavailable)?);
            return Ok(if changed { Step::Changed } else { Step::Unchanged });
        }

        let direction = match action {
            NavAction::Increment => Direction::Up,
            NavAction::Decrement => Direction::Down,
            _ => return Ok(Step::Unchanged),
        };
        let changed = dispatch!(self, e => e.step(direction, input, cx));
        Ok(if changed { Step::Changed } else { Step::Unchanged })
    }

    /// Render the second display line.
    ///
    /// Value editors show `label:[field]`; action items show `[text]`.
    ///
    /// # Errors
    ///
    /// [`Error::DisplayOverflow`] if the value did not fit its field. The line
    /// is complete either way, with the overflow marker in the field.
    pub(crate) fn render(
        &self,
        input: &InputDefinition,
        style: &Style,
    ) -> (Line, Result<(), Error>) {
        let mut line = Line::new();
        if let Editor::Run(e) = self {
            e.render(input, style, &mut line);
            return (line, Ok(()));
        }

        text::push_truncated(&mut line, input.label, style.input_label_size);
        text::push_char(&mut line, FIELD_PROMPT);
        text::push_char(&mut line, FIELD_OPEN);
        let result = dispatch!(self, e => e.render_field(input, style, &mut line));
        text::push_char(&mut line, FIELD_CLOSE);
        dispatch!(self, e => e.render_suffix(input, style, &mut line));
        (line, result)
    }
}

/// Separator between an input label and its field.
pub(crate) const FIELD_PROMPT: char = ':';
/// Opening delimiter of a value field.
pub(crate) const FIELD_OPEN: char = '[';
/// Closing delimiter of a value field.
pub(crate) const FIELD_CLOSE: char = ']';

/// Order a range so that `lo <= hi` whichever way round it was declared.
pub(crate) fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Narrow an i64 back into the magnitude range.
pub(crate) fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
