//! Collaborator contracts between the menu engine and the application.
//!
//! The engine never touches hardware. Everything it needs from the outside
//! world goes through four small traits:
//!
//! - [`Navigator`]: samples the input hardware (switches, rotary encoder,
//!   analog keypad, serial console) and reports one [`NavAction`] per poll.
//! - [`DisplayDevice`]: shows the title and current lines on an LCD, OLED,
//!   LED matrix or serial monitor.
//! - [`ValueRequest`]: hands out the values being edited and takes them back
//!   once the user confirms a change.
//! - [`Clock`]: a millisecond tick for the inactivity timeout.
//!
//! A type implementing all four is a [`Platform`] and can drive a
//! [`Menu`](crate::Menu). All calls are synchronous and must not block.

use crate::catalog::{Id, Value};
use crate::text::Line;

/// A navigation request from the input hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavAction {
    /// Nothing to process this cycle.
    Null,
    /// Next menu item, next list entry or larger value.
    Increment,
    /// Previous menu item, previous list entry or smaller value.
    Decrement,
    /// Select the current item or confirm the edited value.
    Select,
    /// Leave the current menu or abandon the edit.
    Escape,
}

/// A request to the display hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayAction {
    /// Initialise the display. Sent once, before anything else.
    Init,
    /// Clear the display. No message.
    Clear,
    /// Show the message on the first line. Single line displays ignore this.
    ShowLine0,
    /// Show the message on the second line.
    ShowLine1,
}

/// Source of navigation actions.
pub trait Navigator {
    /// Sample the input and return the next action.
    ///
    /// `inc_delta` arrives as `1`; raise it to request a larger step for
    /// numeric inputs, for example on a fast encoder turn.
    fn navigate(&mut self, inc_delta: &mut u16) -> NavAction;
}

/// Sink for display output.
pub trait DisplayDevice {
    /// Carry out `action`, showing `message` where the action has one.
    ///
    /// Returns `false` if the display could not do it. The engine carries on
    /// either way.
    fn display(&mut self, action: DisplayAction, message: Option<&str>) -> bool;
}

/// Access to the application values edited through the menu.
pub trait ValueRequest {
    /// Fetch the current value of input `id` before it is edited.
    ///
    /// Returning `None` cancels the edit and nothing is changed.
    fn get(&mut self, id: Id) -> Option<Value>;

    /// Store a confirmed value for input `id`.
    ///
    /// Called when the user selects the edited value, after every change for
    /// live feedback items, and with [`Value::default`] when an action item is
    /// run.
    fn set(&mut self, id: Id, value: &Value);

    /// Optional text shown while an action item waits for confirmation.
    fn status(&mut self, id: Id) -> Option<Line> {
        let _ = id;
        None
    }
}

/// Millisecond time source.
pub trait Clock {
    /// Milliseconds since some fixed point. Allowed to wrap.
    fn millis(&self) -> u32;
}

/// Everything a [`Menu`](crate::Menu) needs from the application.
pub trait Platform: Navigator + DisplayDevice + ValueRequest + Clock {}

impl<T: Navigator + DisplayDevice + ValueRequest + Clock> Platform for T {}
