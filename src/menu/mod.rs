//! The menu session controller.
//!
//! [`Menu`] ties the catalog, the menu stack, the value editors and the
//! application's [`Platform`] together. It is driven by calling
//! [`Menu::poll`] once per pass of the application's main loop:
//!
//! ```text
//!                 poll(start)
//!                      │
//!        ┌─────────────┼──────────────────────────┐
//!        ▼             ▼                          ▼
//!  ┌──────────┐  Select / start  ┌──────────┐  Select on input  ┌──────────┐
//!  │   Idle   │ ───────────────▶ │ Browsing │ ────────────────▶ │ Editing  │
//!  │          │ ◀─────────────── │          │ ◀──────────────── │          │
//!  └──────────┘  Escape at root  └──────────┘  Select / Escape  └──────────┘
//!        ▲          or timeout                                       │
//!        └───────────────────────── timeout ─────────────────────────┘
//! ```
//!
//! Every poll samples exactly one navigation action. The display always shows
//! the current menu title (or the item being edited) on line 0 and the
//! selected item (or the value being edited) on line 1.
//!
//! # Examples
//!
//! ```rust
//! use lcdmenu::catalog::{Catalog, Id, InputDefinition, MenuHeader, MenuItem, Value};
//! use lcdmenu::platform::{Clock, DisplayAction, DisplayDevice, NavAction, Navigator, ValueRequest};
//! use lcdmenu::Menu;
//!
//! static MENUS: [MenuHeader; 1] = [MenuHeader::new(10, "Settings", 20, 20)];
//! static ITEMS: [MenuItem; 1] = [MenuItem::edit(20, "Volume", 30)];
//! static INPUTS: [InputDefinition; 1] = [
//!     InputDefinition::integer(30, "Vol", 3, Value::new(0), Value::new(10), 10),
//! ];
//!
//! struct Board {
//!     keys: &'static [NavAction],
//!     volume: Value,
//! }
//!
//! impl Navigator for Board {
//!     fn navigate(&mut self, _inc_delta: &mut u16) -> NavAction {
//!         match self.keys.split_first() {
//!             Some((key, rest)) => {
//!                 self.keys = rest;
//!                 *key
//!             }
//!             None => NavAction::Null,
//!         }
//!     }
//! }
//!
//! impl DisplayDevice for Board {
//!     fn display(&mut self, _action: DisplayAction, _message: Option<&str>) -> bool {
//!         true
//!     }
//! }
//!
//! impl ValueRequest for Board {
//!     fn get(&mut self, _id: Id) -> Option<Value> {
//!         Some(self.volume)
//!     }
//!
//!     fn set(&mut self, _id: Id, value: &Value) {
//!         self.volume = *value;
//!     }
//! }
//!
//! impl Clock for Board {
//!     fn millis(&self) -> u32 {
//!         0
//!     }
//! }
//!
//! let board = Board {
//!     keys: &[NavAction::Select, NavAction::Increment, NavAction::Select],
//!     volume: Value::new(4),
//! };
//! let mut menu = Menu::new(Catalog::new(&MENUS, &ITEMS, &INPUTS), board);
//!
//! assert!(menu.poll(true));
//! while !menu.platform().keys.is_empty() {
//!     menu.poll(false);
//! }
//! assert_eq!(menu.platform().volume, Value::new(5));
//! assert!(menu.is_in_menu());
//! assert!(!menu.is_in_edit());
//! ```

mod stack;
mod timer;

pub use stack::MenuStack;
pub use timer::InactivityTimer;

use crate::catalog::{Catalog, Id, InputDefinition, ItemAction, MenuHeader, MenuItem, NO_ID, Value};
use crate::config::{MENU_STACK_SIZE, Options, Style};
use crate::editor::{Context, Editor, Step};
use crate::fmt::{debug, warning};
use crate::platform::{DisplayAction, NavAction, Platform};
use crate::text::{self, Line};

/// Left delimiter around the selected menu item.
const ITEM_OPEN: char = '<';
/// Right delimiter around the selected menu item.
const ITEM_CLOSE: char = '>';

/// What the menu is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Not running.
    Idle,
    /// Moving through a menu.
    Browsing,
    /// Editing a value.
    Editing,
}

/// An edit in progress.
#[derive(Debug)]
struct EditSession {
    editor: Editor,
    input: Id,
    live: bool,
}

#[derive(Debug)]
enum State {
    Idle,
    Browsing,
    Editing(EditSession),
}

/// Menu engine for one and two line displays.
///
/// `N` is the maximum menu depth, counting the root menu as the first level.
/// Selecting a sub-menu when all `N` levels are in use is ignored.
#[derive(Debug)]
pub struct Menu<'a, P: Platform, const N: usize = MENU_STACK_SIZE> {
    catalog: Catalog<'a>,
    platform: P,
    options: Options,
    style: Style,
    stack: MenuStack<N>,
    state: State,
    timer: InactivityTimer,
    initialised: bool,
}

impl<'a, P: Platform> Menu<'a, P> {
    /// Create a menu with the default depth of [`MENU_STACK_SIZE`] levels.
    pub fn new(catalog: Catalog<'a>, platform: P) -> Self {
        Self::with_depth(catalog, platform)
    }
}

impl<'a, P: Platform, const N: usize> Menu<'a, P, N> {
    /// Create a menu with a depth of `N` levels.
    ///
    /// Nothing is sent to the platform until the menu starts.
    pub fn with_depth(catalog: Catalog<'a>, platform: P) -> Self {
        let options = Options::default();
        Self {
            catalog,
            platform,
            options,
            style: Style::default(),
            stack: MenuStack::new(),
            state: State::Idle,
            timer: InactivityTimer::new(options.timeout_ms),
            initialised: false,
        }
    }

    /// Send [`DisplayAction::Init`] to the display.
    ///
    /// Only the first call has any effect. Starting the menu calls this, so it
    /// is only needed to initialise the display before the menu is first shown.
    pub fn begin(&mut self) {
        if !self.initialised {
            self.initialised = true;
            self.show(DisplayAction::Init, None);
        }
    }

    /// Run the menu for one cycle.
    ///
    /// Pass `start = true` to start (or restart) the menu at its root. While
    /// the menu is not running and `start` is false, this only checks for an
    /// auto start `Select` and otherwise returns immediately.
    ///
    /// Returns whether the menu is still running.
    pub fn poll(&mut self, start: bool) -> bool {
        let mut start = start;
        if !self.is_in_menu() && !start {
            if !self.options.auto_start {
                return false;
            }
            let mut inc_delta = 1;
            start = self.platform.navigate(&mut inc_delta) == NavAction::Select;
            if !start {
                return false;
            }
            debug!("menu auto start");
        }

        if start {
            self.start_menu();
        } else {
            if self.is_in_edit() {
                self.handle_input();
            } else {
                self.handle_menu();
            }

            if self.timer.expired(self.platform.millis()) {
                debug!("menu timeout");
                self.reset();
            }

            if !self.is_in_menu() {
                self.show(DisplayAction::Clear, None);
                debug!("menu ended");
            }
        }

        self.is_in_menu()
    }

    /// Stop the menu and return to the root level.
    ///
    /// An edit in progress is abandoned without calling the application.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.stack.truncate_to_root();
    }

    /// Whether the menu is running.
    pub fn is_in_menu(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Whether a value is being edited.
    pub fn is_in_edit(&self) -> bool {
        matches!(self.state, State::Editing(_))
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        match self.state {
            State::Idle => Mode::Idle,
            State::Browsing => Mode::Browsing,
            State::Editing(_) => Mode::Editing,
        }
    }

    /// Current menu depth, `0` at the root.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The current menu, including its cursor.
    pub fn current_menu(&self) -> Option<&MenuHeader> {
        self.stack.current()
    }

    /// The value being edited, before it is committed.
    pub fn edit_value(&self) -> Option<Value> {
        match &self.state {
            State::Editing(session) => Some(session.editor.value()),
            _ => None,
        }
    }

    /// Wrap around the ends of menus and pick lists.
    pub fn set_menu_wrap(&mut self, wrap: bool) {
        self.options.wrap = wrap;
    }

    /// Start the menu on a `Select` while it is not running.
    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.options.auto_start = auto_start;
    }

    /// Inactivity timeout in milliseconds, `0` to disable.
    pub fn set_timeout(&mut self, timeout_ms: u32) {
        self.options.timeout_ms = timeout_ms;
        self.timer.set_timeout(timeout_ms);
    }

    /// Replace all options.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.timer.set_timeout(options.timeout_ms);
    }

    /// The current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the rendering style.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// The rendering style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The application platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The application platform, mutably.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    fn start_menu(&mut self) {
        self.begin();
        debug!("menu start");

        let root = match self.catalog.find_menu(NO_ID) {
            Ok(root) => *root,
            Err(e) => {
                warning!("no root menu: {}", e);
                self.state = State::Idle;
                return;
            }
        };
        if let Err(e) = self.stack.reset(root) {
            warning!("menu stack unusable: {}", e);
            self.state = State::Idle;
            return;
        }
        self.enter_menu();
    }

    /// Show the current menu as newly entered.
    fn enter_menu(&mut self) {
        self.state = State::Browsing;
        self.show(DisplayAction::Clear, None);

        let Some(menu) = self.stack.current_mut() else {
            return;
        };
        stack::settle(menu, &self.catalog);
        let title = menu.label;

        let mut line = Line::new();
        text::push_truncated(&mut line, title, self.style.header_label_size);
        self.show(DisplayAction::ShowLine0, Some(line.as_str()));
        self.touch();
        self.show_cursor();
    }

    fn show_cursor(&mut self) {
        let Some(current) = self.stack.current().map(|m| m.current_item) else {
            return;
        };
        if let Ok(item) = self.catalog.find_item(current) {
            let mut line = Line::new();
            text::push_char(&mut line, ITEM_OPEN);
            text::push_truncated(&mut line, item.label, self.style.item_label_size);
            text::push_char(&mut line, ITEM_CLOSE);
            self.show(DisplayAction::ShowLine1, Some(line.as_str()));
        }
    }

    fn handle_menu(&mut self) {
        let mut inc_delta = 1;
        let action = self.platform.navigate(&mut inc_delta);
        if action != NavAction::Null {
            self.touch();
        }

        match action {
            NavAction::Increment | NavAction::Decrement => {
                let forward = action == NavAction::Increment;
                let moved = match self.stack.current_mut() {
                    Some(menu) => stack::advance(menu, &self.catalog, forward, self.options.wrap),
                    None => false,
                };
                if moved {
                    self.show_cursor();
                }
            }
            NavAction::Select => self.select_item(),
            NavAction::Escape => {
                if self.stack.pop() {
                    self.enter_menu();
                } else {
                    self.state = State::Idle;
                }
            }
            NavAction::Null => {}
        }
    }

    fn select_item(&mut self) {
        let Some(current) = self.stack.current().map(|m| m.current_item) else {
            return;
        };
        let Ok(item) = self.catalog.find_item(current) else {
            return;
        };

        match item.action {
            ItemAction::EnterMenu => {
                let menu = match self.catalog.find_menu(item.target) {
                    Ok(menu) => *menu,
                    Err(e) => {
                        debug!("menu {} not found: {}", item.target, e);
                        return;
                    }
                };
                match self.stack.push(menu) {
                    Ok(()) => self.enter_menu(),
                    Err(e) => debug!("menu {} not entered: {}", item.target, e),
                }
            }
            ItemAction::EditValue | ItemAction::EditValueWithLiveFeedback => {
                match self.catalog.find_input(item.target) {
                    Ok(input) => {
                        let live = item.action == ItemAction::EditValueWithLiveFeedback;
                        self.start_edit(item, input, live);
                    }
                    Err(e) => debug!("input {} not found: {}", item.target, e),
                }
            }
        }
    }

    fn start_edit(&mut self, item: &MenuItem, input: &InputDefinition, live: bool) {
        self.show(DisplayAction::Clear, None);
        let mut line = Line::new();
        text::push_truncated(&mut line, item.label, self.style.item_label_size);
        self.show(DisplayAction::ShowLine0, Some(line.as_str()));
        self.touch();

        match Editor::start(input, &self.style, &mut self.platform) {
            Ok(editor) => {
                self.state = State::Editing(EditSession {
                    editor,
                    input: input.id,
                    live,
                });
                self.show_editor();
            }
            Err(e) => {
                debug!("input {} not edited: {}", input.id, e);
                self.enter_menu();
            }
        }
    }

    fn show_editor(&mut self) {
        let State::Editing(session) = &self.state else {
            return;
        };
        let Ok(input) = self.catalog.find_input(session.input) else {
            return;
        };
        let (line, rendered) = session.editor.render(input, &self.style);
        if let Err(e) = rendered {
            debug!("input {} display: {}", input.id, e);
        }
        self.show(DisplayAction::ShowLine1, Some(line.as_str()));
    }

    fn handle_input(&mut self) {
        let mut inc_delta = 1;
        let action = self.platform.navigate(&mut inc_delta);
        if action != NavAction::Null {
            self.touch();
        }
        if action == NavAction::Escape {
            debug!("edit cancelled");
            self.end_edit();
            return;
        }

        let cx = Context {
            style: &self.style,
            wrap: self.options.wrap,
            inc_delta,
        };
        let State::Editing(session) = &mut self.state else {
            return;
        };
        let Ok(input) = self.catalog.find_input(session.input) else {
            self.end_edit();
            return;
        };

        let step = session.editor.apply(action, input, &cx, &mut self.platform);
        let live = session.live && session.editor.reports_live();
        let value = session.editor.value();

        match step {
            Ok(Step::Unchanged) => {}
            Ok(Step::Changed) => {
                self.touch();
                self.show_editor();
                if live {
                    self.platform.set(input.id, &value);
                }
            }
            Ok(Step::Ended) => {
                debug!("input {} committed", input.id);
                self.end_edit();
            }
            Err(e) => {
                debug!("input {} edit ended: {}", input.id, e);
                self.end_edit();
            }
        }
    }

    /// Drop the edit session and show the menu it was started from.
    fn end_edit(&mut self) {
        self.enter_menu();
    }

    fn touch(&mut self) {
        let now = self.platform.millis();
        self.timer.restart(now);
    }

    fn show(&mut self, action: DisplayAction, message: Option<&str>) {
        if !self.platform.display(action, message) {
            debug!("display refused {}", action);
        }
    }
}
