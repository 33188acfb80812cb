//! Scripted platform shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};

use lcdmenu::catalog::{Id, Value};
use lcdmenu::platform::{Clock, DisplayAction, DisplayDevice, NavAction, Navigator, ValueRequest};
use lcdmenu::text::Line;

/// One display call as seen by the platform.
pub type Shown = (DisplayAction, Option<String>);

/// Plays back queued navigation actions and records everything the menu does.
#[derive(Debug, Default)]
pub struct MockPlatform {
    pub keys: VecDeque<(NavAction, u16)>,
    pub shown: Vec<Shown>,
    pub values: HashMap<Id, Value>,
    pub sets: Vec<(Id, Value)>,
    pub statuses: HashMap<Id, &'static str>,
    pub now: Cell<u32>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, id: Id, value: Value) -> Self {
        self.values.insert(id, value);
        self
    }

    /// Queue one action with the default step.
    pub fn press(&mut self, action: NavAction) {
        self.keys.push_back((action, 1));
    }

    /// Queue one action asking for a larger step.
    pub fn press_fast(&mut self, action: NavAction, inc_delta: u16) {
        self.keys.push_back((action, inc_delta));
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Text of the most recent `action` display call.
    pub fn last(&self, action: DisplayAction) -> Option<&str> {
        self.shown
            .iter()
            .rev()
            .find(|(a, _)| *a == action)
            .and_then(|(_, m)| m.as_deref())
    }

    pub fn count(&self, action: DisplayAction) -> usize {
        self.shown.iter().filter(|(a, _)| *a == action).count()
    }

    pub fn take_shown(&mut self) -> Vec<Shown> {
        std::mem::take(&mut self.shown)
    }
}

impl Navigator for MockPlatform {
    fn navigate(&mut self, inc_delta: &mut u16) -> NavAction {
        match self.keys.pop_front() {
            Some((action, delta)) => {
                *inc_delta = delta;
                action
            }
            None => NavAction::Null,
        }
    }
}

impl DisplayDevice for MockPlatform {
    fn display(&mut self, action: DisplayAction, message: Option<&str>) -> bool {
        self.shown.push((action, message.map(String::from)));
        true
    }
}

impl ValueRequest for MockPlatform {
    fn get(&mut self, id: Id) -> Option<Value> {
        self.values.get(&id).copied()
    }

    fn set(&mut self, id: Id, value: &Value) {
        self.values.insert(id, *value);
        self.sets.push((id, *value));
    }

    fn status(&mut self, id: Id) -> Option<Line> {
        self.statuses.get(&id).map(|s| Line::try_from(*s).unwrap())
    }
}

impl Clock for MockPlatform {
    fn millis(&self) -> u32 {
        self.now.get()
    }
}

/// Shorthand for a display line 0 call.
pub fn line0(text: &str) -> Shown {
    (DisplayAction::ShowLine0, Some(text.to_string()))
}

/// Shorthand for a display line 1 call.
pub fn line1(text: &str) -> Shown {
    (DisplayAction::ShowLine1, Some(text.to_string()))
}

pub fn clear() -> Shown {
    (DisplayAction::Clear, None)
}

use lcdmenu::catalog::{Catalog, InputDefinition, MenuHeader, MenuItem};
use lcdmenu::{Menu, Options};

pub const MAIN: Id = 10;
pub const DISPLAY: Id = 11;

pub const FRUIT: Id = 50;
pub const CONTRAST: Id = 51;
pub const BACKLIGHT: Id = 52;
pub const PRICE: Id = 53;
pub const FREQ: Id = 54;
pub const RESET: Id = 55;
pub const KNOB: Id = 56;

pub static MENUS: [MenuHeader; 6] = [
    MenuHeader::new(MAIN, "Main Menu", 20, 28),
    MenuHeader::new(DISPLAY, "Display", 30, 31),
    MenuHeader::new(12, "Deep 1", 40, 40),
    MenuHeader::new(13, "Deep 2", 41, 41),
    MenuHeader::new(14, "Deep 3", 42, 42),
    MenuHeader::new(15, "Deep 4", 43, 43),
];

/// Item 22 is left out on purpose; the main menu has a gap there.
pub static ITEMS: [MenuItem; 13] = [
    MenuItem::menu(20, "Display", DISPLAY),
    MenuItem::edit(21, "Fruit", FRUIT),
    MenuItem::menu(23, "Deep", 12),
    MenuItem::edit(24, "Price", PRICE),
    MenuItem::edit_live(25, "Frequency", FREQ),
    MenuItem::edit_live(26, "Factory reset", RESET),
    MenuItem::edit(27, "Knob", KNOB),
    MenuItem::edit(28, "Ghost", 99),
    MenuItem::edit_live(30, "Contrast", CONTRAST),
    MenuItem::edit(31, "Backlight", BACKLIGHT),
    MenuItem::menu(40, "Level 2", 13),
    MenuItem::menu(41, "Level 3", 14),
    MenuItem::menu(42, "Level 4", 15),
];

pub static INPUTS: [InputDefinition; 7] = [
    InputDefinition::list(FRUIT, "Fruit", 6, "Apple|Orange|Pear"),
    InputDefinition::integer(CONTRAST, "Level", 3, Value::new(0), Value::new(10), 10),
    InputDefinition::boolean(BACKLIGHT, "Light"),
    InputDefinition::fixed_point(PRICE, "Price", 7, Value::new(0), Value::new(99999), 1),
    InputDefinition::engineering(
        FREQ,
        "Freq",
        7,
        Value::with_power(1000, 0),
        Value::with_power(999999, 6),
        1,
        "Hz",
    ),
    InputDefinition::run(RESET, "Confirm"),
    InputDefinition::external(KNOB, "Knob", 4, 10),
];

pub fn catalog() -> Catalog<'static> {
    Catalog::new(&MENUS, &ITEMS, &INPUTS)
}

/// A menu over the test catalog, already started and with the start up
/// output cleared.
pub fn started(platform: MockPlatform) -> Menu<'static, MockPlatform> {
    started_with(platform, Options::default())
}

pub fn started_with(platform: MockPlatform, options: Options) -> Menu<'static, MockPlatform> {
    let mut menu = Menu::new(catalog(), platform);
    menu.set_options(options);
    assert!(menu.poll(true));
    menu.platform_mut().take_shown();
    menu
}

/// Press each action in turn, polling once per action.
pub fn press(menu: &mut Menu<'static, MockPlatform>, actions: &[NavAction]) {
    for &action in actions {
        menu.platform_mut().press(action);
        menu.poll(false);
    }
}
