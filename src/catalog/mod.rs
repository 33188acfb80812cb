//! Static menu definitions and id lookup.
//!
//! A menu system is described by three tables of plain records:
//!
//! ```text
//!  MenuHeader            MenuItem                     InputDefinition
//! ┌────────────────┐    ┌─────────────────────┐      ┌──────────────────┐
//! │ id             │    │ id                  │      │ id               │
//! │ label          │    │ label               │      │ label, kind      │
//! │ first_item ────┼───▶│ action: EnterMenu ──┼──┐   │ field_width      │
//! │ last_item      │    │         EditValue ──┼──┼──▶│ range, base, aux │
//! │ current_item   │    │ target              │  │   └──────────────────┘
//! └────────────────┘    └─────────────────────┘  │
//!          ▲                                     │
//!          └─────────────────────────────────────┘
//! ```
//!
//! Records link to each other only through ids. Lookups are a linear scan in
//! table order and the first match wins; tables are expected to hold unique
//! ids but this is not checked. The tables are borrowed for the lifetime of the
//! engine and never modified, so on a microcontroller they can live in flash as
//! `static` data.
//!
//! # Examples
//!
//! ```rust
//! use lcdmenu::catalog::{Catalog, InputDefinition, MenuHeader, MenuItem, Value};
//!
//! static MENUS: [MenuHeader; 1] = [MenuHeader::new(10, "Main", 20, 21)];
//! static ITEMS: [MenuItem; 2] = [
//!     MenuItem::edit(20, "Backlight", 30),
//!     MenuItem::edit(21, "Contrast", 31),
//! ];
//! static INPUTS: [InputDefinition; 2] = [
//!     InputDefinition::boolean(30, "Light"),
//!     InputDefinition::integer(31, "Level", 3, Value::new(0), Value::new(100), 10),
//! ];
//!
//! let catalog = Catalog::new(&MENUS, &ITEMS, &INPUTS);
//! assert_eq!(catalog.find_item(21).unwrap().label, "Contrast");
//! assert!(catalog.find_input(99).is_err());
//! ```

use crate::error::Error;

/// Record id shared by menus, items and inputs.
///
/// Ids are signed so that [`NO_ID`] can mark "no id".
pub type Id = i8;

/// Sentinel for "no id / not found". It never matches a catalog entry.
pub const NO_ID: Id = -1;

/// A value being edited, as exchanged with the application.
///
/// `power` is only meaningful for engineering inputs, where the value is
/// `magnitude × 10^power` (with the implied fractional digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Value {
    /// The scaled value, list index or 0/1 flag.
    pub magnitude: i32,
    /// Power of ten, a multiple of 3 between -18 and 18.
    pub power: i8,
}

impl Value {
    /// A value with power `0`.
    pub const fn new(magnitude: i32) -> Self {
        Self {
            magnitude,
            power: 0,
        }
    }

    /// An engineering value `magnitude × 10^power`.
    pub const fn with_power(magnitude: i32, power: i8) -> Self {
        Self { magnitude, power }
    }
}

/// What selecting a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemAction {
    /// Open the menu named by the item's target.
    EnterMenu,
    /// Edit the input named by the item's target.
    EditValue,
    /// Edit the input and report every change to the application.
    EditValueWithLiveFeedback,
}

/// The kind of value an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKind {
    /// Pick one entry of the list in `aux`.
    List,
    /// A Y/N flag.
    Boolean,
    /// A signed integer shown in radix `base`.
    Integer,
    /// A decimal with a fixed number of implied fractional digits.
    FixedPoint,
    /// A decimal with an SI prefix and the unit named in `aux`.
    EngineeringUnit,
    /// Run application code after confirmation.
    RunAction,
    /// Show and confirm a value produced by the application.
    External,
}

/// A menu node: a title and a contiguous range of child item ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuHeader {
    /// Identifier for this menu.
    pub id: Id,
    /// Title shown on the first display line.
    pub label: &'static str,
    /// First child item id.
    pub first_item: Id,
    /// Last child item id, inclusive.
    pub last_item: Id,
    /// Cursor position, [`NO_ID`] when unset.
    pub current_item: Id,
}

impl MenuHeader {
    /// A menu spanning items `first_item..=last_item` with an unset cursor.
    pub const fn new(id: Id, label: &'static str, first_item: Id, last_item: Id) -> Self {
        Self {
            id,
            label,
            first_item,
            last_item,
            current_item: NO_ID,
        }
    }

    /// Whether `id` falls in this menu's item range.
    pub fn contains(&self, id: Id) -> bool {
        id >= self.first_item && id <= self.last_item
    }
}

/// An entry in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Identifier for this item.
    pub id: Id,
    /// Label shown while browsing.
    pub label: &'static str,
    /// What selecting the item does.
    pub action: ItemAction,
    /// The menu or input the action applies to.
    pub target: Id,
}

impl MenuItem {
    /// An item opening menu `target`.
    pub const fn menu(id: Id, label: &'static str, target: Id) -> Self {
        Self {
            id,
            label,
            action: ItemAction::EnterMenu,
            target,
        }
    }

    /// An item editing input `target`.
    pub const fn edit(id: Id, label: &'static str, target: Id) -> Self {
        Self {
            id,
            label,
            action: ItemAction::EditValue,
            target,
        }
    }

    /// An item editing input `target` with live feedback.
    pub const fn edit_live(id: Id, label: &'static str, target: Id) -> Self {
        Self {
            id,
            label,
            action: ItemAction::EditValueWithLiveFeedback,
            target,
        }
    }
}

/// Definition of an editable value.
///
/// The meaning of `range`, `base` and `aux` depends on `kind`:
///
/// | kind            | range             | base            | aux          |
/// |-----------------|-------------------|-----------------|--------------|
/// | List            | unused            | unused          | entries      |
/// | Boolean         | unused            | unused          | unused       |
/// | Integer         | min / max         | radix 2..=16    | unused       |
/// | FixedPoint      | min / max         | step            | unused       |
/// | EngineeringUnit | min / max + power | step            | unit suffix  |
/// | RunAction       | unused            | unused          | unused       |
/// | External        | unused            | radix 2..=16    | unused       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDefinition {
    /// Identifier for this input, also passed to the value callbacks.
    pub id: Id,
    /// Label shown in front of the value field.
    pub label: &'static str,
    /// The kind of value edited.
    pub kind: InputKind,
    /// Width of the value field in characters.
    pub field_width: u8,
    /// Lower and upper bound.
    pub range: [Value; 2],
    /// Display radix or step size, see the table above.
    pub base: u8,
    /// List entries or unit suffix, see the table above.
    pub aux: &'static str,
}

impl InputDefinition {
    const fn blank(id: Id, label: &'static str, kind: InputKind) -> Self {
        Self {
            id,
            label,
            kind,
            field_width: 1,
            range: [Value::new(0), Value::new(0)],
            base: 10,
            aux: "",
        }
    }

    /// A pick list over the separated entries in `entries`.
    pub const fn list(id: Id, label: &'static str, field_width: u8, entries: &'static str) -> Self {
        let mut input = Self::blank(id, label, InputKind::List);
        input.field_width = field_width;
        input.aux = entries;
        input
    }

    /// A Y/N flag.
    pub const fn boolean(id: Id, label: &'static str) -> Self {
        Self::blank(id, label, InputKind::Boolean)
    }

    /// An integer between `min` and `max`, shown in `radix`.
    pub const fn integer(
        id: Id,
        label: &'static str,
        field_width: u8,
        min: Value,
        max: Value,
        radix: u8,
    ) -> Self {
        let mut input = Self::blank(id, label, InputKind::Integer);
        input.field_width = field_width;
        input.range = [min, max];
        input.base = radix;
        input
    }

    /// A fixed-point decimal between `min` and `max`, moving `step` raw units at a time.
    pub const fn fixed_point(
        id: Id,
        label: &'static str,
        field_width: u8,
        min: Value,
        max: Value,
        step: u8,
    ) -> Self {
        let mut input = Self::blank(id, label, InputKind::FixedPoint);
        input.field_width = field_width;
        input.range = [min, max];
        input.base = step;
        input
    }

    /// An engineering value between `min` and `max` with unit suffix `unit`.
    pub const fn engineering(
        id: Id,
        label: &'static str,
        field_width: u8,
        min: Value,
        max: Value,
        step: u8,
        unit: &'static str,
    ) -> Self {
        let mut input = Self::blank(id, label, InputKind::EngineeringUnit);
        input.field_width = field_width;
        input.range = [min, max];
        input.base = step;
        input.aux = unit;
        input
    }

    /// An action run on confirmation.
    pub const fn run(id: Id, label: &'static str) -> Self {
        Self::blank(id, label, InputKind::RunAction)
    }

    /// A value supplied by the application, shown in `radix`.
    pub const fn external(id: Id, label: &'static str, field_width: u8, radix: u8) -> Self {
        let mut input = Self::blank(id, label, InputKind::External);
        input.field_width = field_width;
        input.base = radix;
        input
    }
}

/// The three definition tables of a menu system.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    menus: &'a [MenuHeader],
    items: &'a [MenuItem],
    inputs: &'a [InputDefinition],
}

impl<'a> Catalog<'a> {
    /// Wrap the definition tables.
    pub const fn new(
        menus: &'a [MenuHeader],
        items: &'a [MenuItem],
        inputs: &'a [InputDefinition],
    ) -> Self {
        Self {
            menus,
            items,
            inputs,
        }
    }

    /// Find a menu header.
    ///
    /// [`NO_ID`] or an unknown id resolves to the first table entry, the root
    /// menu.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] only when the menu table is empty.
    pub fn find_menu(&self, id: Id) -> Result<&'a MenuHeader, Error> {
        if id != NO_ID {
            if let Some(menu) = self.menus.iter().find(|m| m.id == id) {
                return Ok(menu);
            }
        }
        self.menus.first().ok_or(Error::NotFound)
    }

    /// Find a menu item.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no item has this id.
    pub fn find_item(&self, id: Id) -> Result<&'a MenuItem, Error> {
        if id == NO_ID {
            return Err(Error::NotFound);
        }
        self.items.iter().find(|i| i.id == id).ok_or(Error::NotFound)
    }

    /// Find an input definition.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no input has this id.
    pub fn find_input(&self, id: Id) -> Result<&'a InputDefinition, Error> {
        if id == NO_ID {
            return Err(Error::NotFound);
        }
        self.inputs.iter().find(|i| i.id == id).ok_or(Error::NotFound)
    }
}
