//! Engine configuration.
//!
//! Configuration comes in two parts:
//!
//! - [`Options`]: runtime behaviour flags (wrap, auto start, inactivity timeout).
//!   These can be changed while the menu runs and can be loaded from a JSON
//!   settings record with [`Options::from_json`].
//! - [`Style`]: the characters and digit counts used when rendering lines. The
//!   defaults suit the common 16x2 character LCD.
//!
//! The `*_SIZE` constants below are sized for that same display.

use serde::Deserialize;

use crate::error::Error;

/// Displayed length of a menu header label.
pub const HEADER_LABEL_SIZE: usize = 16;

/// Displayed length of a menu item label.
pub const ITEM_LABEL_SIZE: usize = 14;

/// Displayed length of an input label.
pub const INPUT_LABEL_SIZE: usize = 14;

/// Capacity of one rendered display line.
///
/// Text that would run past this capacity is cut off; it never panics.
pub const MAX_LINE_SIZE: usize = 48;

/// Default menu depth. The root menu occupies the first level.
pub const MENU_STACK_SIZE: usize = 4;

/// Separator between entries of a list input.
pub const LIST_SEPARATOR: char = '|';

/// Decimal point used by fixed-point and engineering inputs.
pub const DECIMAL_POINT: char = '.';

/// Fractional digits implied in a fixed-point magnitude.
pub const FLOAT_DECIMALS: u8 = 2;

/// Fractional digits implied in an engineering magnitude.
pub const ENGU_DECIMALS: u8 = 3;

/// Symmetric range of engineering powers, `10^-ENGU_RANGE..=10^ENGU_RANGE`.
pub const ENGU_RANGE: i8 = 18;

/// SI prefixes from atto (10^-18) to exa (10^18); the centre entry is 10^0.
pub const UNIT_PREFIXES: &str = "afpnum kMGTPE";

/// Largest fractional digit count the decimal editors accept.
pub(crate) const MAX_DECIMALS: u8 = 6;

/// Runtime behaviour options.
///
/// # Examples
///
/// ```rust
/// use lcdmenu::Options;
///
/// let options = Options::from_json(br#"{"wrap":true,"timeout_ms":5000}"#).unwrap();
/// assert!(options.wrap);
/// assert!(!options.auto_start);
/// assert_eq!(options.timeout_ms, 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Wrap around the ends of menus and pick lists.
    pub wrap: bool,
    /// Start the menu when `Select` is pressed while it is not running.
    pub auto_start: bool,
    /// Inactivity timeout in milliseconds, `0` to disable.
    pub timeout_ms: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wrap: false,
            auto_start: false,
            timeout_ms: 0,
        }
    }
}

impl Options {
    /// Parse options from a JSON object.
    ///
    /// Missing fields keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `json` is not a valid options object.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        serde_json_core::from_slice::<Options>(json)
            .map(|(options, _)| options)
            .map_err(|_| Error::InvalidConfig)
    }
}

/// Characters and digit counts used to render display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Separator between entries of a list input.
    pub list_separator: char,
    /// Decimal point for fixed-point and engineering values.
    pub decimal_point: char,
    /// Text shown for a true boolean.
    pub bool_true: &'static str,
    /// Text shown for a false boolean.
    pub bool_false: &'static str,
    /// Marker shown when a number does not fit its field.
    pub overflow_marker: char,
    /// Fractional digits of fixed-point inputs.
    pub float_decimals: u8,
    /// Fractional digits of engineering inputs.
    pub engu_decimals: u8,
    /// Prefix characters for powers -18, -15, .., 15, 18.
    pub unit_prefixes: &'static str,
    /// Displayed length of menu header labels.
    pub header_label_size: usize,
    /// Displayed length of menu item labels.
    pub item_label_size: usize,
    /// Displayed length of input labels.
    pub input_label_size: usize,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            list_separator: LIST_SEPARATOR,
            decimal_point: DECIMAL_POINT,
            bool_true: "Y",
            bool_false: "N",
            overflow_marker: '#',
            float_decimals: FLOAT_DECIMALS,
            engu_decimals: ENGU_DECIMALS,
            unit_prefixes: UNIT_PREFIXES,
            header_label_size: HEADER_LABEL_SIZE,
            item_label_size: ITEM_LABEL_SIZE,
            input_label_size: INPUT_LABEL_SIZE,
        }
    }
}

impl Style {
    /// The prefix character for an engineering power of ten.
    ///
    /// Powers are truncated to a multiple of three; powers outside the prefix
    /// table render as a space.
    pub fn unit_prefix(&self, power: i8) -> char {
        let centre = (self.unit_prefixes.chars().count() / 2) as i32;
        let index = centre + i32::from(power) / 3;
        if index < 0 {
            return ' ';
        }
        self.unit_prefixes.chars().nth(index as usize).unwrap_or(' ')
    }
}
