//! Common error type for menu operations

/// Conditions the menu engine can run into while it is being driven.
///
/// None of these are fatal. The [`Menu`](crate::Menu) controller absorbs each of
/// them by policy (stay in the current menu, end the edit, ignore the request)
/// and reports them on the diagnostic channel. They surface as `Err` values only
/// from the lookup and construction helpers that are also usable on their own.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// No catalog record carries the requested id.
    NotFound,
    /// The application returned no value for an input, so it cannot be edited.
    ValueUnavailable,
    /// A list input has no selectable entries.
    EmptyList,
    /// Entering another menu would exceed the menu stack capacity.
    DepthExceeded,
    /// A rendered number did not fit in its display field.
    DisplayOverflow,
    /// A configuration record could not be parsed.
    InvalidConfig,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotFound => defmt::write!(f, "NotFound"),
            Error::ValueUnavailable => defmt::write!(f, "ValueUnavailable"),
            Error::EmptyList => defmt::write!(f, "EmptyList"),
            Error::DepthExceeded => defmt::write!(f, "DepthExceeded"),
            Error::DisplayOverflow => defmt::write!(f, "DisplayOverflow"),
            Error::InvalidConfig => defmt::write!(f, "InvalidConfig"),
        }
    }
}
