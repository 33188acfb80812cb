//! Diagnostic channel.
//!
//! With the `defmt` feature the macros forward to the matching `defmt` macro.
//! Without it they expand to nothing, but still borrow their arguments so that
//! call sites compile identically in both configurations.

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( &$x, )*);
        }
    };
}

macro_rules! warning {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( &$x, )*);
        }
    };
}

pub(crate) use debug;
pub(crate) use warning;
