//! Menu stack and cursor traversal.

use heapless::Vec;

use crate::catalog::{Catalog, Id, MenuHeader, NO_ID};
use crate::error::Error;

/// The path from the root menu to the current one.
///
/// Each level holds a snapshot of its [`MenuHeader`], so the cursor of a
/// parent menu is kept while a child menu is open. The root is level 0.
#[derive(Debug, Clone)]
pub struct MenuStack<const N: usize> {
    frames: Vec<MenuHeader, N>,
}

impl<const N: usize> Default for MenuStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MenuStack<N> {
    /// An empty stack.
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Drop every level and make `root` level 0.
    ///
    /// # Errors
    ///
    /// [`Error::DepthExceeded`] if the stack has no room at all (`N == 0`).
    pub fn reset(&mut self, root: MenuHeader) -> Result<(), Error> {
        self.frames.clear();
        self.push(root)
    }

    /// Open `menu` one level below the current one.
    ///
    /// # Errors
    ///
    /// [`Error::DepthExceeded`] when all `N` levels are in use.
    pub fn push(&mut self, menu: MenuHeader) -> Result<(), Error> {
        self.frames.push(menu).map_err(|_| Error::DepthExceeded)
    }

    /// Close the current level. The root level is never popped; returns
    /// `false` when already at the root.
    pub fn pop(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    /// Keep only the root level.
    pub fn truncate_to_root(&mut self) {
        self.frames.truncate(1);
    }

    /// Current depth, `0` at the root.
    pub fn depth(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Number of levels in use.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no menu is loaded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The current menu.
    pub fn current(&self) -> Option<&MenuHeader> {
        self.frames.last()
    }

    /// The current menu, mutably.
    pub fn current_mut(&mut self) -> Option<&mut MenuHeader> {
        self.frames.last_mut()
    }
}

/// Put the cursor of a newly entered menu on a resolvable item.
///
/// An unset cursor starts at `first_item`. If that id has no item, the next
/// resolvable id in the range is used, searching from the start of the range
/// if needed. A range without any items leaves the cursor where it is.
pub(crate) fn settle(menu: &mut MenuHeader, catalog: &Catalog<'_>) {
    if menu.current_item == NO_ID || !menu.contains(menu.current_item) {
        menu.current_item = menu.first_item;
    }
    if catalog.find_item(menu.current_item).is_ok() {
        return;
    }
    let from = i16::from(menu.current_item);
    let found = scan(catalog, from + 1, i16::from(menu.last_item), false)
        .or_else(|| scan(catalog, i16::from(menu.first_item), from - 1, false));
    if let Some(id) = found {
        menu.current_item = id;
    }
}

/// Move the cursor to the next (`forward`) or previous resolvable item.
///
/// Ids without an item are skipped. At the end of the range the cursor wraps
/// to the other end when `wrap` is set and otherwise stays put. Returns
/// whether the cursor moved.
pub(crate) fn advance(
    menu: &mut MenuHeader,
    catalog: &Catalog<'_>,
    forward: bool,
    wrap: bool,
) -> bool {
    let first = i16::from(menu.first_item);
    let last = i16::from(menu.last_item);
    let current = i16::from(menu.current_item);

    let found = if forward {
        scan(catalog, current + 1, last, false).or_else(|| {
            if wrap {
                scan(catalog, first, current - 1, false)
            } else {
                None
            }
        })
    } else {
        scan(catalog, first, current - 1, true).or_else(|| {
            if wrap {
                scan(catalog, current + 1, last, true)
            } else {
                None
            }
        })
    };

    match found {
        Some(id) if id != menu.current_item => {
            menu.current_item = id;
            true
        }
        _ => false,
    }
}

/// First id in `from..=to` with an item, searching from the top when
/// `reverse` is set.
fn scan(catalog: &Catalog<'_>, from: i16, to: i16, reverse: bool) -> Option<Id> {
    let mut ids = (from..=to).filter_map(|id| Id::try_from(id).ok());
    let resolvable = |id: &Id| catalog.find_item(*id).is_ok();
    if reverse {
        ids.rev().find(resolvable)
    } else {
        ids.find(resolvable)
    }
}
