mod common;

use common::*;
use lcdmenu::catalog::*;
use lcdmenu::Error;

#[test]
fn test_find_by_id() {
    let catalog = catalog();
    assert_eq!(catalog.find_menu(DISPLAY).unwrap().label, "Display");
    assert_eq!(catalog.find_item(24).unwrap().label, "Price");
    assert_eq!(catalog.find_input(KNOB).unwrap().kind, InputKind::External);
}

#[test]
fn test_missing_ids() {
    let catalog = catalog();
    assert_eq!(catalog.find_item(22), Err(Error::NotFound));
    assert_eq!(catalog.find_input(99), Err(Error::NotFound));
    assert_eq!(catalog.find_item(NO_ID), Err(Error::NotFound));
    assert_eq!(catalog.find_input(NO_ID), Err(Error::NotFound));
}

#[test]
fn test_unknown_menu_resolves_to_root() {
    let catalog = catalog();
    assert_eq!(catalog.find_menu(NO_ID).unwrap().id, MAIN);
    assert_eq!(catalog.find_menu(99).unwrap().id, MAIN);
}

#[test]
fn test_empty_tables() {
    let catalog = Catalog::new(&[], &[], &[]);
    assert_eq!(catalog.find_menu(NO_ID), Err(Error::NotFound));
    assert_eq!(catalog.find_item(1), Err(Error::NotFound));
}

#[test]
fn test_duplicate_ids_first_wins() {
    static MENUS: [MenuHeader; 1] = [MenuHeader::new(1, "Root", 2, 2)];
    static ITEMS: [MenuItem; 2] = [MenuItem::edit(2, "First", 3), MenuItem::edit(2, "Second", 4)];
    let catalog = Catalog::new(&MENUS, &ITEMS, &[]);
    assert_eq!(catalog.find_item(2).unwrap().label, "First");
}

#[test]
fn test_menu_headers_start_with_unset_cursor() {
    for menu in &MENUS {
        assert_eq!(menu.current_item, NO_ID);
        assert!(menu.contains(menu.first_item));
        assert!(menu.contains(menu.last_item));
        assert!(!menu.contains(menu.last_item + 1));
    }
}
