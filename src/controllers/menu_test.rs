use super::*;

fn menu() -> MenuController {
    MenuController::new(&ViewBindings::default())
}

#[test]
fn starts_closed() {
    assert!(!menu().is_open());
}

#[test]
fn open_then_close() {
    let menu = menu();
    menu.open();
    assert!(menu.is_open());
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn click_inside_menu_content_keeps_it_open() {
    let menu = menu();
    menu.open();
    assert!(!menu.close_if_backdrop(false));
    assert!(menu.is_open());
}

#[test]
fn click_on_backdrop_closes() {
    let menu = menu();
    menu.open();
    assert!(menu.close_if_backdrop(true));
    assert!(!menu.is_open());
}

#[test]
fn backdrop_click_on_closed_menu_does_nothing() {
    let menu = menu();
    assert!(!menu.close_if_backdrop(true));
    assert!(!menu.is_open());
}
