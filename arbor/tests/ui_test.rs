/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! UI and resource classes: popup menus, tree widgets and font files.

mod host;

use arbor::builtin::{Color, GString, Rect2, Vector2};
use arbor::classes::{FontFile, PopupMenu, Tree};
use arbor::global::{Error, FontAntialiasing, Key};
use arbor::obj::{NewAlloc, NewGd};

use host::{ensure_initialized, expect_panic};

#[test]
fn popup_menu_items() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    assert_eq!(menu.get_item_count(), 0);

    menu.add_item(GString::from("New"));
    menu.add_item_ex(GString::from("Open")).id(10).done();
    menu.add_separator();
    menu.add_check_item_ex(GString::from("Autosave"))
        .id(20)
        .accel(Key::A)
        .done();

    assert_eq!(menu.get_item_count(), 4);
    assert_eq!(menu.get_item_text(0), GString::from("New"));
    assert_eq!(menu.get_item_text(1), GString::from("Open"));
    assert_eq!(menu.get_item_text(3), GString::from("Autosave"));

    // Explicit ids are looked up; auto-assigned ids fall back to the index.
    assert_eq!(menu.get_item_id(1), 10);
    assert_eq!(menu.get_item_index(10), 1);
    assert_eq!(menu.get_item_index(20), 3);

    menu.free();
}

#[test]
fn popup_menu_check_state() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    menu.add_check_item(GString::from("Enabled"));
    assert!(!menu.is_item_checked(0));

    menu.set_item_checked(0, true);
    assert!(menu.is_item_checked(0));

    menu.set_item_text(0, GString::from("Disabled"));
    assert_eq!(menu.get_item_text(0), GString::from("Disabled"));
    // Re-labelling does not clear the check state.
    assert!(menu.is_item_checked(0));
    menu.free();
}

#[test]
fn popup_menu_remove_and_clear() {
    ensure_initialized();

    let mut menu = PopupMenu::new_alloc();
    menu.add_item(GString::from("a"));
    menu.add_item(GString::from("b"));
    menu.add_item(GString::from("c"));

    menu.remove_item(1);
    assert_eq!(menu.get_item_count(), 2);
    assert_eq!(menu.get_item_text(1), GString::from("c"));

    menu.set_item_count(1);
    assert_eq!(menu.get_item_count(), 1);

    menu.clear_ex().free_submenus(false).done();
    assert_eq!(menu.get_item_count(), 0);
    menu.free();
}

#[test]
fn tree_item_creation() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    assert_eq!(tree.get_columns(), 1);

    let root = tree.create_item().expect("root item");
    assert_eq!(root.get_parent(), None);

    let child = tree.create_item().expect("child item");
    assert_eq!(child.get_parent(), Some(root.clone()));
    assert_eq!(root.get_first_child(), Some(child.clone()));

    let sibling = tree
        .create_item_ex()
        .parent(root.clone())
        .index(-1)
        .done()
        .expect("second child");
    assert_eq!(child.get_next(), Some(sibling.clone()));
    assert_eq!(sibling.get_next(), None);

    tree.free();
}

#[test]
fn tree_item_cells() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    tree.set_columns(3);
    assert_eq!(tree.get_columns(), 3);

    tree.set_column_title(0, GString::from("Name"));
    tree.set_column_title(2, GString::from("Size"));
    assert_eq!(tree.get_column_title(0), GString::from("Name"));
    assert_eq!(tree.get_column_title(1), GString::from(""));
    assert_eq!(tree.get_column_title(2), GString::from("Size"));

    let mut item = tree.create_item().expect("root item");
    item.set_text(0, GString::from("config.toml"));
    item.set_text(2, GString::from("1 KiB"));
    assert_eq!(item.get_text(0), GString::from("config.toml"));
    assert_eq!(item.get_text(1), GString::from(""));
    assert_eq!(item.get_text(2), GString::from("1 KiB"));

    let bg = Color::from_rgba(0.2, 0.2, 0.2, 1.0);
    item.set_custom_bg_color(1, bg);
    assert_eq!(item.get_custom_bg_color(1), bg);
    assert_eq!(item.get_custom_bg_color(0), Color::from_rgba(0.0, 0.0, 0.0, 0.0));
    tree.free();
}

#[test]
fn tree_selection() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    tree.set_columns(2);
    let mut root = tree.create_item().expect("root item");
    let mut first = root.create_child().expect("first child");
    let mut second = root.create_child().expect("second child");

    assert_eq!(tree.get_selected(), None);
    assert_eq!(tree.get_selected_column(), -1);

    first.select(0);
    assert!(first.is_selected(0));
    assert_eq!(tree.get_selected(), Some(first.clone()));
    assert_eq!(tree.get_selected_column(), 0);

    // Single-select mode moves the selection.
    second.select(1);
    assert!(!first.is_selected(0));
    assert!(second.is_selected(1));
    assert_eq!(tree.get_selected(), Some(second.clone()));
    assert_eq!(tree.get_selected_column(), 1);

    second.deselect(1);
    assert!(!second.is_selected(1));
    assert_eq!(tree.get_selected(), None);
    tree.free();
}

#[test]
fn tree_item_area_rect() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    tree.set_columns(2);
    let root = tree.create_item().expect("root item");
    let child = root.clone().create_child().expect("child");

    // Whole-row rect for the root, single-column rect for the child.
    assert_eq!(
        tree.get_item_area_rect(root),
        Rect2::new(Vector2::new(0.0, 0.0), Vector2::new(200.0, 24.0))
    );
    assert_eq!(
        tree.get_item_area_rect_ex(child).column(1).done(),
        Rect2::new(Vector2::new(100.0, 24.0), Vector2::new(100.0, 24.0))
    );
    tree.free();
}

#[test]
fn tree_clear_invalidates_items() {
    ensure_initialized();

    let mut tree = Tree::new_alloc();
    let mut root = tree.create_item().expect("root item");
    tree.clear();

    expect_panic("cleared item is freed", move || {
        root.set_text(0, GString::from("gone"));
    });
    tree.free();
}

#[test]
fn font_file_dynamic_load() {
    ensure_initialized();

    let mut font = FontFile::new_gd();
    assert_eq!(font.get_cache_count(), 0);

    let result = font.load_dynamic_font(GString::from("res://fonts/Inter.ttf"));
    assert_eq!(result, Error::OK);
    assert_eq!(font.get_font_name(), GString::from("Inter"));
    assert_eq!(font.get_cache_count(), 1);
}

#[test]
fn font_file_bitmap_load() {
    ensure_initialized();

    let mut font = FontFile::new_gd();
    let result = font.load_bitmap_font(GString::from("res://fonts/pixel.fnt"));
    assert_eq!(result, Error::OK);
    assert_eq!(font.get_font_name(), GString::from("pixel"));
    assert_eq!(font.get_fixed_size(), 16);
}

#[test]
fn font_file_missing_path() {
    ensure_initialized();

    let mut font = FontFile::new_gd();
    let result = font.load_dynamic_font(GString::from(""));
    assert_eq!(result, Error::ERR_FILE_NOT_FOUND);
    assert_eq!(font.get_cache_count(), 0);
}

#[test]
fn font_file_properties() {
    ensure_initialized();

    let mut font = FontFile::new_gd();
    assert_eq!(font.get_antialiasing(), FontAntialiasing::GRAY);

    font.set_antialiasing(FontAntialiasing::LCD);
    font.set_oversampling(2.0);
    font.set_font_name(GString::from("Custom"));

    assert_eq!(font.get_antialiasing(), FontAntialiasing::LCD);
    assert_eq!(font.get_oversampling(), 2.0);
    assert_eq!(font.get_font_name(), GString::from("Custom"));
}

#[test]
fn font_file_cache_management() {
    ensure_initialized();

    let mut font = FontFile::new_gd();
    font.load_dynamic_font(GString::from("res://fonts/Inter.ttf"));
    assert_eq!(font.get_cache_count(), 1);

    font.remove_cache(0);
    assert_eq!(font.get_cache_count(), 0);

    font.load_dynamic_font(GString::from("res://fonts/Inter.ttf"));
    font.clear_cache();
    assert_eq!(font.get_cache_count(), 0);
}

#[test]
fn font_height_scales_with_size() {
    ensure_initialized();

    let font = FontFile::new_gd();
    assert_eq!(font.get_height(), 20.0);
    assert_eq!(font.get_height_ex().font_size(32).done(), 40.0);
}
