// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The behavior catalog.
//!
//! Every behavior is a plain function `fn(&BehaviorProps) -> ResolvedBehavior`. Families with
//! more than a couple of inputs resolve the props bag once into a typed struct
//! (`SliderProps::from_props`, ...) whose fields carry the documented defaults.
//!
//! Conditional attributes are always declared. Whether an unmet condition yields an undefined
//! attribute or an explicit `false` is part of each behavior's contract, stated on the
//! function and checked by its specification lines (see [`crate::catalog`]).

mod accordion;
mod button;
mod chat;
mod grid;
mod input;
mod list;
mod media;
mod menu;
mod popup;
mod tabs;
mod toolbar;
mod tree;

pub use accordion::{
    AccordionTitleProps, accordion_behavior, accordion_content_behavior,
    accordion_title_behavior,
};
pub use button::{ButtonProps, button_behavior, toggle_button_behavior};
pub use chat::{chat_behavior, chat_message_behavior};
pub use grid::grid_behavior;
pub use input::{
    SliderProps, checkbox_behavior, input_behavior, radio_group_behavior,
    radio_group_item_behavior, slider_behavior,
};
pub use list::{
    basic_list_behavior, basic_list_item_behavior, list_behavior, list_item_behavior,
    selectable_list_behavior, selectable_list_item_behavior,
};
pub use media::{alert_behavior, icon_behavior, image_behavior, loader_behavior};
pub use menu::{MenuItemProps, menu_behavior, menu_divider_behavior, menu_item_behavior};
pub use popup::{
    PopupOn, PopupProps, dialog_behavior, popup_behavior, tooltip_behavior,
};
pub use tabs::{tab_behavior, tab_list_behavior};
pub use toolbar::{toolbar_behavior, toolbar_item_behavior, toolbar_menu_behavior};
pub use tree::{TreeItemProps, tree_behavior, tree_item_behavior};

pub(crate) use self::{
    accordion::ENTRIES as ACCORDION, button::ENTRIES as BUTTON, chat::ENTRIES as CHAT,
    grid::ENTRIES as GRID, input::ENTRIES as INPUT, list::ENTRIES as LIST,
    media::ENTRIES as MEDIA, menu::ENTRIES as MENU, popup::ENTRIES as POPUP,
    tabs::ENTRIES as TABS, toolbar::ENTRIES as TOOLBAR, tree::ENTRIES as TREE,
};
