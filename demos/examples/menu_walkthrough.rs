// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A menu bar driven end to end: behaviors, focus zone, key dispatch and lifecycle.
//!
//! This example shows how to combine:
//! - `attune_behavior` to resolve the menu and menu-item behaviors,
//! - `attune_focus` to translate the menu's focus zone and move focus along the bar,
//! - `attune_keyboard` to run the item's key actions,
//! - `attune_lifecycle` to own the item instance across renders.
//!
//! Run:
//! - `cargo run -p attune_demos --example menu_walkthrough`
//! - `RUST_LOG=debug cargo run -p attune_demos --example menu_walkthrough` to also see the
//!   libraries' own tracing.
//!
//! Focus moves and dispatched actions are logged as `info` events; rendered attributes are
//! printed to stdout.

use attune_aria::{AttrName, Key, KeyEvent};
use attune_behavior::{AttributeMap, BehaviorProps, RenderPlan, behaviors};
use attune_focus::{FocusEntry, FocusPolicy, FocusSpace, FocusZoneSetup, TextDirection};
use attune_keyboard::{DispatchTable, Handlers, Outcome, dispatcher};
use attune_lifecycle::{IdGenerator, InstanceContext, LifecycleError};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct MenuBar {
    clicked: Vec<&'static str>,
    open: bool,
}

fn print_slot(plan: &RenderPlan, slot: &str) {
    let Some(attributes) = plan.attributes(slot) else {
        return;
    };
    let rendered: Vec<String> = attributes
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    println!("  <{slot} {}>", rendered.join(" "));
}

fn main() -> Result<(), LifecycleError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .compact()
        .init();

    // The bar itself: a circular zone around three items laid out left to right.
    let bar = RenderPlan::new(
        &behaviors::menu_behavior,
        None,
        &BehaviorProps::new(),
        &AttributeMap::new(),
    );
    println!("== Menu bar ==");
    print_slot(&bar, "root");

    let setup = FocusZoneSetup::translate(bar.focus_zone(), TextDirection::Ltr);
    let Some(params) = setup.params() else {
        println!("menu declares no focus zone");
        return Ok(());
    };
    let items = ["File", "Edit", "View"];
    let entries: Vec<FocusEntry<&str>> = items
        .iter()
        .zip(0_u32..)
        .map(|(label, i)| {
            let x = f64::from(i) * 80.0;
            FocusEntry::new(*label, Rect::new(x, 0.0, x + 72.0, 24.0))
        })
        .collect();
    let space = FocusSpace { nodes: &entries };
    let policy = params.policy();

    let mut focused = "File";
    for key in [Key::ARROW_RIGHT, Key::ARROW_RIGHT, Key::ARROW_RIGHT] {
        let Some(navigation) = params.navigation_for(&KeyEvent::new(key), false) else {
            continue;
        };
        if let Some(next) = policy.next(focused, navigation, &space) {
            tracing::info!(%key, from = focused, to = next, "focus moved");
            focused = next;
        }
    }

    // The "File" item owns a submenu, given as a shorthand; its instance lives across renders.
    println!("\n== File item ==");
    let mut item = InstanceContext::new(IdGenerator::new("menubar-"));
    item.mount()?;

    let mut props = BehaviorProps::new()
        .with("menu", "File submenu")
        .with("menuOpen", false);
    let explicit = AttributeMap::new().with(AttrName::ARIA_LABEL, "File menu");
    let plan = item.render(&behaviors::menu_item_behavior, None, &props, &explicit)?;
    print_slot(&plan, "wrapper");
    print_slot(&plan, "root");

    let table = DispatchTable::build(&plan.behavior().key_actions, TextDirection::Ltr);
    let mut handlers = Handlers::new()
        .on("performClick", |_, bar: &mut MenuBar| {
            bar.clicked.push("File");
            Outcome::Continue
        })
        .on("openMenu", |_, bar: &mut MenuBar| {
            bar.open = true;
            Outcome::Stop
        })
        .on("closeAllMenus", |_, bar: &mut MenuBar| {
            bar.open = false;
            Outcome::Stop
        });

    let mut state = MenuBar::default();
    for key in [Key::ENTER, Key::ARROW_DOWN] {
        let event = KeyEvent::new(key);
        let stopped = dispatcher::run(&table, "root", &event, &mut handlers, &mut state);
        tracing::info!(
            %key,
            stopped_by = ?stopped.map(|action| action.as_str()),
            clicked = ?state.clicked,
            open = state.open,
            "dispatched"
        );
    }

    // Re-render with the submenu open; the behavior reflects it.
    props.set("menuOpen", state.open);
    let plan = item.render(&behaviors::menu_item_behavior, None, &props, &explicit)?;
    print_slot(&plan, "root");

    let submenu_id = item.shorthand_id("menu", props.get("menu"), "submenu-")?;
    println!("  submenu id: {submenu_id:?}");

    let delay = item.set_timeout(0, 500, "close submenu on hover out")?;
    tracing::info!(timer = ?delay, pending = item.pending_timers(), "timer scheduled");

    let cleanup = item.unmount()?;
    println!(
        "  unmounted after {} renders; cancelled {} timers and removed {} listeners",
        item.renders(),
        cleanup.timers_cancelled.len(),
        cleanup.listeners_removed.len()
    );
    Ok(())
}
