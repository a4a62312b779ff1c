// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference traversal engine.
//!
//! The host's focus-traversal engine owns the real element tree. [`ZonePolicy`] is a
//! geometric stand-in that consumes the same translated parameters, so a zone configuration
//! can be exercised without a DOM: candidates are [`FocusEntry`] values with bounds in one
//! shared coordinate space, listed in DOM order.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Rect;

use crate::translate::TextDirection;
use crate::zone::FocusZoneDirection;

/// Direction of focus navigation.
///
/// These values represent high-level navigation intents such as Tab/Shift+Tab and
/// arrow-key movement. Policies interpret them according to the zone configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the next candidate in the zone's forward order (for example, Tab).
    Next,
    /// Move to the previous candidate in the zone's backward order (for example, Shift+Tab).
    Prev,
    /// Move to the first candidate (Home).
    First,
    /// Move to the last candidate (End).
    Last,
    /// Move in the up direction relative to the current focus.
    Up,
    /// Move in the down direction relative to the current focus.
    Down,
    /// Move in the left direction relative to the current focus.
    Left,
    /// Move in the right direction relative to the current focus.
    Right,
    /// Enter a nested zone.
    EnterScope,
    /// Exit the current zone (for example, Escape returning to the parent zone).
    ExitScope,
}

/// A single focusable candidate within a [`FocusSpace`].
#[derive(Clone, Debug)]
pub struct FocusEntry<K> {
    /// Identifier for this focusable node.
    pub id: K,
    /// Bounds in the coordinate space of the surrounding [`FocusSpace`].
    pub rect: Rect,
    /// Optional explicit ordering key; ordered entries come before unordered ones.
    pub order: Option<i32>,
    /// Whether this node is enabled for focus.
    pub enabled: bool,
}

impl<K> FocusEntry<K> {
    /// An enabled entry without an explicit order.
    pub fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            order: None,
            enabled: true,
        }
    }
}

/// A read-only view of focusable candidates, in DOM order.
#[derive(Clone, Debug)]
pub struct FocusSpace<'a, K> {
    /// Focusable candidates of the current zone.
    pub nodes: &'a [FocusEntry<K>],
}

/// Wrap mode configuration for focus traversal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; reaching the end of the sequence yields no next candidate.
    #[default]
    Never,
    /// Wrap within the current zone.
    Scope,
}

/// Trait for focus traversal policies.
///
/// A policy receives a navigation intent, the current origin node, and a
/// read-only view of focusable candidates, and returns the next focused node
/// if any.
pub trait FocusPolicy<K>
where
    K: Copy + Eq,
{
    /// Compute the next focus target given an origin, navigation intent, and focus space.
    fn next(&self, origin: K, direction: Navigation, space: &FocusSpace<'_, K>) -> Option<K>;
}

/// Traversal policy driven by a zone's translated parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZonePolicy {
    /// Wrap behavior when traversing past either end.
    pub wrap: WrapMode,
    /// Arrow-key axes and ordering model.
    pub direction: FocusZoneDirection,
    /// Reading direction used for linear ordering.
    pub text_direction: TextDirection,
}

impl ZonePolicy {
    fn allows(&self, direction: Navigation) -> bool {
        match direction {
            Navigation::Up | Navigation::Down => {
                self.direction != FocusZoneDirection::Horizontal
            }
            Navigation::Left | Navigation::Right => {
                self.direction != FocusZoneDirection::Vertical
            }
            _ => true,
        }
    }
}

impl<K> FocusPolicy<K> for ZonePolicy
where
    K: Copy + Eq,
{
    fn next(&self, origin: K, direction: Navigation, space: &FocusSpace<'_, K>) -> Option<K> {
        if !self.allows(direction) {
            return None;
        }
        let order = LinearOrder {
            space,
            text_direction: self.text_direction,
            dom_order: self.direction == FocusZoneDirection::BidirectionalDomOrder,
        };
        match direction {
            Navigation::Next => order.step(origin, self.wrap, Step::Forward),
            Navigation::Prev => order.step(origin, self.wrap, Step::Backward),
            Navigation::First => order.sorted().first().map(|&i| space.nodes[i].id),
            Navigation::Last => order.sorted().last().map(|&i| space.nodes[i].id),
            Navigation::Up | Navigation::Down | Navigation::Left | Navigation::Right => {
                let step = match direction {
                    Navigation::Up | Navigation::Left => Step::Backward,
                    _ => Step::Forward,
                };
                if self.direction == FocusZoneDirection::BidirectionalDomOrder {
                    return order.step(origin, self.wrap, step);
                }
                next_directional(origin, direction, space).or_else(|| {
                    // Nothing lies that way; only a circular zone continues from the other end.
                    match self.wrap {
                        WrapMode::Scope => order.wrap_around(origin, step),
                        WrapMode::Never => None,
                    }
                })
            }
            // Nested-zone transitions are carried out by the host.
            Navigation::EnterScope | Navigation::ExitScope => None,
        }
    }
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

struct LinearOrder<'s, 'a, K> {
    space: &'s FocusSpace<'a, K>,
    text_direction: TextDirection,
    /// Keep the slice order for entries without an explicit order instead of reading order.
    dom_order: bool,
}

impl<K> LinearOrder<'_, '_, K>
where
    K: Copy + Eq,
{
    /// Enabled candidate indices sorted by explicit order, then reading (or DOM) order.
    fn sorted(&self) -> Vec<usize> {
        let nodes = self.space.nodes;
        let mut indices: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.enabled.then_some(i))
            .collect();
        if self.dom_order {
            // Stable sort: equal keys keep their DOM position.
            indices.sort_by_key(|&i| nodes[i].order.map_or((1, 0), |o| (0, o)));
        } else {
            indices.sort_by(|&ia, &ib| {
                compare_linear(&nodes[ia], &nodes[ib], self.text_direction)
            });
        }
        indices
    }

    /// The neighbor of `origin` one `step` away; from an unknown origin, the first or last
    /// candidate.
    fn step(&self, origin: K, wrap: WrapMode, step: Step) -> Option<K> {
        let nodes = self.space.nodes;
        let ring = self.sorted();
        let last = ring.len().checked_sub(1)?;
        let target = match (ring.iter().position(|&i| nodes[i].id == origin), step) {
            (None, Step::Forward) => 0,
            (None, Step::Backward) => last,
            (Some(at), Step::Forward) if at < last => at + 1,
            (Some(at), Step::Backward) if at > 0 => at - 1,
            (Some(_), _) if wrap == WrapMode::Never => return None,
            (Some(_), Step::Forward) => 0,
            (Some(_), Step::Backward) => last,
        };
        Some(nodes[ring[target]].id)
    }

    /// The candidate at the opposite end of the order, unless the origin is already there.
    fn wrap_around(&self, origin: K, step: Step) -> Option<K> {
        let ring = self.sorted();
        let target = match step {
            Step::Forward => ring.first(),
            Step::Backward => ring.last(),
        }?;
        let id = self.space.nodes[*target].id;
        (id != origin).then_some(id)
    }
}

/// Explicit `order` first (entries with one sort before entries without), then reading order.
fn compare_linear<K>(a: &FocusEntry<K>, b: &FocusEntry<K>, text: TextDirection) -> Ordering {
    let explicit = |e: &FocusEntry<K>| e.order.map_or((1, 0), |o| (0, o));
    explicit(a)
        .cmp(&explicit(b))
        .then_with(|| reading_order(&a.rect, &b.rect, text))
}

/// Top to bottom, then along the line in reading direction. Rows whose tops differ by a
/// relative epsilon or less count as one line.
fn reading_order(a: &Rect, b: &Rect, text: TextDirection) -> Ordering {
    const LINE_EPS: f64 = 1e-6;
    let same_line = (a.y0 - b.y0).abs() <= a.y0.abs().max(b.y0.abs()) * LINE_EPS;
    let ordering = if !same_line {
        a.y0.partial_cmp(&b.y0)
    } else {
        match text {
            TextDirection::Ltr => a.x0.partial_cmp(&b.x0),
            TextDirection::Rtl => b.x1.partial_cmp(&a.x1),
        }
    };
    ordering.unwrap_or(Ordering::Equal)
}

/// The nearest enabled candidate whose center lies strictly ahead of `origin`'s center in
/// `direction`. Off-axis distance weighs four times as much as distance along the axis.
fn next_directional<K>(origin: K, direction: Navigation, space: &FocusSpace<'_, K>) -> Option<K>
where
    K: Copy + Eq,
{
    const OFF_AXIS_WEIGHT: f64 = 4.0;
    let from = space
        .nodes
        .iter()
        .find(|e| e.id == origin)?
        .rect
        .center();
    let ahead = |e: &FocusEntry<K>| -> Option<f64> {
        let to = e.rect.center();
        let (along, across) = match direction {
            Navigation::Right => (to.x - from.x, to.y - from.y),
            Navigation::Left => (from.x - to.x, to.y - from.y),
            Navigation::Down => (to.y - from.y, to.x - from.x),
            Navigation::Up => (from.y - to.y, to.x - from.x),
            _ => return None,
        };
        let score = along + OFF_AXIS_WEIGHT * across.abs();
        (along > 0.0 && score.is_finite()).then_some(score)
    };
    space
        .nodes
        .iter()
        .filter(|e| e.enabled && e.id != origin)
        .filter_map(|e| ahead(e).map(|score| (score, e.id)))
        .fold(None, |best: Option<(f64, K)>, (score, id)| match best {
            Some((best_score, _)) if best_score <= score => best,
            _ => Some((score, id)),
        })
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten-unit squares spaced twenty units apart, along x for a row or along y for a column.
    fn laid_out(ids: &[u32], along_x: bool) -> Vec<FocusEntry<u32>> {
        (0_u32..)
            .zip(ids)
            .map(|(slot, &id)| {
                let offset = f64::from(slot) * 20.0;
                let (x, y) = if along_x { (offset, 0.0) } else { (0.0, offset) };
                FocusEntry::new(id, Rect::new(x, y, x + 10.0, y + 10.0))
            })
            .collect()
    }

    fn row(ids: &[u32]) -> Vec<FocusEntry<u32>> {
        laid_out(ids, true)
    }

    fn column(ids: &[u32]) -> Vec<FocusEntry<u32>> {
        laid_out(ids, false)
    }

    fn policy(direction: FocusZoneDirection, wrap: WrapMode) -> ZonePolicy {
        ZonePolicy {
            wrap,
            direction,
            text_direction: TextDirection::Ltr,
        }
    }

    #[test]
    fn circular_horizontal_row_wraps_at_both_ends() {
        let entries = row(&[1, 2, 3]);
        let space = FocusSpace { nodes: &entries };
        let p = policy(FocusZoneDirection::Horizontal, WrapMode::Scope);

        assert_eq!(p.next(1, Navigation::Right, &space), Some(2));
        assert_eq!(p.next(3, Navigation::Right, &space), Some(1));
        assert_eq!(p.next(1, Navigation::Left, &space), Some(3));
    }

    #[test]
    fn non_circular_navigation_stops_at_boundaries() {
        let entries = row(&[1, 2, 3]);
        let space = FocusSpace { nodes: &entries };
        let p = policy(FocusZoneDirection::Horizontal, WrapMode::Never);

        assert_eq!(p.next(3, Navigation::Right, &space), None);
        assert_eq!(p.next(1, Navigation::Left, &space), None);
        assert_eq!(p.next(3, Navigation::Next, &space), None);
        assert_eq!(p.next(1, Navigation::Prev, &space), None);
    }

    #[test]
    fn direction_restricts_arrow_axes() {
        let entries = column(&[1, 2]);
        let space = FocusSpace { nodes: &entries };

        let vertical = policy(FocusZoneDirection::Vertical, WrapMode::Scope);
        assert_eq!(vertical.next(1, Navigation::Down, &space), Some(2));
        assert_eq!(vertical.next(1, Navigation::Right, &space), None);

        let horizontal = policy(FocusZoneDirection::Horizontal, WrapMode::Scope);
        assert_eq!(horizontal.next(1, Navigation::Down, &space), None);
    }

    #[test]
    fn dom_order_ignores_geometry() {
        // DOM order is 1, 2, 3 but 1 is drawn at the bottom of the column.
        let mut entries = column(&[1, 2, 3]);
        entries[0].rect = Rect::new(0.0, 100.0, 10.0, 110.0);
        let space = FocusSpace { nodes: &entries };

        let dom = policy(FocusZoneDirection::BidirectionalDomOrder, WrapMode::Scope);
        // Right has no geometric candidate in a column, yet DOM order still advances.
        assert_eq!(dom.next(1, Navigation::Right, &space), Some(2));
        assert_eq!(dom.next(3, Navigation::Down, &space), Some(1));
        assert_eq!(dom.next(2, Navigation::Left, &space), Some(1));

        // The visual policy walks the same entries top to bottom.
        let visual = policy(FocusZoneDirection::Bidirectional, WrapMode::Never);
        assert_eq!(visual.next(1, Navigation::Next, &space), None);
        assert_eq!(visual.next(3, Navigation::Down, &space), Some(1));
    }

    #[test]
    fn linear_skips_disabled_entries() {
        let mut entries = row(&[1, 2, 3]);
        entries[1].enabled = false;
        let space = FocusSpace { nodes: &entries };
        let p = policy(FocusZoneDirection::Bidirectional, WrapMode::Scope);

        assert_eq!(p.next(1, Navigation::Next, &space), Some(3));
        assert_eq!(p.next(3, Navigation::Prev, &space), Some(1));
        assert_eq!(p.next(1, Navigation::Right, &space), Some(3));
    }

    #[test]
    fn first_and_last_follow_reading_order() {
        let entries = row(&[7, 8, 9]);
        let space = FocusSpace { nodes: &entries };
        let p = ZonePolicy::default();

        assert_eq!(p.next(8, Navigation::First, &space), Some(7));
        assert_eq!(p.next(8, Navigation::Last, &space), Some(9));
    }

    #[test]
    fn rtl_reading_order_runs_right_to_left() {
        let entries = row(&[1, 2, 3]);
        let space = FocusSpace { nodes: &entries };
        let p = ZonePolicy {
            wrap: WrapMode::Never,
            direction: FocusZoneDirection::Bidirectional,
            text_direction: TextDirection::Rtl,
        };

        assert_eq!(p.next(3, Navigation::Next, &space), Some(2));
        assert_eq!(p.next(8, Navigation::First, &space), Some(3));
        // Geometry is unaffected by reading direction.
        assert_eq!(p.next(1, Navigation::Right, &space), Some(2));
    }

    #[test]
    fn scope_intents_are_left_to_the_host() {
        let entries = row(&[1, 2]);
        let space = FocusSpace { nodes: &entries };
        let p = ZonePolicy::default();
        assert_eq!(p.next(1, Navigation::EnterScope, &space), None);
        assert_eq!(p.next(1, Navigation::ExitScope, &space), None);
    }

    #[test]
    fn empty_space_yields_nothing() {
        let space: FocusSpace<'_, u32> = FocusSpace { nodes: &[] };
        let p = policy(FocusZoneDirection::Bidirectional, WrapMode::Scope);
        assert_eq!(p.next(1, Navigation::Next, &space), None);
        assert_eq!(p.next(1, Navigation::Down, &space), None);
    }
}
