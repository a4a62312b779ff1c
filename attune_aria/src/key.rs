// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key codes, modifier flags, and key combinations.

use core::fmt;

use smallvec::SmallVec;

/// A numeric keyboard key code.
///
/// Matching is always done on the numeric code, never on the produced character, so a
/// behavior and the dispatcher agree as long as both use these constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(pub u16);

impl Key {
    /// Backspace.
    pub const BACKSPACE: Self = Self(8);
    /// Tab.
    pub const TAB: Self = Self(9);
    /// Enter / Return.
    pub const ENTER: Self = Self(13);
    /// Shift.
    pub const SHIFT: Self = Self(16);
    /// Control.
    pub const CONTROL: Self = Self(17);
    /// Alt / Option.
    pub const ALT: Self = Self(18);
    /// Escape.
    pub const ESCAPE: Self = Self(27);
    /// Spacebar.
    pub const SPACEBAR: Self = Self(32);
    /// Page Up.
    pub const PAGE_UP: Self = Self(33);
    /// Page Down.
    pub const PAGE_DOWN: Self = Self(34);
    /// End.
    pub const END: Self = Self(35);
    /// Home.
    pub const HOME: Self = Self(36);
    /// Left arrow.
    pub const ARROW_LEFT: Self = Self(37);
    /// Up arrow.
    pub const ARROW_UP: Self = Self(38);
    /// Right arrow.
    pub const ARROW_RIGHT: Self = Self(39);
    /// Down arrow.
    pub const ARROW_DOWN: Self = Self(40);
    /// Insert.
    pub const INSERT: Self = Self(45);
    /// Delete.
    pub const DELETE: Self = Self(46);
    /// `*`, which shares its code with the `8` key on the main block.
    pub const ASTERISK: Self = Self(56);
    /// Context menu key.
    pub const CONTEXT_MENU: Self = Self(93);
    /// F10.
    pub const F10: Self = Self(121);

    const NAMED: &'static [(&'static str, Self)] = &[
        ("Backspace", Self::BACKSPACE),
        ("Tab", Self::TAB),
        ("Enter", Self::ENTER),
        ("Shift", Self::SHIFT),
        ("Control", Self::CONTROL),
        ("Alt", Self::ALT),
        ("Escape", Self::ESCAPE),
        ("Spacebar", Self::SPACEBAR),
        ("PageUp", Self::PAGE_UP),
        ("PageDown", Self::PAGE_DOWN),
        ("End", Self::END),
        ("Home", Self::HOME),
        ("ArrowLeft", Self::ARROW_LEFT),
        ("ArrowUp", Self::ARROW_UP),
        ("ArrowRight", Self::ARROW_RIGHT),
        ("ArrowDown", Self::ARROW_DOWN),
        ("Insert", Self::INSERT),
        ("Delete", Self::DELETE),
        ("*", Self::ASTERISK),
        ("ContextMenu", Self::CONTEXT_MENU),
        ("F10", Self::F10),
    ];

    /// Look up a key by its conventional name (`"Enter"`, `"ArrowDown"`, `"*"`, or a single
    /// ASCII letter or digit).
    ///
    /// ```rust
    /// use attune_aria::Key;
    ///
    /// assert_eq!(Key::from_name("Escape"), Some(Key::ESCAPE));
    /// assert_eq!(Key::from_name("a"), Some(Key(65)));
    /// assert_eq!(Key::from_name("Nope"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some((_, key)) = Self::NAMED.iter().find(|(n, _)| *n == name) {
            return Some(*key);
        }
        match name.as_bytes() {
            [c] if c.is_ascii_alphabetic() => Some(Self(u16::from(c.to_ascii_uppercase()))),
            [c] if c.is_ascii_digit() => Some(Self(u16::from(*c))),
            _ => None,
        }
    }

    /// The conventional name of this key, if it has one in the named table.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(n, _)| *n)
    }

    /// The horizontally mirrored key for right-to-left layouts.
    ///
    /// `ArrowLeft` and `ArrowRight` swap; every other key maps to itself.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::ARROW_LEFT => Self::ARROW_RIGHT,
            Self::ARROW_RIGHT => Self::ARROW_LEFT,
            other => other,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Key({})", self.0),
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        /// Alt / Option.
        const ALT   = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Shift.
        const SHIFT = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

/// A key code plus modifier requirements.
///
/// Each modifier is tri-state: listed in `pressed` it must be held, listed in `released` it
/// must not be held, listed in neither it is ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyCombination {
    /// The key code that must be reported by the event.
    pub key_code: Key,
    /// Modifiers that must be held.
    pub pressed: Modifiers,
    /// Modifiers that must not be held.
    pub released: Modifiers,
}

impl KeyCombination {
    /// A combination on `key_code` that ignores every modifier.
    pub const fn new(key_code: Key) -> Self {
        Self {
            key_code,
            pressed: Modifiers::empty(),
            released: Modifiers::empty(),
        }
    }

    /// Require `modifiers` to be held.
    #[must_use]
    pub fn with(mut self, modifiers: Modifiers) -> Self {
        self.pressed |= modifiers;
        self.released -= modifiers;
        self
    }

    /// Require `modifiers` to be released.
    #[must_use]
    pub fn without(mut self, modifiers: Modifiers) -> Self {
        self.released |= modifiers;
        self.pressed -= modifiers;
        self
    }

    /// Whether `event` satisfies this combination.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key_code == event.key
            && event.modifiers.contains(self.pressed)
            && !event.modifiers.intersects(self.released)
    }

    /// The same combination with its key mirrored for right-to-left layouts.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            key_code: self.key_code.mirrored(),
            ..self
        }
    }
}

impl From<Key> for KeyCombination {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// An ordered sequence of key combinations; any one of them triggers the action.
pub type KeyCombinations = SmallVec<[KeyCombination; 2]>;

/// The key combinations bound to one named action.
///
/// `key_combinations == None` is the disabled sentinel: the action is declared but must not be
/// bound right now (typically because a precondition prop is false). It is distinct from an
/// empty sequence, which binds nothing without saying why.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyAction {
    /// Combinations that trigger the action, or `None` when the action is disabled.
    pub key_combinations: Option<KeyCombinations>,
}

impl KeyAction {
    /// An action triggered by any of `combinations`.
    pub fn on<I>(combinations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<KeyCombination>,
    {
        Self {
            key_combinations: Some(combinations.into_iter().map(Into::into).collect()),
        }
    }

    /// The disabled sentinel.
    pub const fn disabled() -> Self {
        Self {
            key_combinations: None,
        }
    }

    /// `on(combinations)` when `enabled`, the disabled sentinel otherwise.
    pub fn on_if<I>(enabled: bool, combinations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<KeyCombination>,
    {
        if enabled {
            Self::on(combinations)
        } else {
            Self::disabled()
        }
    }

    /// Whether this action carries the disabled sentinel.
    pub const fn is_disabled(&self) -> bool {
        self.key_combinations.is_none()
    }

    /// Whether any combination of this action matches `event`.
    ///
    /// Disabled and empty actions never match.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key_combinations
            .as_ref()
            .is_some_and(|combos| combos.iter().any(|c| c.matches(event)))
    }
}

/// A keyboard event as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    /// Key code of the pressed key.
    pub key: Key,
    /// Modifiers held while the key was pressed.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// An event for `key` with no modifiers held.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the held modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_the_table() {
        for (name, key) in Key::NAMED {
            assert_eq!(Key::from_name(name), Some(*key));
            assert_eq!(key.name(), Some(*name));
        }
    }

    #[test]
    fn single_letters_map_to_uppercase_codes() {
        assert_eq!(Key::from_name("z"), Some(Key(90)));
        assert_eq!(Key::from_name("Z"), Some(Key(90)));
        assert_eq!(Key::from_name("7"), Some(Key(55)));
        assert_eq!(Key::from_name(""), None);
        assert_eq!(Key::from_name("ArrowSideways"), None);
    }

    #[test]
    fn released_modifier_blocks_match() {
        let combo = KeyCombination::new(Key::TAB).without(Modifiers::SHIFT);
        assert!(combo.matches(&KeyEvent::new(Key::TAB)));
        assert!(!combo.matches(&KeyEvent::new(Key::TAB).with_modifiers(Modifiers::SHIFT)));
        // Unlisted modifiers stay ignored.
        assert!(combo.matches(&KeyEvent::new(Key::TAB).with_modifiers(Modifiers::ALT)));
    }

    #[test]
    fn with_and_without_are_exclusive() {
        let combo = KeyCombination::new(Key::ENTER)
            .with(Modifiers::SHIFT)
            .without(Modifiers::SHIFT);
        assert!(combo.pressed.is_empty());
        assert_eq!(combo.released, Modifiers::SHIFT);
    }

    #[test]
    fn mirroring_swaps_only_horizontal_arrows() {
        assert_eq!(Key::ARROW_LEFT.mirrored(), Key::ARROW_RIGHT);
        assert_eq!(Key::ARROW_RIGHT.mirrored(), Key::ARROW_LEFT);
        assert_eq!(Key::ARROW_UP.mirrored(), Key::ARROW_UP);
        assert_eq!(Key::ENTER.mirrored(), Key::ENTER);
    }

    #[test]
    fn disabled_action_differs_from_empty_action() {
        let disabled = KeyAction::disabled();
        let empty = KeyAction::on(core::iter::empty::<Key>());
        assert!(disabled.is_disabled());
        assert!(!empty.is_disabled());
        assert_ne!(disabled, empty);
        assert!(!disabled.matches(&KeyEvent::new(Key::ENTER)));
        assert!(!empty.matches(&KeyEvent::new(Key::ENTER)));
    }

    #[test]
    fn action_matches_any_combination() {
        let action = KeyAction::on([Key::ENTER, Key::SPACEBAR]);
        assert!(action.matches(&KeyEvent::new(Key::ENTER)));
        assert!(action.matches(&KeyEvent::new(Key::SPACEBAR)));
        assert!(!action.matches(&KeyEvent::new(Key::ESCAPE)));
        assert!(KeyAction::on_if(false, [Key::ENTER]).is_disabled());
    }
}
