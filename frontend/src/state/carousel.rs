use std::rc::Rc;

use log::debug;
use yew::Reducible;

/// Position in a fixed, non-empty list plus whether the pointer is resting on
/// the card. `index` is always `< len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
    pub hovered: bool,
}

pub enum CarouselAction {
    Next,
    Previous,
    JumpTo(usize),
    /// Autoplay timer fired.
    Tick,
    HoverEnter,
    HoverLeave,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            hovered: false,
        }
    }

    fn with_index(&self, index: usize) -> Self {
        Self {
            index,
            ..self.clone()
        }
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.len
    }

    fn previous_index(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }

    pub fn is_autoplaying(&self) -> bool {
        !self.hovered && self.len > 1
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Next => self.with_index(self.next_index()),
            CarouselAction::Previous => self.with_index(self.previous_index()),
            CarouselAction::JumpTo(index) if index < self.len => self.with_index(index),
            CarouselAction::JumpTo(index) => {
                debug!("Ignoring carousel jump to {} (len {})", index, self.len);
                return self;
            }
            CarouselAction::Tick if self.hovered => return self,
            CarouselAction::Tick => self.with_index(self.next_index()),
            CarouselAction::HoverEnter => Self {
                hovered: true,
                ..(*self).clone()
            },
            CarouselAction::HoverLeave => Self {
                hovered: false,
                ..(*self).clone()
            },
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: CarouselState, actions: impl IntoIterator<Item = CarouselAction>) -> CarouselState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn wraps_in_both_directions() {
        let start = CarouselState::new(5);
        assert_eq!(apply(start.clone(), [CarouselAction::Previous]).index, 4);

        let last = CarouselState { index: 4, ..start };
        assert_eq!(apply(last, [CarouselAction::Next]).index, 0);
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        let mut state = Rc::new(CarouselState::new(5));
        // Deterministic pseudo-random walk over next/previous.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let action = if seed % 3 == 0 {
                CarouselAction::Previous
            } else {
                CarouselAction::Next
            };
            state = state.reduce(action);
            assert!(state.index < 5);
        }
    }

    #[test]
    fn jump_outside_the_list_is_ignored() {
        let state = apply(CarouselState::new(5), [CarouselAction::JumpTo(3)]);
        assert_eq!(state.index, 3);
        let state = apply(state, [CarouselAction::JumpTo(5), CarouselAction::JumpTo(usize::MAX)]);
        assert_eq!(state.index, 3);
    }

    #[test]
    fn three_ticks_advance_three_entries() {
        let state = apply(
            CarouselState::new(5),
            [CarouselAction::Tick, CarouselAction::Tick, CarouselAction::Tick],
        );
        assert_eq!(state.index, 3);
    }

    #[test]
    fn hover_suspends_ticks_without_banking_them() {
        let state = apply(
            CarouselState::new(5),
            [
                CarouselAction::Tick,
                CarouselAction::HoverEnter,
                CarouselAction::Tick,
                CarouselAction::Tick,
            ],
        );
        assert_eq!(state.index, 1);
        assert!(!state.is_autoplaying());

        let state = apply(state, [CarouselAction::HoverLeave]);
        assert_eq!(state.index, 1);
        assert!(state.is_autoplaying());

        let state = apply(state, [CarouselAction::Tick]);
        assert_eq!(state.index, 2);
    }

    #[test]
    fn manual_navigation_still_works_while_hovered() {
        let state = apply(
            CarouselState::new(5),
            [CarouselAction::HoverEnter, CarouselAction::Next, CarouselAction::Next],
        );
        assert_eq!(state.index, 2);
        assert!(state.hovered);
    }

    #[test]
    fn single_entry_list_never_autoplays() {
        let state = apply(CarouselState::new(1), [CarouselAction::Next, CarouselAction::Previous]);
        assert_eq!(state.index, 0);
        assert!(!state.is_autoplaying());
        assert_eq!(CarouselState::new(0).len, 1);
    }
}
