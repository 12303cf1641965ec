/*
    Deterministic finite automata over characters
*/

pub trait Automaton {
    type State: Copy;

    fn start(&self) -> Self::State;
    fn delta(&self, state: Self::State, c: char) -> Self::State;
    fn is_final(&self, state: Self::State) -> bool;

    fn run(&self, input: &str) -> Self::State {
        input.chars().fold(self.start(), |state, c| self.delta(state, c))
    }

    fn accepts(&self, input: &str) -> bool {
        self.is_final(self.run(input))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleAState {
    // Last character was not an `a`
    Clear,
    // Last character was a single `a`
    SeenA,
    // Two `a`s in a row were read at some point
    Trapped,
}

/// Accepts the strings that never contain two consecutive `a`s.
pub struct DoubleA;

impl DoubleA {
    pub const ALPHABET: [char; 2] = ['a', 'b'];

    pub fn in_alphabet(input: &str) -> bool {
        input.chars().all(|c| Self::ALPHABET.contains(&c))
    }
}

impl Automaton for DoubleA {
    type State = DoubleAState;

    fn start(&self) -> DoubleAState {
        DoubleAState::Clear
    }

    fn delta(&self, state: DoubleAState, c: char) -> DoubleAState {
        match (state, c) {
            (DoubleAState::Trapped, _) => DoubleAState::Trapped,
            (DoubleAState::Clear, 'a') => DoubleAState::SeenA,
            (DoubleAState::SeenA, 'a') => DoubleAState::Trapped,
            _ => DoubleAState::Clear,
        }
    }

    fn is_final(&self, state: DoubleAState) -> bool {
        state != DoubleAState::Trapped
    }
}
