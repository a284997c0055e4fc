use crate::table::Table;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

include!("macros.rs");

/// A transition between states in an NFA.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transition<T: Clone + Eq + Hash> {
    /// A transition on some input symbol.
    Some(T),
    /// An epsilon transition allows the NFA to change its state spontaneously without consuming an
    /// input symbol.
    Epsilon,
}

/// Allocates state labels and accumulates transitions for a single NFA under construction. Each
/// build owns one store; labels are drawn from a counter local to the store, so independent
/// builds never interfere.
#[derive(Debug)]
pub struct NfaBuilder<T: Clone + Eq + Hash> {
    next_state: usize,
    start_state: Option<usize>,
    accepting_states: HashSet<usize>,
    transition: Table<usize, Transition<T>, HashSet<usize>>,
}

impl<T> NfaBuilder<T>
where
    T: Clone + Eq + Hash,
{
    /// Create an empty store with no states allocated.
    #[allow(clippy::new_without_default)]
    #[inline]
    pub fn new() -> Self {
        NfaBuilder {
            next_state: 0,
            start_state: None,
            accepting_states: HashSet::new(),
            transition: Table::new(),
        }
    }

    /// Allocate a fresh state. Labels are handed out in increasing order starting at 0.
    #[inline]
    pub fn new_state(&mut self) -> usize {
        let label = self.next_state;
        self.next_state += 1;
        label
    }

    /// The number of states allocated so far. Every label handed out by [`Self::new_state`] is
    /// strictly less than this count.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.next_state
    }

    /// Add a transition. Adding a transition that is already present is a no-op.
    #[inline]
    pub fn add_transition(&mut self, start: usize, end: usize, label: Transition<T>) {
        self.transition.set_or(start, label, hash_set![end], |v| {
            v.insert(end);
        });
    }

    /// Add a non-epsilon transition. See [`Self::add_transition`].
    #[inline]
    pub fn add_labeled_transition(&mut self, start: usize, end: usize, label: T) {
        self.add_transition(start, end, Transition::Some(label))
    }

    /// Add an epsilon transition. See [`Self::add_transition`].
    #[inline]
    pub fn add_epsilon_transition(&mut self, start: usize, end: usize) {
        self.add_transition(start, end, Transition::Epsilon)
    }

    /// Absorb an external transition table, unioning target sets cell by cell. The given start
    /// state is adopted as the overall start only if none has been adopted yet; the given
    /// accepting states are unioned into the overall accepting set.
    pub fn merge(
        &mut self,
        start: usize,
        accepts: HashSet<usize>,
        table: Table<usize, Transition<T>, HashSet<usize>>,
    ) {
        self.transition.merge_with(table, |targets, more| {
            targets.extend(more);
        });

        if self.start_state.is_none() {
            self.start_state = Some(start);
        }
        self.accepting_states.extend(accepts);
    }

    /// Finalize the store into an immutable NFA. Returns `None` if no start state was ever
    /// adopted, i.e. [`Self::merge`] was never called.
    #[inline]
    pub fn into_nfa(self) -> Option<NFA<T>> {
        let start_state = self.start_state?;

        Some(NFA {
            start_state,
            state_count: self.next_state,
            accepting_states: self.accepting_states,
            transition: self.transition,
        })
    }
}

/// A non-deterministic finite automaton, or NFA. Immutable once built; constructed through
/// [`NfaBuilder`].
#[derive(Clone, Debug)]
pub struct NFA<T: Clone + Eq + Hash> {
    /// An NFA has a single start state.
    start_state: usize,
    /// The number of states allocated by the build that produced this NFA. Every state label
    /// referenced by the transition table or the accepting set is less than this count.
    state_count: usize,
    /// The set of accepting states.
    accepting_states: HashSet<usize>,
    /// A lookup table for transitions between states.
    transition: Table<usize, Transition<T>, HashSet<usize>>,
}

impl<T> NFA<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    pub fn start_state(&self) -> usize {
        self.start_state
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    #[inline]
    pub fn accepting_states(&self) -> &HashSet<usize> {
        &self.accepting_states
    }

    #[inline]
    pub fn is_accepting_state(&self, label: &usize) -> bool {
        self.accepting_states.contains(label)
    }

    /// A read-only view of the transition table.
    #[inline]
    pub fn transitions(&self) -> &Table<usize, Transition<T>, HashSet<usize>> {
        &self.transition
    }

    /// Returns the transitions and destinations from a specific state.
    #[inline]
    pub fn transitions_from(&self, state: usize) -> HashMap<&Transition<T>, &HashSet<usize>> {
        self.transition.get_row(&state)
    }

    /// Computes the function epsilon-closure for some given state in the NFA. Returns the set of
    /// all states accessible from the given state on epsilon transitions only. Iterative, since
    /// the epsilon graph may contain cycles.
    pub fn epsilon_closure(&self, state: usize) -> HashSet<usize> {
        let mut closure = hash_set![state];
        let mut pending = vec![state];

        while let Some(s) = pending.pop() {
            if let Some(dests) = self.transition.get(&s, &Transition::Epsilon) {
                for &dest in dests {
                    if closure.insert(dest) {
                        pending.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// Computes the union of epsilon-closures for each state in the given set of states.
    pub fn epsilon_closure_set(&self, state_set: &HashSet<usize>) -> HashSet<usize> {
        let mut set = HashSet::new();
        for &state in state_set.iter() {
            set.extend(self.epsilon_closure(state));
        }
        set
    }
}
