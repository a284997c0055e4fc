//! Thompson's construction: folds a postfix token stream into an NFA by composing partially
//! built fragments on an explicit stack.

use crate::compiler::{CompileError, CompileResult};

use std::collections::HashSet;
use std::iter;

use automata::nfa::Transition;
use automata::{NfaBuilder, Table, NFA};

/// An intermediate, not-yet-finalized sub-automaton. A fragment has exactly one start state, a
/// non-empty set of accepting states, and the portion of the transition table belonging to it.
/// State labels are allocated by the build's shared [`NfaBuilder`].
#[derive(Debug)]
struct Fragment {
    start: usize,
    accepts: HashSet<usize>,
    table: Table<usize, Transition<char>, HashSet<usize>>,
}

impl Fragment {
    fn new(start: usize) -> Self {
        Fragment {
            start,
            accepts: HashSet::new(),
            table: Table::new(),
        }
    }

    fn add_transition(&mut self, start: usize, end: usize, label: Transition<char>) {
        self.table
            .set_or(start, label, iter::once(end).collect(), |v| {
                v.insert(end);
            });
    }

    fn add_epsilon_transition(&mut self, start: usize, end: usize) {
        self.add_transition(start, end, Transition::Epsilon);
    }

    /// Union another fragment's transitions into this fragment's table.
    fn absorb(&mut self, table: Table<usize, Transition<char>, HashSet<usize>>) {
        self.table.merge_with(table, |targets, more| {
            targets.extend(more);
        });
    }
}

/// Fold a postfix expression into an NFA.
///
/// Literals push a fresh two-state fragment; `.`, `|`, and `*` pop their operands, wire them
/// together with epsilon transitions, and push the combined fragment. Exactly one fragment must
/// remain at the end; it is promoted into the final NFA through [`NfaBuilder::merge`]. A stack
/// underflow or leftover fragments indicate a malformed postfix expression.
pub(crate) fn assemble(postfix: &str) -> CompileResult<NFA<char>> {
    let mut builder = NfaBuilder::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for token in postfix.chars() {
        match token {
            '.' => {
                // The right operand was pushed last.
                let right = pop_operand(&mut stack, "concatenation is missing an operand")?;
                let left = pop_operand(&mut stack, "concatenation is missing an operand")?;
                stack.push(concatenation(left, right));
            }
            '|' => {
                let second = pop_operand(&mut stack, "alternation is missing an operand")?;
                let first = pop_operand(&mut stack, "alternation is missing an operand")?;
                stack.push(union(&mut builder, first, second));
            }
            '*' => {
                let inner = pop_operand(&mut stack, "closure is missing an operand")?;
                stack.push(kleene_star(&mut builder, inner));
            }
            c => stack.push(literal(&mut builder, c)),
        }
    }

    let fragment = match stack.pop() {
        Some(fragment) if stack.is_empty() => fragment,
        _ => {
            return Err(CompileError::MalformedPostfix(
                "expected exactly one fragment after folding",
            ))
        }
    };

    builder.merge(fragment.start, fragment.accepts, fragment.table);
    builder
        .into_nfa()
        .ok_or(CompileError::MalformedPostfix("no start state adopted"))
}

fn pop_operand(stack: &mut Vec<Fragment>, missing: &'static str) -> CompileResult<Fragment> {
    stack.pop().ok_or(CompileError::MalformedPostfix(missing))
}

/// A fragment matching a single literal: `start --c--> accept`.
fn literal(builder: &mut NfaBuilder<char>, c: char) -> Fragment {
    let start = builder.new_state();
    let accept = builder.new_state();

    let mut fragment = Fragment::new(start);
    fragment.add_transition(start, accept, Transition::Some(c));
    fragment.accepts.insert(accept);

    fragment
}

/// Concatenate two fragments. The left fragment's start becomes the combined start, the right
/// fragment's accepting states become the combined accepts, and every accepting state of the
/// left fragment gains an epsilon transition to the right fragment's start.
fn concatenation(left: Fragment, right: Fragment) -> Fragment {
    let mut fragment = Fragment {
        start: left.start,
        accepts: right.accepts,
        table: left.table,
    };
    fragment.absorb(right.table);

    for &left_final in left.accepts.iter() {
        fragment.add_epsilon_transition(left_final, right.start);
    }

    fragment
}

/// Combine two fragments under alternation. A fresh start state branches by epsilon to each
/// operand's start; every accepting state of both operands reaches a fresh accepting state by
/// epsilon.
fn union(builder: &mut NfaBuilder<char>, first: Fragment, second: Fragment) -> Fragment {
    let start = builder.new_state();
    let accept = builder.new_state();

    let mut fragment = Fragment::new(start);
    fragment.absorb(first.table);
    fragment.absorb(second.table);

    fragment.add_epsilon_transition(start, first.start);
    fragment.add_epsilon_transition(start, second.start);
    for &operand_final in first.accepts.iter().chain(second.accepts.iter()) {
        fragment.add_epsilon_transition(operand_final, accept);
    }
    fragment.accepts.insert(accept);

    fragment
}

/// Close a fragment under Kleene star. The fresh start reaches the old start (one or more
/// repetitions) and the fresh accept (zero repetitions) by epsilon; every old accepting state
/// loops back to the old start and exits to the fresh accept.
fn kleene_star(builder: &mut NfaBuilder<char>, inner: Fragment) -> Fragment {
    let start = builder.new_state();
    let accept = builder.new_state();

    let mut fragment = Fragment::new(start);
    fragment.absorb(inner.table);

    fragment.add_epsilon_transition(start, inner.start);
    fragment.add_epsilon_transition(start, accept);
    for &inner_final in inner.accepts.iter() {
        fragment.add_epsilon_transition(inner_final, inner.start);
        fragment.add_epsilon_transition(inner_final, accept);
    }
    fragment.accepts.insert(accept);

    fragment
}
