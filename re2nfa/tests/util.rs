/// Decide acceptance of `input` by epsilon-closure traversal over the compiled NFA's read-only
/// surface. Lives in the tests because the crate itself exposes no matching API.
#[allow(dead_code)]
fn accepts(nfa: &re2nfa::automata::NFA<char>, input: &str) -> bool {
    use re2nfa::automata::nfa::Transition;
    use std::collections::HashSet;

    let mut states = nfa.epsilon_closure(nfa.start_state());
    for c in input.chars() {
        let mut moved = HashSet::new();
        for &state in states.iter() {
            if let Some(dests) = nfa.transitions().get(&state, &Transition::Some(c)) {
                moved.extend(dests.iter().copied());
            }
        }
        states = nfa.epsilon_closure_set(&moved);
        if states.is_empty() {
            return false;
        }
    }

    states.iter().any(|s| nfa.is_accepting_state(s))
}
