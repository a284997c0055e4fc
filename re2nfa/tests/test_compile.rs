use re2nfa::automata::nfa::Transition;
use re2nfa::compile;

include!("util.rs");

#[test]
fn test_literal_structure() {
    for &c in ['a', 'z', '0', ' '].iter() {
        let nfa = compile(&c.to_string()).unwrap();

        assert_eq!(2, nfa.state_count());
        assert_eq!(1, nfa.accepting_states().len());

        let start = nfa.start_state();
        let &accept = nfa.accepting_states().iter().next().unwrap();
        assert_ne!(start, accept);

        let targets = nfa
            .transitions()
            .get(&start, &Transition::Some(c))
            .unwrap();
        assert_eq!(1, targets.len());
        assert!(targets.contains(&accept));

        assert!(nfa.transitions_from(accept).is_empty());
    }
}

#[test]
fn test_states_all_allocated() {
    let exprs = ["a", "ab", "a|b", "a*", "a(b|c)*", "(a|b)*abb", "aa*|bb*"];
    for &expr in exprs.iter() {
        let nfa = compile(expr).unwrap();
        let count = nfa.state_count();

        assert!(nfa.start_state() < count);
        assert!(!nfa.accepting_states().is_empty());
        for state in nfa.accepting_states().iter() {
            assert!(*state < count);
        }
        for (from, _, targets) in nfa.transitions().into_iter() {
            assert!(*from < count);
            for to in targets.iter() {
                assert!(*to < count);
            }
        }
    }
}

#[test]
fn test_concatenation_order() {
    // Left operand first: "ab" must accept "ab", never "ba".
    let nfa = compile("ab").unwrap();
    assert!(accepts(&nfa, "ab"));
    assert!(!accepts(&nfa, "ba"));
    assert!(!accepts(&nfa, "a"));
    assert!(!accepts(&nfa, "b"));
    assert!(!accepts(&nfa, ""));
}

#[test]
fn test_union() {
    let nfa = compile("a|b").unwrap();
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "b"));
    assert!(!accepts(&nfa, ""));
    assert!(!accepts(&nfa, "ab"));
}

#[test]
fn test_kleene_star() {
    let nfa = compile("a*").unwrap();
    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "aaaa"));
    assert!(!accepts(&nfa, "b"));
    assert!(!accepts(&nfa, "ab"));
}

#[test]
fn test_grouping() {
    let nfa = compile("a(b|c)").unwrap();
    assert!(accepts(&nfa, "ab"));
    assert!(accepts(&nfa, "ac"));
    assert!(!accepts(&nfa, "a"));
    assert!(!accepts(&nfa, "abc"));
}

#[test]
fn test_star_epsilon_cycle_terminates() {
    // Nested stars close an epsilon cycle; closure traversal must still halt.
    let nfa = compile("(a*)*").unwrap();
    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "aaa"));
    assert!(!accepts(&nfa, "ab"));
}

#[test]
fn test_composite() {
    let nfa = compile("(a|b)*abb").unwrap();
    assert!(accepts(&nfa, "abb"));
    assert!(accepts(&nfa, "aabb"));
    assert!(accepts(&nfa, "babb"));
    assert!(accepts(&nfa, "ababb"));
    assert!(!accepts(&nfa, ""));
    assert!(!accepts(&nfa, "ab"));
    assert!(!accepts(&nfa, "bb"));
    assert!(!accepts(&nfa, "abbb"));
}

#[test]
fn test_branching_from_start() {
    // "aa*|bb*": the start state must reach both operand sub-automata on epsilon transitions.
    let nfa = compile("aa*|bb*").unwrap();
    let closure = nfa.epsilon_closure(nfa.start_state());

    let reaches_a = closure
        .iter()
        .any(|&s| nfa.transitions().get(&s, &Transition::Some('a')).is_some());
    let reaches_b = closure
        .iter()
        .any(|&s| nfa.transitions().get(&s, &Transition::Some('b')).is_some());
    assert!(reaches_a);
    assert!(reaches_b);

    for valid in ["a", "aa", "aaa", "b", "bb", "bbbb"].iter() {
        assert!(accepts(&nfa, valid), r#"failed to accept "{}""#, valid);
    }
    for invalid in ["", "ab", "ba", "aab", "bba"].iter() {
        assert!(!accepts(&nfa, invalid), r#"accepted "{}""#, invalid);
    }
}
