//! Breadth-first state naming
//!
//! The start state is `q0`; every other state is named `q{n}` in the order a
//! breadth-first walk first reaches it, following each state's transitions
//! in insertion order.

use crate::nfa::{Nfa, StateId};
use std::collections::VecDeque;

/// Canonical label for the `n`th discovered state
pub fn state_name(n: usize) -> String {
    format!("q{}", n)
}

/// Name every state reachable from the start and return how many were named
///
/// Previous names are cleared first, so running this twice gives the same
/// result. Unreachable states are left unnamed.
pub fn assign_names(nfa: &mut Nfa) -> usize {
    for id in nfa.state_ids().to_vec() {
        if let Some(state) = nfa.state_mut(id) {
            state.name = None;
        }
    }

    let start = nfa.start();
    let mut count = 0;
    let mut queue = VecDeque::new();

    if let Some(state) = nfa.state_mut(start) {
        state.name = Some(state_name(count));
        count += 1;
        queue.push_back(start);
    }

    while let Some(id) = queue.pop_front() {
        let targets: Vec<StateId> = match nfa.state(id) {
            Some(state) => state.transitions.iter().map(|t| t.target).collect(),
            None => continue,
        };
        for target in targets {
            let Some(state) = nfa.state_mut(target) else {
                continue;
            };
            if state.name.is_none() {
                state.name = Some(state_name(count));
                count += 1;
                queue.push_back(target);
            }
        }
    }

    log::debug!("named {} of {} states", count, nfa.len());
    count
}

/// States in collection order that the naming walk did not reach
pub fn unnamed(nfa: &Nfa) -> Vec<StateId> {
    nfa.states()
        .filter(|s| s.name.is_none())
        .map(|s| s.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmptyRegexPolicy;
    use crate::nfa::Builder;

    fn names_in_order(nfa: &Nfa) -> Vec<String> {
        nfa.states()
            .map(|s| s.name.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_single_symbol_names() {
        let mut builder = Builder::new();
        let frag = builder.symbol('a');
        let mut nfa = builder.finish(frag);
        assert_eq!(assign_names(&mut nfa), 2);
        assert_eq!(names_in_order(&nfa), vec!["q0", "q1"]);
    }

    #[test]
    fn test_start_is_q0() {
        let mut builder = Builder::new();
        let a = builder.symbol('a');
        let b = builder.symbol('b');
        let frag = builder.concat(a, b);
        let mut nfa = builder.finish(frag);
        assign_names(&mut nfa);
        assert_eq!(nfa.name(nfa.start()), Some("q0"));
    }

    #[test]
    fn test_bfs_order_differs_from_collection_order() {
        // a+b: collection order is [new start, a0, a1, b0, b1],
        // breadth-first order is new start, a0, b0, a1, b1
        let mut builder = Builder::new();
        let a = builder.symbol('a');
        let b = builder.symbol('b');
        let frag = builder.union(a, b);
        let mut nfa = builder.finish(frag);
        assign_names(&mut nfa);
        assert_eq!(names_in_order(&nfa), vec!["q0", "q1", "q3", "q2", "q4"]);
    }

    #[test]
    fn test_self_loop_named_once() {
        let mut builder = Builder::new();
        let e = builder.epsilon();
        let frag = builder.star(e);
        let mut nfa = builder.finish(frag);
        assert_eq!(assign_names(&mut nfa), 2);
    }

    #[test]
    fn test_renaming_is_idempotent() {
        let mut builder = Builder::new();
        let a = builder.symbol('a');
        let frag = builder.star(a);
        let mut nfa = builder.finish(frag);
        assign_names(&mut nfa);
        let first = names_in_order(&nfa);
        assign_names(&mut nfa);
        assert_eq!(names_in_order(&nfa), first);
    }

    #[test]
    fn test_unreachable_left_unnamed() {
        // A fragment with no accepts leaves the right operand of a
        // concatenation unreachable
        let mut builder = Builder::new();
        let left = builder.empty(EmptyRegexPolicy::AcceptsNothing);
        let right = builder.symbol('a');
        let right_states = right.states.clone();
        let frag = builder.concat(left, right);
        let mut nfa = builder.finish(frag);

        assert_eq!(assign_names(&mut nfa), 1);
        assert_eq!(unnamed(&nfa), right_states);
    }

    #[test]
    fn test_state_name() {
        assert_eq!(state_name(0), "q0");
        assert_eq!(state_name(12), "q12");
    }
}
