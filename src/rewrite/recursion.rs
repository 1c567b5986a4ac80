/*
    Detection of indirect left recursion, and elimination of the direct kind
*/

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::grammar::{Productions, RuleSet, EPSILON};

use super::leading;

// Maps each rule to the nonterminals its alternatives can start with, not
// counting the rule itself. Chains of length one are direct recursion and
// are handled by elimination instead.
fn leading_successors(rules: &RuleSet) -> HashMap<&str, HashSet<&str>> {
    let mut successors = HashMap::new();

    for (name, productions) in &rules.rules {
        let mut starts = HashSet::new();
        for production in productions {
            let first = leading(production);
            if rules.is_nonterminal(first) && first != name.as_str() {
                starts.insert(first);
            }
        }
        successors.insert(name.as_str(), starts);
    }

    return successors;
}

// Reports a rule that can derive a sequence starting with itself through at
// least one intermediate rule. Such grammars cannot be fixed by the direct
// rewrite and are refused up front.
pub fn find_indirect_left_recursion(rules: &RuleSet) -> Option<String> {
    let successors = leading_successors(rules);

    for start in successors.keys().sorted() {
        let mut seen = HashSet::new();
        let mut pending = vec![*start];

        while let Some(next) = pending.pop() {
            let reachable = &successors[next];
            if reachable.contains(start) {
                return Some(start.to_string());
            }

            if seen.insert(next) {
                pending.extend(reachable.iter().copied());
            }
        }
    }

    return None;
}

// Rewrites every directly self-recursive rule into a right-recursive pair:
// A -> A x | y becomes A -> y A_LR with A_LR -> x A_LR | ε
pub fn eliminate_left_recursion(rules: &mut RuleSet) {
    let names = rules.rules.keys().cloned().sorted().collect_vec();

    for name in names {
        let Some(productions) = rules.rules.get(&name) else {
            continue;
        };
        if !productions.iter().any(|production| leading(production) == name) {
            continue;
        }

        let auxiliary = rules.fresh_name(&format!("{}_LR", name));
        let Some(productions) = rules.rules.get_mut(&name) else {
            continue;
        };

        let (prefixed, mut rest): (Productions, Productions) = productions
            .drain(..)
            .partition(|production| leading(production) == name);

        // The self-prefixed alternatives become the auxiliary rule's, with
        // the leading name stripped and the auxiliary chained on the right
        let mut auxiliary_productions = prefixed
            .into_iter()
            .map(|mut production| {
                production.remove(0);
                production.push(auxiliary.clone());
                production
            })
            .collect_vec();
        auxiliary_productions.push(vec![EPSILON.to_string()]);

        for production in rest.iter_mut() {
            production.push(auxiliary.clone());
        }

        *productions = rest;
        rules.rules.insert(auxiliary, auxiliary_productions);
    }
}
