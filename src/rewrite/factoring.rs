/*
    Left factoring: pulling shared leading symbol runs out of a rule's
    alternatives so that one lookahead symbol picks an alternative
*/

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::grammar::{Production, Productions, RuleSet, Symbol, EPSILON};

use super::leading;

// First index at which the two productions disagree, or the length of the
// shorter one when it is a prefix of the other
fn discordance_pos(left: &[Symbol], right: &[Symbol]) -> usize {
    assert!(!left.is_empty() && !right.is_empty(), "empty production in prefix computation");

    left.iter().zip(right).take_while(|(a, b)| a == b).count()
}

// Longest common prefix of two productions, with an empty side taken as a
// fold seed and replaced by the other side whole
fn common_factors(left: &[Symbol], right: &[Symbol]) -> Production {
    if left.is_empty() || right.is_empty() {
        let seed = if left.is_empty() { right } else { left };
        return seed.to_vec();
    }

    return left[..discordance_pos(left, right)].to_vec();
}

// Leading symbols shared by two or more alternatives, mapped to the longest
// prefix the alternatives under that symbol have in common
fn left_common_prefixes(productions: &Productions) -> HashMap<Symbol, Production> {
    let repeated: HashSet<&str> = productions.iter()
        .counts_by(leading)
        .into_iter()
        .filter(|(_, occurrences)| *occurrences > 1)
        .map(|(symbol, _)| symbol)
        .collect();

    let mut prefixes: HashMap<Symbol, Production> = HashMap::new();
    for production in productions {
        if !repeated.contains(leading(production)) {
            continue;
        }

        let prefix = prefixes.entry(leading(production).to_string()).or_default();
        *prefix = common_factors(prefix, production);
    }

    return prefixes;
}

// Factors one rule, rescans the whole grammar, and repeats until no rule
// keeps a shared prefix under a repeated leading symbol
pub fn factor_left(rules: &mut RuleSet) {
    loop {
        let names = rules.rules.keys().cloned().sorted().collect_vec();
        let target = names.into_iter()
            .find(|name| !left_common_prefixes(&rules.rules[name]).is_empty());

        let Some(name) = target else {
            break;
        };
        factor_rule(rules, &name);
    }
}

fn factor_rule(rules: &mut RuleSet, name: &str) {
    let auxiliary = rules.fresh_name(&format!("{}_CFL", name));
    let Some(productions) = rules.rules.get_mut(name) else {
        return;
    };

    // Duplicate alternatives would leave a group with nothing but its own
    // prefix below, so they collapse before the prefixes are measured
    let deduplicated = productions.drain(..).unique().collect_vec();
    *productions = deduplicated;

    let prefixes = left_common_prefixes(productions);
    if prefixes.is_empty() {
        return;
    }

    let mut auxiliary_productions = Productions::new();
    let mut epsilon_added = false;

    for production in productions.iter_mut() {
        let Some(prefix) = prefixes.get(leading(production)) else {
            continue;
        };
        let pos = discordance_pos(prefix, production);

        // A production that is exactly the shared prefix survives as the
        // epsilon alternative of the auxiliary rule, added once
        if pos == production.len() {
            production.clear();
            if !epsilon_added {
                epsilon_added = true;
                auxiliary_productions.push(vec![EPSILON.to_string()]);
            }
            continue;
        }

        auxiliary_productions.push(production.split_off(pos));
        production.push(auxiliary.clone());
    }

    let kept = productions.drain(..)
        .filter(|production| !production.is_empty())
        .unique()
        .collect_vec();
    *productions = kept;

    rules.rules.insert(auxiliary, auxiliary_productions);
}
