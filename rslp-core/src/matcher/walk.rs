//! Backward state walk over a suffix trie
//!
//! The automaton is compiled from a rule table: every suffix is inserted
//! reversed, so suffixes sharing an ending share a path. A state is "how much
//! of some suffix has been read so far, from the end of the word". States
//! that complete a suffix are accepting and remember which rule they stand
//! for.
//!
//! The walk reads the word from its last character towards the first,
//! remembering the deepest accepting state it passes. When no transition
//! exists for the next character (or the word runs out), it rolls back to
//! that state and evaluates its rule. A word ending in "-ões" thus tries
//! "ões" first and, reading "-res" instead, falls back to plain "s".
//!
//! Because a table never lists a suffix after a shorter suffix that ends it,
//! the deepest accepting state is always the rule an ordered scan would
//! pick, and both strategies agree on every word.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{evaluate, Outcome, Reduction, SuffixMatcher};
use crate::phase::{MatchStrategy, Phase};
use crate::rules::RuleTable;

/// Index of a state in the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(u32);

impl StateId {
    /// Nothing read yet
    pub const START: StateId = StateId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// One automaton state
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Next character (moving towards the start of the word) -> state
    transitions: HashMap<char, StateId>,
    /// Rule completed by reaching this state
    accept: Option<usize>,
    /// Characters consumed to get here
    depth: usize,
}

impl State {
    /// Follow the transition for `ch`
    #[inline]
    pub fn next(&self, ch: char) -> Option<StateId> {
        self.transitions.get(&ch).copied()
    }

    /// Rule index if this state completes a suffix
    pub fn accept(&self) -> Option<usize> {
        self.accept
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Outgoing transitions, sorted by character
    pub fn transitions(&self) -> Vec<(char, StateId)> {
        let mut edges: Vec<_> = self.transitions.iter().map(|(&c, &s)| (c, s)).collect();
        edges.sort_unstable_by_key(|&(c, _)| c);
        edges
    }
}

/// Automaton equivalent of [`super::RuleScanMatcher`] for one phase
#[derive(Clone)]
pub struct StateWalkMatcher {
    table: Arc<RuleTable>,
    /// All states in contiguous storage; `StateId::START` is the root
    states: Vec<State>,
}

impl StateWalkMatcher {
    /// Compile the automaton for a rule table
    pub fn compile(table: Arc<RuleTable>) -> Self {
        let mut matcher = Self {
            table,
            states: vec![State::default()],
        };

        let table = Arc::clone(&matcher.table);
        for (index, rule) in table.rules().iter().enumerate() {
            let mut current = StateId::START;
            for ch in rule.suffix().chars().rev() {
                current = matcher.child_or_insert(current, ch);
            }

            // Tables are validated against duplicate suffixes; keep the first
            // rule anyway so the walk can never disagree with a scan.
            let state = &mut matcher.states[current.index()];
            if state.accept.is_none() {
                state.accept = Some(index);
            }
        }

        log::debug!(
            "compiled {} automaton: {} rules, {} states",
            matcher.table.phase(),
            matcher.table.len(),
            matcher.states.len()
        );
        matcher
    }

    fn child_or_insert(&mut self, parent: StateId, ch: char) -> StateId {
        if let Some(child) = self.states[parent.index()].next(ch) {
            return child;
        }

        let child = StateId(self.states.len() as u32);
        let depth = self.states[parent.index()].depth + 1;
        self.states.push(State {
            depth,
            ..State::default()
        });
        self.states[parent.index()].transitions.insert(ch, child);
        child
    }

    /// The automaton's states, indexable by [`StateId`]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Look up a state
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Walk `word` backwards; return the deepest accepting rule on the path
    fn longest_accepted(&self, word: &str) -> Option<usize> {
        let mut current = &self.states[StateId::START.index()];
        let mut accepted = None;

        for ch in word.chars().rev() {
            match current.next(ch) {
                Some(next) => {
                    current = &self.states[next.index()];
                    if let Some(rule) = current.accept {
                        accepted = Some(rule);
                    }
                }
                None => break,
            }
        }

        accepted
    }
}

impl SuffixMatcher for StateWalkMatcher {
    fn phase(&self) -> Phase {
        self.table.phase()
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::StateWalk
    }

    fn reduce(&self, word: &str) -> Reduction {
        match self.longest_accepted(word) {
            Some(index) => {
                log::trace!("{}: {:?} accepted rule {}", self.table.phase(), word, index);
                evaluate(index, &self.table.rules()[index], word)
            }
            None => Reduction::unchanged(word, Outcome::NoMatch),
        }
    }
}

impl fmt::Debug for StateWalkMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateWalkMatcher")
            .field("phase", &self.table.phase())
            .field("states", &self.states.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ExceptionSet, StrippingRule};

    fn plural() -> StateWalkMatcher {
        let exceptions = ExceptionSet::new(vec!["lápis".into(), "país".into()]).unwrap();
        let table = RuleTable::new(
            Phase::Plural,
            vec![
                StrippingRule::new("ns", 1, "m"),
                StrippingRule::new("ões", 3, "ão"),
                StrippingRule::new("les", 3, "l"),
                StrippingRule::new("s", 2, "").with_exceptions(exceptions),
            ],
        )
        .unwrap();
        StateWalkMatcher::compile(Arc::new(table))
    }

    #[test]
    fn test_shared_suffixes_share_states() {
        let matcher = plural();
        // root, s, n(s), e(s), õ(es), l(es)
        assert_eq!(matcher.states().len(), 6);

        let s = matcher.states()[0].next('s').unwrap();
        let s_state = matcher.state(s).unwrap();
        assert_eq!(s_state.accept(), Some(3));
        assert_eq!(s_state.depth(), 1);

        let chars: Vec<char> = s_state.transitions().into_iter().map(|(c, _)| c).collect();
        assert_eq!(chars, vec!['e', 'n']);
    }

    #[test]
    fn test_rolls_back_to_shorter_suffix() {
        let matcher = plural();
        // "...res": reads s, e, then 'r' has no transition -> back to "s"
        let reduction = matcher.reduce("mares");
        assert_eq!(reduction.word, "mare");
        assert_eq!(reduction.outcome, Outcome::Applied { rule: 3 });
    }

    #[test]
    fn test_longest_suffix_wins() {
        let matcher = plural();
        assert_eq!(matcher.reduce("balões").word, "balão");
        assert_eq!(matcher.reduce("males").word, "mal");
        assert_eq!(matcher.reduce("bons").word, "bom");
    }

    #[test]
    fn test_blocked_longest_rule_does_not_roll_back() {
        let matcher = plural();
        let reduction = matcher.reduce("ões");
        assert_eq!(reduction.outcome, Outcome::StemTooShort { rule: 1 });
        assert_eq!(reduction.word, "ões");
    }

    #[test]
    fn test_dead_stop_without_accepting_state() {
        let matcher = plural();
        assert_eq!(matcher.reduce("casa").outcome, Outcome::NoMatch);
        assert_eq!(matcher.reduce("").outcome, Outcome::NoMatch);
        assert_eq!(matcher.reduce("país").outcome, Outcome::Exception { rule: 3 });
    }
}
