//! Offline well-formedness check
//!
//!     The parser trusts its tables: it follows the first matching arc and never
//!     backtracks. That is only correct for LL(1) tables whose declared FIRST sets
//!     agree with the automata. This module verifies those preconditions so a generator
//!     defect shows up as a list of issues instead of a silently wrong tree.
//!
//!     Checks:
//!         - no two labels share symbol and text
//!         - no state has two arcs on the same label
//!         - the labels each arc of a state can start with are disjoint
//!         - declared FIRST sets equal the ones computed from state 0 arcs
//!         - no nonterminal reaches itself through state 0 arcs (left recursion)

use super::model::{Dfa, Grammar, LabelId};
use super::symbol::{NonterminalId, Symbol};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// One violated precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarIssue {
    DuplicateLabel {
        first: LabelId,
        second: LabelId,
    },
    DuplicateArc {
        dfa: String,
        state: usize,
        label: LabelId,
    },
    /// Two arcs of one state can both start with `label`.
    AmbiguousArcs {
        dfa: String,
        state: usize,
        label: LabelId,
        arcs: (LabelId, LabelId),
    },
    FirstMismatch {
        dfa: String,
        declared: Vec<LabelId>,
        computed: Vec<LabelId>,
    },
    LeftRecursion {
        dfa: String,
    },
}

impl fmt::Display for GrammarIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarIssue::DuplicateLabel { first, second } => {
                write!(f, "labels {} and {} are identical", first, second)
            }
            GrammarIssue::DuplicateArc { dfa, state, label } => {
                write!(f, "{} state {}: two arcs on label {}", dfa, state, label)
            }
            GrammarIssue::AmbiguousArcs {
                dfa,
                state,
                label,
                arcs,
            } => write!(
                f,
                "{} state {}: arcs {} and {} both start with label {}",
                dfa, state, arcs.0, arcs.1, label
            ),
            GrammarIssue::FirstMismatch {
                dfa,
                declared,
                computed,
            } => write!(
                f,
                "{}: declared FIRST {:?} differs from computed {:?}",
                dfa,
                declared.iter().map(|l| l.raw()).collect::<Vec<_>>(),
                computed.iter().map(|l| l.raw()).collect::<Vec<_>>()
            ),
            GrammarIssue::LeftRecursion { dfa } => write!(f, "{} is left recursive", dfa),
        }
    }
}

impl Grammar {
    /// Verify the LL(1) preconditions the parser relies on. An empty result means the
    /// tables are well formed.
    pub fn check_well_formed(&self) -> Vec<GrammarIssue> {
        let mut issues = Vec::new();
        self.check_labels(&mut issues);

        let mut firsts = FirstSets::new(self);
        for dfa in self.dfas() {
            let computed = firsts.get(dfa.symbol());
            if computed.iter().ne(dfa.first().iter()) {
                issues.push(GrammarIssue::FirstMismatch {
                    dfa: dfa.name().to_string(),
                    declared: dfa.first().to_vec(),
                    computed: computed.into_iter().collect(),
                });
            }
        }
        for dfa in self.dfas() {
            self.check_states(dfa, &mut firsts, &mut issues);
        }

        issues.extend(
            firsts
                .left_recursive
                .into_iter()
                .map(|nt| GrammarIssue::LeftRecursion {
                    dfa: self.dfa_for(nt).name().to_string(),
                }),
        );
        issues
    }

    fn check_labels(&self, issues: &mut Vec<GrammarIssue>) {
        let mut seen: HashMap<(Symbol, Option<&str>), LabelId> = HashMap::new();
        for (id, label) in self.label_entries() {
            match seen.get(&(label.symbol(), label.text())) {
                Some(&first) => issues.push(GrammarIssue::DuplicateLabel { first, second: id }),
                None => {
                    seen.insert((label.symbol(), label.text()), id);
                }
            }
        }
    }

    fn check_states(&self, dfa: &Dfa, firsts: &mut FirstSets<'_>, issues: &mut Vec<GrammarIssue>) {
        for (index, state) in dfa.states().iter().enumerate() {
            let mut arc_labels = BTreeSet::new();
            let mut owners: BTreeMap<LabelId, LabelId> = BTreeMap::new();
            for arc in state.arcs() {
                if !arc_labels.insert(arc.label) {
                    issues.push(GrammarIssue::DuplicateArc {
                        dfa: dfa.name().to_string(),
                        state: index,
                        label: arc.label,
                    });
                    continue;
                }
                if arc.label == LabelId::EMPTY {
                    continue;
                }
                for start in firsts.of_label(arc.label) {
                    if let Some(&other) = owners.get(&start) {
                        issues.push(GrammarIssue::AmbiguousArcs {
                            dfa: dfa.name().to_string(),
                            state: index,
                            label: start,
                            arcs: (other, arc.label),
                        });
                    } else {
                        owners.insert(start, arc.label);
                    }
                }
            }
        }
    }
}

/// Memoized FIRST computation over state 0 arcs.
struct FirstSets<'g> {
    grammar: &'g Grammar,
    done: HashMap<NonterminalId, BTreeSet<LabelId>>,
    in_progress: BTreeSet<NonterminalId>,
    left_recursive: BTreeSet<NonterminalId>,
}

impl<'g> FirstSets<'g> {
    fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            done: HashMap::new(),
            in_progress: BTreeSet::new(),
            left_recursive: BTreeSet::new(),
        }
    }

    /// Terminal labels that can start a match of `label`.
    fn of_label(&mut self, label: LabelId) -> BTreeSet<LabelId> {
        match self.grammar.label_at(label).symbol() {
            Symbol::Nonterminal(nt) => self.get(nt),
            Symbol::Terminal(_) => BTreeSet::from([label]),
        }
    }

    fn get(&mut self, nt: NonterminalId) -> BTreeSet<LabelId> {
        if let Some(first) = self.done.get(&nt) {
            return first.clone();
        }
        if !self.in_progress.insert(nt) {
            self.left_recursive.insert(nt);
            return BTreeSet::new();
        }
        let mut first = BTreeSet::new();
        let grammar = self.grammar;
        if let Some(initial) = grammar.dfa_for(nt).states().first() {
            for arc in initial.arcs() {
                if arc.label != LabelId::EMPTY {
                    first.extend(self.of_label(arc.label));
                }
            }
        }
        self.in_progress.remove(&nt);
        self.done.insert(nt, first.clone());
        first
    }
}
