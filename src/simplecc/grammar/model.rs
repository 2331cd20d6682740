//! Labels, arcs, DFA states, DFAs and the grammar aggregate
//!
//! All types are read-only once built. A [Grammar] is only produced from
//! [GrammarTables](super::tables::GrammarTables) after reference checks, so label ids,
//! arc targets and nonterminal lookups stored in it are always in range.

use super::symbol::{NonterminalId, Symbol, TokenKind};
use std::fmt;

/// Index into the label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(pub(crate) u16);

impl LabelId {
    /// The reserved EMPTY label. Classification never returns it.
    pub const EMPTY: LabelId = LabelId(0);

    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub(crate) symbol: Symbol,
    pub(crate) text: Option<String>,
}

impl Label {
    pub fn new(symbol: Symbol, text: Option<String>) -> Self {
        Self { symbol, text }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Literal text for keyword and operator labels.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// True for a label that matches every token of `kind`: no text, or empty text.
    pub fn is_generic(&self, kind: TokenKind) -> bool {
        self.text.as_deref().map_or(true, str::is_empty) && self.symbol == Symbol::Terminal(kind)
    }

    /// True for a keyword/operator label spelled `text`. Labels with empty text never
    /// match.
    pub fn is_literal(&self, text: &str) -> bool {
        !text.is_empty() && self.text.as_deref() == Some(text)
    }
}

/// A transition out of a DFA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub label: LabelId,
    pub target: usize,
}

impl Arc {
    pub fn new(label: LabelId, target: usize) -> Self {
        Self { label, target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    pub(crate) arcs: Vec<Arc>,
    pub(crate) accepting: bool,
}

impl DfaState {
    pub fn new(arcs: Vec<Arc>, accepting: bool) -> Self {
        Self { arcs, accepting }
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Accepting with nothing but the `(EMPTY, self)` arc left: the derivation cannot
    /// be extended by another token.
    pub fn is_accept_only(&self) -> bool {
        self.accepting && self.arcs.len() == 1
    }
}

/// The automaton deriving one nonterminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    pub(crate) symbol: NonterminalId,
    pub(crate) name: String,
    pub(crate) states: Vec<DfaState>,
    /// Sorted, deduplicated.
    pub(crate) first: Vec<LabelId>,
}

impl Dfa {
    pub fn new(
        symbol: NonterminalId,
        name: impl Into<String>,
        states: Vec<DfaState>,
        mut first: Vec<LabelId>,
    ) -> Self {
        first.sort_unstable();
        first.dedup();
        Self {
            symbol,
            name: name.into(),
            states,
            first,
        }
    }

    pub fn symbol(&self) -> NonterminalId {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn state(&self, index: usize) -> &DfaState {
        &self.states[index]
    }

    pub fn first(&self) -> &[LabelId] {
        &self.first
    }

    /// Whether `label` can begin a derivation of this nonterminal.
    pub fn first_contains(&self, label: LabelId) -> bool {
        self.first.binary_search(&label).is_ok()
    }
}

/// Start symbol, one DFA per nonterminal and the label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub(crate) name: String,
    pub(crate) start: NonterminalId,
    /// Indexed by [NonterminalId::index].
    pub(crate) dfas: Vec<Dfa>,
    pub(crate) labels: Vec<Label>,
}

impl Grammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> NonterminalId {
        self.start
    }

    pub fn dfas(&self) -> &[Dfa] {
        &self.dfas
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The DFA deriving `nt`.
    ///
    /// Every nonterminal referenced by this grammar's labels has a DFA; passing a
    /// nonterminal taken from another grammar panics if it is out of range.
    pub fn dfa_for(&self, nt: NonterminalId) -> &Dfa {
        &self.dfas[nt.index()]
    }

    pub fn start_dfa(&self) -> &Dfa {
        self.dfa_for(self.start)
    }

    pub fn label_at(&self, id: LabelId) -> &Label {
        &self.labels[id.index()]
    }

    /// Labels that classification may return (everything but EMPTY).
    pub fn label_entries(&self) -> impl Iterator<Item = (LabelId, &Label)> {
        self.labels
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, label)| (LabelId(index as u16), label))
    }

    /// Look up a nonterminal by its rule name.
    pub fn nonterminal(&self, name: &str) -> Option<NonterminalId> {
        self.dfas.iter().find(|dfa| dfa.name == name).map(Dfa::symbol)
    }

    pub fn symbol_name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::Terminal(kind) => kind.name(),
            Symbol::Nonterminal(nt) => self
                .dfas
                .get(nt.index())
                .map(|dfa| dfa.name.as_str())
                .unwrap_or("<unknown>"),
        }
    }

    /// Human readable form of a label: keyword/operator text quoted, otherwise the
    /// symbol name.
    pub fn describe_label(&self, id: LabelId) -> String {
        if id == LabelId::EMPTY {
            return "EMPTY".to_string();
        }
        let label = self.label_at(id);
        match label.text() {
            Some(text) => format!("'{}'", text),
            None => self.symbol_name(label.symbol()).to_string(),
        }
    }
}
