//! Grammar table loading
//!
//!     Grammar tables are produced by an external generator. They use the generator's
//!     raw integer encoding: one id space for terminals and nonterminals split at a
//!     fixed offset, label indices, state indices. [GrammarTables] is the serde mirror
//!     of that encoding; converting it into a [Grammar] is the only place raw ids are
//!     interpreted.
//!
//!     The offset is stored in the tables and must equal [NT_OFFSET]; a generator and a
//!     parser disagreeing on it would otherwise silently read large terminal ids as
//!     nonterminals.
//!
//!     Shape (JSON):
//!
//!         {
//!           "name": "simplecc",
//!           "start": 256,
//!           "nonterminal_offset": 256,
//!           "labels": [{"symbol": 0, "text": "EMPTY"}, {"symbol": 3, "text": null}, ...],
//!           "dfas": [{"symbol": 256, "name": "program",
//!                     "states": [{"arcs": [[1, 1], [2, 0]], "accepting": false}, ...],
//!                     "first": [1, 4, 5]}, ...]
//!         }

use super::model::{Arc, Dfa, DfaState, Grammar, Label, LabelId};
use super::symbol::{NonterminalId, Symbol, NT_OFFSET};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Label ids are `u16`.
const MAX_LABELS: usize = u16::MAX as usize + 1;

/// Raw grammar tables as written by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarTables {
    #[serde(default)]
    pub name: Option<String>,
    pub start: u16,
    pub nonterminal_offset: u16,
    /// Terminal names, informational only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terminals: Vec<String>,
    pub labels: Vec<RawLabel>,
    pub dfas: Vec<RawDfa>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLabel {
    pub symbol: u16,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDfa {
    pub symbol: u16,
    pub name: String,
    pub states: Vec<RawState>,
    pub first: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawState {
    /// `(label, target state)` pairs.
    pub arcs: Vec<(u16, usize)>,
    pub accepting: bool,
}

/// Errors raised while reading or converting grammar tables.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("cannot read grammar tables {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON grammar tables: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML grammar tables: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported grammar table format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("nonterminal offset mismatch: tables use {found}, parser expects {expected}")]
    OffsetMismatch { expected: u16, found: u16 },
    #[error("unknown terminal id {0}")]
    UnknownTerminal(u16),
    #[error("symbol {0} has no DFA")]
    UnknownNonterminal(u16),
    #[error("start symbol {0} is not a nonterminal")]
    StartNotNonterminal(u16),
    #[error("DFA for symbol {0} defined twice")]
    DuplicateDfa(u16),
    #[error("DFAs must cover consecutive symbols from the offset; symbol {0} is missing")]
    MissingDfa(u16),
    #[error("DFA '{0}' has no states")]
    EmptyDfa(String),
    #[error("label table must start with the reserved EMPTY label")]
    MissingEmptyLabel,
    #[error("DFA '{dfa}' state {state} refers to label {label}, table has {len}")]
    LabelOutOfRange {
        dfa: String,
        state: usize,
        label: u16,
        len: usize,
    },
    #[error("DFA '{dfa}' state {state} targets state {target}, DFA has {len}")]
    TargetOutOfRange {
        dfa: String,
        state: usize,
        target: usize,
        len: usize,
    },
    #[error("FIRST set of DFA '{dfa}' refers to label {label}, table has {len}")]
    FirstOutOfRange { dfa: String, label: u16, len: usize },
    #[error("label table has {0} entries, at most {max} are addressable", max = MAX_LABELS)]
    TooManyLabels(usize),
}

impl Grammar {
    pub fn from_json(source: &str) -> Result<Self, GrammarError> {
        let tables: GrammarTables = serde_json::from_str(source)?;
        Grammar::try_from(tables)
    }

    pub fn from_yaml(source: &str) -> Result<Self, GrammarError> {
        let tables: GrammarTables = serde_yaml::from_str(source)?;
        Grammar::try_from(tables)
    }

    /// Load tables from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GrammarError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let read = || {
            fs::read_to_string(path).map_err(|source| GrammarError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match extension.as_str() {
            "json" => Grammar::from_json(&read()?),
            "yaml" | "yml" => Grammar::from_yaml(&read()?),
            other => Err(GrammarError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Back to the generator's raw encoding.
    pub fn to_tables(&self) -> GrammarTables {
        GrammarTables {
            name: Some(self.name.clone()),
            start: self.start.raw(),
            nonterminal_offset: NT_OFFSET,
            terminals: Vec::new(),
            labels: self
                .labels
                .iter()
                .map(|label| RawLabel {
                    symbol: label.symbol.raw(),
                    text: label.text.clone(),
                })
                .collect(),
            dfas: self
                .dfas
                .iter()
                .map(|dfa| RawDfa {
                    symbol: dfa.symbol.raw(),
                    name: dfa.name.clone(),
                    states: dfa
                        .states
                        .iter()
                        .map(|state| RawState {
                            arcs: state
                                .arcs
                                .iter()
                                .map(|arc| (arc.label.raw(), arc.target))
                                .collect(),
                            accepting: state.accepting,
                        })
                        .collect(),
                    first: dfa.first.iter().map(|label| label.raw()).collect(),
                })
                .collect(),
        }
    }
}

impl TryFrom<GrammarTables> for Grammar {
    type Error = GrammarError;

    fn try_from(tables: GrammarTables) -> Result<Self, Self::Error> {
        if tables.nonterminal_offset != NT_OFFSET {
            return Err(GrammarError::OffsetMismatch {
                expected: NT_OFFSET,
                found: tables.nonterminal_offset,
            });
        }

        // DFAs may be listed in any order but must cover offset..offset+n.
        let mut slots: Vec<Option<RawDfa>> = vec![None; tables.dfas.len()];
        for dfa in tables.dfas {
            let nt = NonterminalId::new(dfa.symbol)
                .ok_or(GrammarError::UnknownNonterminal(dfa.symbol))?;
            let slot = slots
                .get_mut(nt.index())
                .ok_or(GrammarError::UnknownNonterminal(dfa.symbol))?;
            if slot.is_some() {
                return Err(GrammarError::DuplicateDfa(dfa.symbol));
            }
            *slot = Some(dfa);
        }
        let dfa_count = slots.len();
        let resolve = |raw: u16| -> Result<Symbol, GrammarError> {
            match Symbol::from_raw(raw) {
                Some(Symbol::Nonterminal(nt)) if nt.index() >= dfa_count => {
                    Err(GrammarError::UnknownNonterminal(raw))
                }
                Some(symbol) => Ok(symbol),
                None => Err(GrammarError::UnknownTerminal(raw)),
            }
        };

        let start = match resolve(tables.start) {
            Ok(Symbol::Nonterminal(nt)) => nt,
            Ok(Symbol::Terminal(_)) => return Err(GrammarError::StartNotNonterminal(tables.start)),
            Err(err) => return Err(err),
        };

        if tables.labels.is_empty() {
            return Err(GrammarError::MissingEmptyLabel);
        }
        if tables.labels.len() > MAX_LABELS {
            return Err(GrammarError::TooManyLabels(tables.labels.len()));
        }
        // An empty text is the same generic label as a missing one
        let labels = tables
            .labels
            .into_iter()
            .map(|raw| {
                let text = raw.text.filter(|text| !text.is_empty());
                Ok(Label::new(resolve(raw.symbol)?, text))
            })
            .collect::<Result<Vec<_>, GrammarError>>()?;
        let label_count = labels.len();

        let mut dfas = Vec::with_capacity(dfa_count);
        for (index, slot) in slots.into_iter().enumerate() {
            let symbol = NonterminalId::from_index(index)
                .ok_or(GrammarError::MissingDfa(NT_OFFSET))?;
            let raw = slot.ok_or(GrammarError::MissingDfa(symbol.raw()))?;
            dfas.push(convert_dfa(symbol, raw, label_count)?);
        }

        Ok(Grammar {
            name: tables.name.unwrap_or_else(|| "grammar".to_string()),
            start,
            dfas,
            labels,
        })
    }
}

fn convert_dfa(symbol: NonterminalId, raw: RawDfa, label_count: usize) -> Result<Dfa, GrammarError> {
    if raw.states.is_empty() {
        return Err(GrammarError::EmptyDfa(raw.name));
    }
    let state_count = raw.states.len();
    let label_id = |label: u16| (usize::from(label) < label_count).then(|| LabelId::new(label));

    let mut states = Vec::with_capacity(state_count);
    for (state_index, state) in raw.states.iter().enumerate() {
        let mut arcs = Vec::with_capacity(state.arcs.len());
        for &(label, target) in &state.arcs {
            let label = label_id(label).ok_or_else(|| GrammarError::LabelOutOfRange {
                dfa: raw.name.clone(),
                state: state_index,
                label,
                len: label_count,
            })?;
            if target >= state_count {
                return Err(GrammarError::TargetOutOfRange {
                    dfa: raw.name.clone(),
                    state: state_index,
                    target,
                    len: state_count,
                });
            }
            arcs.push(Arc::new(label, target));
        }
        states.push(DfaState::new(arcs, state.accepting));
    }

    let first = raw
        .first
        .iter()
        .map(|&label| {
            label_id(label).ok_or_else(|| GrammarError::FirstOutOfRange {
                dfa: raw.name.clone(),
                label,
                len: label_count,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dfa::new(symbol, raw.name, states, first))
}
