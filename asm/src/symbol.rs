use arch::symbol::PREDEFINED;
use indexmap::IndexMap;

use crate::label::Labels;

/// Where a symbol's binding came from. Only the address matters for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Predefined,
    Label,
    Variable,
    Literal,
}

#[derive(Debug, Clone)]
pub struct SymbolTable(IndexMap<String, (Kind, usize)>);

impl SymbolTable {
    /// Table holding only the predefined symbols.
    pub fn new() -> Self {
        SymbolTable(
            PREDEFINED
                .iter()
                .map(|(name, addr)| (name.to_string(), (Kind::Predefined, *addr as usize)))
                .collect(),
        )
    }

    /// Predefined symbols with the labels applied on top. A label named like a
    /// predefined symbol replaces it.
    pub fn with_labels(labels: &Labels) -> Self {
        let mut table = SymbolTable::new();
        for (name, index) in labels.iter() {
            table.insert(name.to_string(), Kind::Label, index);
        }
        table
    }

    pub fn insert(&mut self, name: String, kind: Kind, addr: usize) -> Option<(Kind, usize)> {
        self.0.insert(name, (kind, addr))
    }

    pub fn get(&self, name: &str) -> Option<(Kind, usize)> {
        self.0.get(name).copied()
    }

    pub fn get_val(&self, name: &str) -> Option<usize> {
        self.get(name).map(|(_, addr)| addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Kind, usize)> {
        self.0
            .iter()
            .map(|(name, (kind, addr))| (name.as_str(), *kind, *addr))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
