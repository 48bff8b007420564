pub mod dump;
pub mod encoder;
pub mod error;
pub mod label;
pub mod normalize;
pub mod parser;
pub mod symbol;

use arch::inst::Inst;

use error::{Diag, Warning};
use normalize::Line;
use symbol::SymbolTable;

/// A fully translated program.
#[derive(Debug)]
pub struct Program<'a> {
    /// Encoded instructions with the source line each came from
    pub insts: Vec<(Line<'a>, Inst)>,
    pub symbols: SymbolTable,
    pub warnings: Vec<Warning>,
}

impl Program<'_> {
    /// Body of the `.hack` file: one 16-character word per line.
    pub fn to_text(&self) -> String {
        self.insts
            .iter()
            .map(|(_, inst)| inst.to_bin_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.insts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }
}

/// Translate raw source lines. Any error aborts the whole translation.
pub fn assemble<'a>(raw: &[&'a str]) -> Result<Program<'a>, Diag> {
    let lines = normalize::normalize(raw);
    let resolved = label::resolve(&lines)?;
    let table = SymbolTable::with_labels(&resolved.labels);

    let mut encoder = encoder::Encoder::new(table);
    let mut insts = Vec::with_capacity(resolved.code.len());
    for (line, code) in &resolved.code {
        let inst = encoder
            .encode(code)
            .map_err(|e| Diag::new(line.idx, e))?;
        insts.push((*line, inst));
    }

    Ok(Program {
        insts,
        symbols: encoder.finish(),
        warnings: resolved.warnings,
    })
}

/// Convenience wrapper over [`assemble`] for a whole source text.
pub fn assemble_str(source: &str) -> Result<String, Diag> {
    let raw: Vec<&str> = source.lines().collect();
    assemble(&raw).map(|program| program.to_text())
}
