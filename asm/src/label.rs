use indexmap::IndexMap;

use crate::{
    error::{Diag, Warning},
    normalize::Line,
    parser::{Code, Stmt},
};

/// Label name -> (line_idx of the declaration, index of the instruction it names)
#[derive(Debug, Default)]
pub struct Labels(IndexMap<String, (usize, usize)>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    pub fn insert(
        &mut self,
        name: String,
        line_idx: usize,
        index: usize,
    ) -> Option<(usize, usize)> {
        self.0.insert(name, (line_idx, index))
    }

    pub fn get_val(&self, name: &str) -> Option<usize> {
        self.0.get(name).map(|(_, index)| *index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, (_, index))| (name.as_str(), *index))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Output of the first pass.
#[derive(Debug)]
pub struct Resolved<'a> {
    /// Label-free instructions, in source order
    pub code: Vec<(Line<'a>, Code)>,
    pub labels: Labels,
    pub warnings: Vec<Warning>,
}

/// First pass: drop label declarations and bind each label to the index of
/// the instruction that follows it in the label-free stream.
pub fn resolve<'a>(lines: &[Line<'a>]) -> Result<Resolved<'a>, Diag> {
    let mut code = vec![];
    let mut labels = Labels::new();
    let mut warnings = vec![];

    for line in lines {
        match Stmt::parse(line.text).map_err(|e| Diag::new(line.idx, e))? {
            Stmt::Label(name) => {
                // code.len() is the number of instructions emitted so far
                if let Some((prev_idx, _)) = labels.insert(name.clone(), line.idx, code.len()) {
                    warnings.push(Warning::RedefinedLabel {
                        name,
                        line_idx: line.idx,
                        prev_idx,
                    });
                }
            }
            Stmt::Code(c) => code.push((*line, c)),
        }
    }

    Ok(Resolved {
        code,
        labels,
        warnings,
    })
}
