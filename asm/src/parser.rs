use arch::{comp::Comp, dest::Dest, jump::Jump, symbol::ADDR_MAX};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `(NAME)`
    Label(String),
    Code(Code),
}

impl Stmt {
    pub fn parse(text: &str) -> Result<Stmt, Error> {
        if let Some(body) = text.strip_prefix('(') {
            return match body.strip_suffix(')') {
                // The name is taken verbatim. Only `@` operands are checked as symbols.
                Some(name) if !name.is_empty() => Ok(Stmt::Label(name.to_string())),
                _ => Err(Error::Syntax(text.to_string())),
            };
        }
        Code::parse(text).map(Stmt::Code)
    }
}

// ----------------------------------------------------------------------------
// Instruction

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    /// `@value`
    A(Operand),
    /// `dest=comp;jump`
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Code {
    pub fn parse(text: &str) -> Result<Code, Error> {
        match text.strip_prefix('@') {
            Some(operand) => Operand::parse(operand).map(Code::A),
            None => Code::parse_compute(text),
        }
    }

    fn parse_compute(text: &str) -> Result<Code, Error> {
        let syntax = || Error::Syntax(text.to_string());

        // Each separator may appear at most once and never next to an empty field.
        let field = |s: &str| -> Result<String, Error> {
            let s = s.trim();
            if s.is_empty() {
                Err(syntax())
            } else {
                Ok(s.to_string())
            }
        };

        let (dest, rest) = match text.split_once('=') {
            Some((dest, rest)) => (Some(field(dest)?), rest),
            None => (None, text),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (field(comp)?, Some(field(jump)?)),
            None => (field(rest)?, None),
        };
        let stray = |s: Option<&str>| s.is_some_and(|s| s.contains('=') || s.contains(';'));
        if stray(dest.as_deref()) || stray(Some(comp.as_str())) || stray(jump.as_deref()) {
            return Err(syntax());
        }

        let dest = match dest {
            Some(dest) => Dest::parse(&dest).ok_or(Error::UnknownDest(dest))?,
            None => Dest::NULL,
        };
        let comp = Comp::parse(&comp).ok_or(Error::UnknownComp(comp))?;
        let jump = match jump {
            Some(jump) => Jump::parse(&jump).ok_or(Error::UnknownJump(jump))?,
            None => Jump::Null,
        };
        Ok(Code::C { dest, comp, jump })
    }
}

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Value and the source text it was written as
    Literal(u16, String),
    Symbol(String),
}

impl Operand {
    fn parse(s: &str) -> Result<Operand, Error> {
        if let Some(digits) = s.strip_prefix('-') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::AddressOutOfRange(s.to_string()));
            }
        }
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            if !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::Syntax(format!("@{}", s)));
            }
            return match s.parse::<u16>() {
                Ok(v) if v <= ADDR_MAX => Ok(Operand::Literal(v, s.to_string())),
                _ => Err(Error::AddressOutOfRange(s.to_string())),
            };
        }
        if is_symbol(s) {
            Ok(Operand::Symbol(s.to_string()))
        } else {
            Err(Error::Syntax(format!("@{}", s)))
        }
    }

    /// Text under which the operand is bound in the symbol table.
    pub fn key(&self) -> String {
        match self {
            Operand::Literal(_, text) => text.clone(),
            Operand::Symbol(s) => s.clone(),
        }
    }
}

/// Letters, digits, `_`, `.`, `$` and `:`, not starting with a digit.
fn is_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if !head.is_ascii_digit() && is_symbol_char(head) => {
            chars.all(is_symbol_char)
        }
        _ => false,
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}
