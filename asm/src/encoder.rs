use arch::{inst::Inst, symbol::VAR_BASE};

use crate::{
    error::Error,
    parser::{Code, Operand},
    symbol::{Kind, SymbolTable},
};

/// Second pass. Owns the symbol table while variables are being allocated.
#[derive(Debug)]
pub struct Encoder {
    table: SymbolTable,
    next_var: usize,
}

impl Encoder {
    pub fn new(table: SymbolTable) -> Self {
        Encoder {
            table,
            next_var: VAR_BASE as usize,
        }
    }

    pub fn encode(&mut self, code: &Code) -> Result<Inst, Error> {
        match code {
            Code::A(operand) => {
                let addr = self.resolve(operand);
                u16::try_from(addr)
                    .ok()
                    .and_then(Inst::addr)
                    .ok_or_else(|| Error::AddressOutOfRange(operand.key()))
            }
            Code::C { dest, comp, jump } => Ok(Inst::C {
                dest: *dest,
                comp: *comp,
                jump: *jump,
            }),
        }
    }

    /// Address of an A-instruction operand. An unseen symbol becomes a variable
    /// at the next free address.
    fn resolve(&mut self, operand: &Operand) -> usize {
        match operand {
            Operand::Literal(v, _) => {
                let addr = *v as usize;
                self.table.insert(operand.key(), Kind::Literal, addr);
                addr
            }
            Operand::Symbol(name) => match self.table.get_val(name) {
                Some(addr) => addr,
                None => {
                    let addr = self.next_var;
                    self.table.insert(name.clone(), Kind::Variable, addr);
                    self.next_var += 1;
                    addr
                }
            },
        }
    }

    pub fn finish(self) -> SymbolTable {
        self.table
    }
}
