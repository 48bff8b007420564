use crate::{comp::Comp, dest::Dest, jump::Jump, symbol::ADDR_MAX};

use color_print::cformat;

/// A resolved machine instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `0vvv vvvv vvvv vvvv`
    A(u16),
    /// `111a cccc ccdd djjj`
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    /// Builds an A-instruction, or `None` when the address needs more than 15 bits.
    pub fn addr(value: u16) -> Option<Inst> {
        if value <= ADDR_MAX {
            Some(Inst::A(value))
        } else {
            None
        }
    }

    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(value) => value & ADDR_MAX,
            Inst::C { dest, comp, jump } => {
                0b111_u16 << 13
                    | (comp.a_bit() as u16) << 12
                    | comp.c_bits() << 6
                    | dest.code() << 3
                    | jump.code()
            }
        }
    }

    pub fn to_bin_string(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<y>@{}</>", value),
            Inst::C { dest, comp, jump } => {
                let dest = if dest.is_null() {
                    String::new()
                } else {
                    cformat!("<blue>{}</>=", dest)
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    _ => cformat!(";<g>{}</>", jump),
                };
                cformat!("{}<red>{}</>{}", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(dest: &str, comp: &str, jump: &str) -> Inst {
        Inst::C {
            dest: Dest::parse(dest).unwrap(),
            comp: Comp::parse(comp).unwrap(),
            jump: Jump::parse(jump).unwrap(),
        }
    }

    #[test]
    fn a_instruction() {
        assert_eq!(Inst::A(0).to_bin_string(), "0000000000000000");
        assert_eq!(Inst::A(3).to_bin_string(), "0000000000000011");
        assert_eq!(Inst::A(ADDR_MAX).to_bin_string(), "0111111111111111");
        assert_eq!(Inst::addr(0x8000), None);
    }

    #[test]
    fn c_instruction() {
        assert_eq!(c("D", "A", "null").to_bin_string(), "1110110000010000");
        assert_eq!(c("D", "D+A", "null").to_bin_string(), "1110000010010000");
        assert_eq!(c("M", "D", "null").to_bin_string(), "1110001100001000");
        assert_eq!(c("null", "0", "JMP").to_bin_string(), "1110101010000111");
        assert_eq!(c("AMD", "M+1", "JGT").to_bin_string(), "1111110111111001");
    }
}
