use color_print::{cformat, cprintln};

use crate::{symbol::Kind, Program};

/// Listing of every instruction next to its source line.
pub fn print_dump(program: &Program) {
    println!("-------------------------+------------------------------------------");
    for (pc, (line, inst)) in program.insts.iter().enumerate() {
        println!(
            "[{:04X}] {} | {:>4}: {}",
            pc,
            inst.to_bin_string(),
            line.idx + 1,
            inst.cformat()
        );
    }
    println!("-------------------------+------------------------------------------");
}

pub fn print_symbols(program: &Program) {
    cprintln!("<bold>Symbols</>");
    for (name, kind, addr) in program.symbols.iter() {
        let kind = match kind {
            Kind::Predefined => cformat!("<dim>predefined</>"),
            Kind::Label => cformat!("<g>label</>"),
            Kind::Variable => cformat!("<c>variable</>"),
            Kind::Literal => cformat!("<y>literal</>"),
        };
        println!("  {:<24} 0x{:04X} {}", name, addr, kind);
    }
}
