use bimap::BiMap;
use num_enum::IntoPrimitive;
use once_cell::sync::Lazy;
use std::fmt::Display;

/// ALU computation of a C-instruction.
///
/// The discriminant is the 7-bit `a c1..c6` field: the addressing-mode flag
/// (0 reads `A`, 1 reads `M`) followed by the six ALU control bits.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, IntoPrimitive)]
#[repr(u8)]
pub enum Comp {
    Zero = 0b0_101010,
    One = 0b0_111111,
    NegOne = 0b0_111010,
    D = 0b0_001100,
    A = 0b0_110000,
    M = 0b1_110000,
    NotD = 0b0_001101,
    NotA = 0b0_110001,
    NotM = 0b1_110001,
    NegD = 0b0_001111,
    NegA = 0b0_110011,
    NegM = 0b1_110011,
    DPlusOne = 0b0_011111,
    APlusOne = 0b0_110111,
    MPlusOne = 0b1_110111,
    DMinusOne = 0b0_001110,
    AMinusOne = 0b0_110010,
    MMinusOne = 0b1_110010,
    DPlusA = 0b0_000010,
    DPlusM = 0b1_000010,
    DMinusA = 0b0_010011,
    DMinusM = 0b1_010011,
    AMinusD = 0b0_000111,
    MMinusD = 0b1_000111,
    DAndA = 0b0_000000,
    DAndM = 0b1_000000,
    DOrA = 0b0_010101,
    DOrM = 0b1_010101,
}

static COMP_MAP: Lazy<BiMap<&'static str, Comp>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, Comp> = BiMap::new();
    map.insert("0", Comp::Zero);
    map.insert("1", Comp::One);
    map.insert("-1", Comp::NegOne);
    map.insert("D", Comp::D);
    map.insert("A", Comp::A);
    map.insert("M", Comp::M);
    map.insert("!D", Comp::NotD);
    map.insert("!A", Comp::NotA);
    map.insert("!M", Comp::NotM);
    map.insert("-D", Comp::NegD);
    map.insert("-A", Comp::NegA);
    map.insert("-M", Comp::NegM);
    map.insert("D+1", Comp::DPlusOne);
    map.insert("A+1", Comp::APlusOne);
    map.insert("M+1", Comp::MPlusOne);
    map.insert("D-1", Comp::DMinusOne);
    map.insert("A-1", Comp::AMinusOne);
    map.insert("M-1", Comp::MMinusOne);
    map.insert("D+A", Comp::DPlusA);
    map.insert("D+M", Comp::DPlusM);
    map.insert("D-A", Comp::DMinusA);
    map.insert("D-M", Comp::DMinusM);
    map.insert("A-D", Comp::AMinusD);
    map.insert("M-D", Comp::MMinusD);
    map.insert("D&A", Comp::DAndA);
    map.insert("D&M", Comp::DAndM);
    map.insert("D|A", Comp::DOrA);
    map.insert("D|M", Comp::DOrM);
    map
});

impl Comp {
    pub fn parse(s: &str) -> Option<Comp> {
        COMP_MAP.get_by_left(s).copied()
    }

    pub fn format(&self) -> &'static str {
        // Every variant is registered in COMP_MAP.
        COMP_MAP.get_by_right(self).copied().unwrap_or("?")
    }

    /// Addressing-mode flag: true when the computation reads `M`.
    pub fn a_bit(&self) -> bool {
        u8::from(*self) & 0b1_000000 != 0
    }

    /// The six ALU control bits `c1..c6`.
    pub fn c_bits(&self) -> u16 {
        (u8::from(*self) & 0b0_111111) as u16
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
