use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn code(&self) -> u16 {
        u8::from(*self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("null"), Some(Jump::Null));
    assert_eq!(Jump::parse("JMP").map(|j| j.code()), Some(0b111));
    assert_eq!(Jump::parse("JGT").map(|j| j.code()), Some(0b001));
    assert_eq!(Jump::parse("JLE").map(|j| j.code()), Some(0b110));
    assert_eq!(Jump::parse("jmp"), None);
    assert_eq!(Jump::parse("JXX"), None);
    assert_eq!(Jump::default().code(), 0);
    assert_eq!(Jump::JNE.to_string(), "JNE");
}
