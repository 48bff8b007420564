use std::fmt::Display;

/// Registers written by a C-instruction. Bit order is A, D, M.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dest {
    pub a: bool,
    pub d: bool,
    pub m: bool,
}

impl Dest {
    pub const NULL: Dest = Dest {
        a: false,
        d: false,
        m: false,
    };

    /// Accepts any combination of `A`, `D`, `M` with each letter at most once.
    /// `null` and the empty mnemonic mean no destination.
    pub fn parse(s: &str) -> Option<Dest> {
        if s == "null" {
            return Some(Dest::NULL);
        }
        let mut dest = Dest::NULL;
        for ch in s.chars() {
            let flag = match ch {
                'A' => &mut dest.a,
                'D' => &mut dest.d,
                'M' => &mut dest.m,
                _ => return None,
            };
            if *flag {
                return None;
            }
            *flag = true;
        }
        Some(dest)
    }

    pub fn code(&self) -> u16 {
        (self.a as u16) << 2 | (self.d as u16) << 1 | self.m as u16
    }

    pub fn is_null(&self) -> bool {
        *self == Dest::NULL
    }
}

impl Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null");
        }
        for (set, ch) in [(self.a, 'A'), (self.d, 'D'), (self.m, 'M')] {
            if set {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[test]
fn test() {
    let code = |s: &str| Dest::parse(s).map(|d| d.code());
    assert_eq!(code(""), Some(0b000));
    assert_eq!(code("null"), Some(0b000));
    assert_eq!(code("M"), Some(0b001));
    assert_eq!(code("D"), Some(0b010));
    assert_eq!(code("MD"), Some(0b011));
    assert_eq!(code("DM"), Some(0b011));
    assert_eq!(code("A"), Some(0b100));
    assert_eq!(code("AM"), Some(0b101));
    assert_eq!(code("AD"), Some(0b110));
    assert_eq!(code("AMD"), Some(0b111));
    assert_eq!(code("MM"), None);
    assert_eq!(code("X"), None);
    assert_eq!(Dest::parse("MDA").map(|d| d.to_string()), Some("ADM".into()));
}
