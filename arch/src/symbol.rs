/// Largest address an A-instruction can carry (15 bits).
pub const ADDR_MAX: u16 = 0x7FFF;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

/// Symbols every program starts with.
pub const PREDEFINED: [(&str, u16); 23] = [
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];

#[test]
fn test() {
    assert_eq!(SCREEN, 16384);
    assert_eq!(KBD, 24576);
    for i in 0..16 {
        let name = format!("R{i}");
        let found = PREDEFINED.iter().find(|(n, _)| *n == name);
        assert_eq!(found.map(|(_, v)| *v), Some(i));
    }
}
