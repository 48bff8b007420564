use hackasm::{assemble, assemble_str, error::Error, symbol::Kind};

const MAX: &str = "\
// Computes R2 = max(R0, R1)
   @R0
   D=M              // D = first number
   @R1
   D=D-M            // D = first number - second number
   @OUTPUT_FIRST
   D;JGT            // if D>0 (first is greater) goto output_first
   @R1
   D=M              // D = second number
   @OUTPUT_D
   0;JMP            // goto output_d
(OUTPUT_FIRST)
   @R0
   D=M              // D = first number
(OUTPUT_D)
   @R2
   M=D              // M[2] = D (greatest number)
(INFINITE_LOOP)
   @INFINITE_LOOP
   0;JMP            // infinite loop
";

const MAX_HACK: [&str; 16] = [
    "0000000000000000",
    "1111110000010000",
    "0000000000000001",
    "1111010011010000",
    "0000000000001010",
    "1110001100000001",
    "0000000000000001",
    "1111110000010000",
    "0000000000001100",
    "1110101010000111",
    "0000000000000000",
    "1111110000010000",
    "0000000000000010",
    "1110001100001000",
    "0000000000001110",
    "1110101010000111",
];

#[test]
fn add() {
    let raw = ["@2", "D=A", "@3", "D=D+A", "@0", "M=D"];
    let program = assemble(&raw).unwrap();
    assert_eq!(program.len(), 6);
    assert_eq!(
        program.to_text(),
        [
            "0000000000000010",
            "1110110000010000",
            "0000000000000011",
            "1110000010010000",
            "0000000000000000",
            "1110001100001000",
        ]
        .join("\n")
    );
}

#[test]
fn max_with_labels() {
    let text = assemble_str(MAX).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), MAX_HACK);
}

#[test]
fn deterministic() {
    assert_eq!(assemble_str(MAX).unwrap(), assemble_str(MAX).unwrap());
}

#[test]
fn line_count_excludes_comments_blanks_labels() {
    let raw = [
        "// comment",
        "",
        "(START)",
        "@i",
        "   ",
        "M=1 // i = 1",
        "(LOOP)",
        "@LOOP",
        "0;JMP",
    ];
    let program = assemble(&raw).unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(
        program.insts.iter().map(|(line, _)| line.idx).collect::<Vec<_>>(),
        vec![3, 5, 7, 8]
    );
}

#[test]
fn literal_addresses() {
    assert_eq!(assemble_str("@0").unwrap(), "0000000000000000");
    assert_eq!(assemble_str("@3").unwrap(), "0000000000000011");
    assert_eq!(assemble_str("@32767").unwrap(), "0111111111111111");
}

#[test]
fn variable_allocation_order() {
    let raw = [
        "@first", "M=0", "@second", "M=0", "@R5", "D=M", "@LOOP", "(LOOP)", "@first",
        "@third", "@second",
    ];
    let program = assemble(&raw).unwrap();
    let words: Vec<u16> = program.insts.iter().map(|(_, i)| i.to_bin()).collect();
    assert_eq!(words[0], 16);
    assert_eq!(words[2], 17);
    assert_eq!(words[4], 5);
    assert_eq!(words[6], 7);
    assert_eq!(words[7], 16);
    assert_eq!(words[8], 18);
    assert_eq!(words[9], 17);

    assert_eq!(program.symbols.get("first"), Some((Kind::Variable, 16)));
    assert_eq!(program.symbols.get("third"), Some((Kind::Variable, 18)));
    assert_eq!(program.symbols.get("LOOP"), Some((Kind::Label, 7)));
}

#[test]
fn label_shadows_predefined() {
    let raw = ["@SCREEN", "(SCREEN)", "@SCREEN"];
    let text = assemble(&raw).unwrap().to_text();
    assert_eq!(text, "0000000000000001\n0000000000000001");
}

#[test]
fn duplicate_label_warns_and_last_wins() {
    let raw = ["(X)", "@1", "(X)", "@X"];
    let program = assemble(&raw).unwrap();
    assert_eq!(program.warnings.len(), 1);
    assert_eq!(program.insts[1].1.to_bin(), 1);
}

#[test]
fn unknown_comp_aborts() {
    let raw = ["@1", "D=A", "D=XYZ", "M=D"];
    let diag = assemble(&raw).unwrap_err();
    assert_eq!(diag.line_idx, 2);
    assert!(matches!(diag.error, Error::UnknownComp(ref s) if s == "XYZ"));
}

#[test]
fn out_of_range_aborts() {
    let diag = assemble(&["@32768"]).unwrap_err();
    assert!(matches!(diag.error, Error::AddressOutOfRange(_)));
    let diag = assemble(&["@-3"]).unwrap_err();
    assert!(matches!(diag.error, Error::AddressOutOfRange(_)));
}

#[test]
fn syntax_error_aborts() {
    let diag = assemble(&["@1", "(OPEN", "D=A"]).unwrap_err();
    assert_eq!(diag.line_idx, 1);
    assert!(matches!(diag.error, Error::Syntax(_)));
}

#[test]
fn empty_source() {
    let program = assemble(&["// nothing", ""]).unwrap();
    assert!(program.is_empty());
    assert_eq!(program.to_text(), "");
}

#[test]
fn any_parenthesised_name_is_a_label() {
    let program = assemble(&["(1X)", "@5", "( X )", "D=A"]).unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program.to_text(), "0000000000000101\n1110110000010000");
    assert_eq!(assemble_str("(1X)").unwrap(), "");
}

fn variables(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("@v{i}")).collect()
}

#[test]
fn variables_fill_address_space() {
    // 16..=32767 holds exactly 32752 variables
    let src = variables(32752);
    let raw: Vec<&str> = src.iter().map(String::as_str).collect();
    let program = assemble(&raw).unwrap();
    assert_eq!(program.len(), 32752);
    assert_eq!(program.insts[32751].1.to_bin(), 32767);
    assert_eq!(program.symbols.get("v32751"), Some((Kind::Variable, 32767)));
}

#[test]
fn variable_beyond_address_space_aborts() {
    let src = variables(32753);
    let raw: Vec<&str> = src.iter().map(String::as_str).collect();
    let diag = assemble(&raw).unwrap_err();
    assert_eq!(diag.line_idx, 32752);
    assert!(matches!(diag.error, Error::AddressOutOfRange(ref s) if s == "v32752"));
}

#[test]
fn literal_keeps_source_text() {
    let program = assemble(&["@007"]).unwrap();
    assert_eq!(program.to_text(), "0000000000000111");
    assert_eq!(program.symbols.get("007"), Some((Kind::Literal, 7)));
}
