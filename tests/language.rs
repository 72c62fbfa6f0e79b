use std::fs;

use algo::{
    Error, parse_program, run_with_output,
    interpreter::lexer::{Lexer, TokenKind},
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "algo"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_with_output(&source, &mut Vec::new()) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn program(declarations: &str, body: &str) -> String {
    format!("PROGRAM Test\n{declarations}\nBEGIN\n{body}\nEND\n")
}

fn output(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_with_output(src, &mut out) {
        panic!("Script failed: {e}\n{src}");
    }
    String::from_utf8(out).expect("output is UTF-8")
}

fn assert_success(src: &str) {
    output(src);
}

fn assert_failure(src: &str, message: &str) -> Error {
    match run_with_output(src, &mut Vec::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => {
            assert_eq!(e.to_string(), message);
            e
        },
    }
}

#[test]
fn demo_outputs() {
    let read = |name: &str| fs::read_to_string(format!("demos/{name}.algo")).unwrap();

    assert_eq!(output(&read("hello")), "Hello, world\n");
    assert_eq!(output(&read("arrays")),
               "[1, 4, 9, 16, 25]\n[1, 4, 9]\n[1, 4, 9, -1] 4\n");
    assert_eq!(output(&read("halving")), "Halved 7 times to 0.78125\n");
    assert_eq!(output(&read("grades")), "95 A\n81 B\n100 A\n42 C\n");
    assert_eq!(output(&read("logic")), "false true true\nname is algo with initial a\n");

    let fizzbuzz = output(&read("fizzbuzz"));
    let lines = fizzbuzz.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[..5], ["1", "2", "Fizz", "4", "Buzz"]);
    assert_eq!(lines[14], "FizzBuzz");
}

#[test]
fn runs_are_deterministic() {
    let src = fs::read_to_string("demos/fizzbuzz.algo").unwrap();
    assert_eq!(output(&src), output(&src));
}

#[test]
fn integer_division_and_promotion() {
    assert_eq!(output(&program("", "PRINT 7 / 2, -7 / 2, 7 / 2.0, 7 % 3")), "3 -3 3.5 1\n");
    assert_eq!(output(&program("", "PRINT 1.5 + 1.5, 2 * 0.25")), "3 0.5\n");
    assert_eq!(output(&program("", "PRINT 1000000000000.0 * 1000000000.0, 1.0 / 10000000.0")),
               "1e+21 1e-7\n");
    assert_eq!(output(&program("", "PRINT 9007199254740993 + 0.5, 9007199254740993 == 1.5")),
               "9007199254740992 false\n");
}

#[test]
fn exponent_is_right_associative() {
    assert_eq!(output(&program("", "PRINT 2 ^ 3 ^ 2, (2 ^ 3) ^ 2")), "512 64\n");
}

#[test]
fn arrays_are_one_based_and_bounds_checked() {
    let decl = "VARIABLES\nA : INTEGER [3]";

    assert_eq!(output(&program(decl, "LET A[1] = 5\nPRINT A")), "[5]\n");
    assert_failure(&program(decl, "PRINT A[0]"),
                   "[INTERPRETING ERROR] Index 0 is out of bounds.");
    assert_failure(&program(decl, "PRINT A[4]"),
                   "[INTERPRETING ERROR] Index 4 is out of bounds.");
    assert_failure(&program(decl, "LET A = 1"), "[INTERPRETING ERROR] Variable A is an ARRAY.");
    assert_failure(&program(decl, "PRINT A[TRUE]"),
                   "[INTERPRETING ERROR] Index must be an INT_TYPE.");
}

#[test]
fn resize_preserves_existing_values() {
    let decl = "VARIABLES\nA : INTEGER [3]";
    let fill = "LET A[1] = 1\nLET A[2] = 2\nLET A[3] = 3";

    assert_eq!(output(&program(decl, &format!("{fill}\nRESIZE A TO 2\nPRINT A"))), "[1, 2]\n");
    assert_eq!(output(&program(decl, &format!("{fill}\nRESIZE A TO 5\nPRINT A"))),
               "[1, 2, 3]\n");
    assert_failure(&program(decl, &format!("{fill}\nRESIZE A TO 5\nPRINT A[4]")),
                   "[INTERPRETING ERROR] Variable A[4] has no assigned value.");
    assert_failure(&program(decl, "RESIZE A TO 0 - 2"),
                   "[INTERPRETING ERROR] Array size must be an INT_TYPE and greater than 0.");
}

#[test]
fn constants_cannot_change() {
    assert_failure(&program("CONSTANTS\nX = 1", "LET X = 2"),
                   "[INTERPRETING ERROR] Cannot change constant X.");
    assert_failure(&program("CONSTANTS\nX = 1\nX = 2", ""),
                   "[INTERPRETING ERROR] Variable X already declared.");
}

#[test]
fn switch_matches_value_and_type() {
    let switch = |value: &str| {
        program("",
                &format!("SWITCH {value}\nCASE 1:\nPRINT \"one\"\nDEFAULT:\nPRINT \
                          \"default\"\nENDSWITCH"))
    };

    assert_eq!(output(&switch("1")), "one\n");
    assert_eq!(output(&switch("1.0")), "default\n");
    assert_eq!(output(&switch("2 - 1")), "one\n");
}

#[test]
fn for_visits_each_step() {
    let decl = "VARIABLES\nI : INTEGER";

    assert_eq!(output(&program(decl, "FOR I FROM 1 TO 5 STEP 2\nPRINT I\nENDFOR")),
               "1\n3\n5\n");
    assert_failure(&program(decl, "FOR I FROM 1 TO \"5\"\nENDFOR"),
                   "[INTERPRETING ERROR] Can only loop using INT_TYPE, found STR_TYPE.");
}

#[test]
fn assignment_coerces_to_declared_type() {
    let decl = "VARIABLES\nF : FLOAT\nB : BOOLEAN\nC : CHARACTER";

    assert_eq!(output(&program(decl, "LET F = 3\nLET B = 2.5\nLET C = 'z'\nPRINT F, B, C")),
               "3 true z\n");
    assert_failure(&program(decl, "LET C = \"z\""),
                   "[INTERPRETING ERROR] Cannot assign type STR_TYPE to variable C of type \
                    CHAR_TYPE.");
}

#[test]
fn equality_across_types_is_false() {
    assert_eq!(output(&program("", "PRINT 1 == \"1\", 1 != TRUE, 'a' == \"a\"")),
               "false true true\n");
    assert_failure(&program("", "PRINT 1 < \"2\""), "[INTERPRETING ERROR] Invalid expression.");
}

#[test]
fn arithmetic_faults() {
    assert_failure(&program("", "PRINT 1 / 0"), "[INTERPRETING ERROR] Division by zero.");
    assert_failure(&program("", "PRINT 9223372036854775807 + 1"),
                   "[INTERPRETING ERROR] Integer overflow.");
    assert_eq!(output(&program("", "PRINT 1 / 0.0, -1 / 0.0")), "Infinity -Infinity\n");
}

#[test]
fn undeclared_and_unassigned_variables() {
    assert_failure(&program("", "PRINT X"), "[INTERPRETING ERROR] Variable X not declared.");
    assert_failure(&program("VARIABLES\nX : INTEGER", "PRINT X"),
                   "[INTERPRETING ERROR] Variable X has no assigned value.");
    assert_failure(&program("VARIABLES\nX : INTEGER", "PRINT X[1]"),
                   "[INTERPRETING ERROR] Variable X is not an ARRAY.");
}

#[test]
fn lexing_errors() {
    let err = assert_failure(&program("", "PRINT 1 $ 2"), "[LEXING ERROR] Unknown TOKEN ($).");
    assert_eq!(err.code(), 0);
    assert_eq!(err.line(), Some(4));

    assert_failure(&program("", "PRINT \"open"), "[LEXING ERROR] Expected \" at end of STRING.");
    assert_failure(&program("", "PRINT 1."), "[LEXING ERROR] Invalid FLOAT format.");
    assert_failure(&program("", "PRINT ''"), "[LEXING ERROR] Invalid CHAR format.");
}

#[test]
fn parsing_errors() {
    let err = assert_failure("PROGRAM P\nBEGIN\nLET = 1\nEND",
                             "[PARSING ERROR] Expected IDENT, got =.");
    assert_eq!(err.code(), 100);

    assert_failure("PROGRAM P\nBEGIN\nEND\nEND", "[PARSING ERROR] Bad syntax.");
    assert_failure("PROGRAM P\nBEGIN\nIF TRUE\nENDIF\nEND",
                   "[PARSING ERROR] Expected THEN, got NEWLINE.");
}

#[test]
fn parse_only_accepts_every_statement_kind() {
    let src = program("CONSTANTS\nN = 3\nVARIABLES\nI, J : INTEGER\nA : FLOAT [N]",
                      "LET I = 1\nPRINT I\nIF I THEN\nELSE\nENDIF\nWHILE FALSE DO\nENDWHILE\nFOR \
                       J FROM 1 TO N STEP 1\nENDFOR\nREPEAT UNTIL TRUE\nENDREPEAT\nSWITCH \
                       I\nCASE 1:\nDEFAULT:\nENDSWITCH\nRESIZE A TO 4");
    let parsed = parse_program(&src).unwrap();

    assert_eq!(parsed.name, "Test");
    assert_eq!(parsed.body.statements.len(), 8);
    assert_success(&src);
}

#[test]
fn every_token_kind_is_producible() {
    let src = "\n x 1 2.5 'c' \"s\" , : ( ) [ ] PROGRAM BEGIN END VARIABLES CONSTANTS INTEGER FLOAT \
               CHARACTER STRING BOOLEAN TRUE FALSE LET PRINT IF THEN ELSE ENDIF WHILE DO \
               ENDWHILE FOR FROM TO STEP ENDFOR REPEAT UNTIL ENDREPEAT SWITCH CASE DEFAULT \
               ENDSWITCH RESIZE AND OR NOT + - * / % ^ & = == != > >= < <= # comment";

    let mut lexer = Lexer::new(src);
    let mut kinds = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        kinds.push(token.kind);
        if token.kind == TokenKind::Eof {
            break;
        }
    }

    assert_eq!(kinds.len(), 64);
    assert_eq!(kinds[0], TokenKind::Newline);
    assert!(kinds.contains(&TokenKind::BangEqual));
    assert!(!kinds.contains(&TokenKind::Comment));
}
