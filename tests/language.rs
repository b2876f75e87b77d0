use std::{collections::HashSet, fs, io, path::Path};

use imp::{
    Error, State,
    error::{LexError, ParseError, RuntimeError},
    interpreter::lexer::{TokenKind, scan},
    parse, run,
};
use walkdir::WalkDir;

#[test]
fn example_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "imp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                                                                         panic!("Missing expected output for {path:?}: {e}")
                                                                     });

        count += 1;
        let output = output_of(&source).unwrap_or_else(|e| {
                                            panic!("Program {path:?} failed:\n{source}\nError: {e}")
                                        });
        assert_eq!(output, expected, "Program {path:?} printed unexpected output");
    }

    assert!(count > 0, "No programs found in programs/");
}

fn output_of(src: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    run(src, &mut output)?;
    Ok(String::from_utf8(output).expect("output is decimal digits"))
}

fn assert_output(src: &str, expected: &[i64]) {
    let output = output_of(src).unwrap_or_else(|e| panic!("Script failed: {e}"));
    let printed: Vec<i64> = output.lines()
                                  .map(|line| line.parse().expect("one integer per line"))
                                  .collect();
    assert_eq!(printed, expected, "unexpected output for {src:?}");
}

fn assert_failure(src: &str) -> Error {
    match run(src, io::sink()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn final_state(src: &str) -> State {
    run(src, io::sink()).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

#[test]
fn arithmetic_precedence() {
    assert_output("print 1+2*3", &[7]);
    assert_output("print (1+2)*3", &[9]);
    assert_output("print 2*3+4", &[10]);
    assert_output("print 2*(3+4)*5", &[70]);
}

#[test]
fn subtraction_is_left_associative() {
    assert_output("print 8-3-2", &[3]);
    assert_output("print 1-2+3", &[2]);
}

#[test]
fn unassigned_variable_reads_as_zero() {
    assert_output("print x", &[0]);
    assert_output("y := x + 5; print y", &[5]);
}

#[test]
fn assignment_overwrites() {
    assert_output("x := 1; x := x + 41; print x", &[42]);
}

#[test]
fn loop_runs_until_condition_fails() {
    assert_output("x := 0; while x <= 2 do x := x + 1 od; print x", &[3]);
}

#[test]
fn loop_with_false_condition_never_runs() {
    assert_output("while false do print 1 od; print 2", &[2]);
}

#[test]
fn loop_body_sees_its_own_assignments() {
    assert_output("i := 0; s := 0; while i <= 4 do s := s + i; i := i + 1 od; print s",
                  &[10]);
}

#[test]
fn conditional_takes_then_branch_when_true() {
    assert_output("x := 1; if x = 1 then y := 10 else y := 20 fi; print y", &[10]);
}

#[test]
fn conditional_takes_else_branch_when_false() {
    assert_output("x := 2; if x = 1 then y := 10 else y := 20 fi; print y", &[20]);
}

#[test]
fn conditional_runs_exactly_one_branch() {
    assert_output("if true then print 1 else print 2 fi", &[1]);
    assert_output("if false then print 1 else print 2 fi", &[2]);
}

#[test]
fn boolean_truth_tables() {
    let cases = [("true && true", 1),
                 ("true && false", 0),
                 ("false && true", 0),
                 ("false && false", 0),
                 ("true || true", 1),
                 ("true || false", 1),
                 ("false || true", 1),
                 ("false || false", 0),
                 ("!true", 0),
                 ("!false", 1),
                 ("(1=1) && (2<=1)", 0),
                 ("(1=1) || (2<=1)", 1),
                 ("!(1 = 2) && 3 <= 3", 1)];

    for (condition, expected) in cases {
        assert_output(&format!("if {condition} then print 1 else print 0 fi"), &[expected]);
    }
}

#[test]
fn not_binds_tighter_than_logical_operators() {
    // Read as (!false) || false, not !(false || false).
    assert_output("if !false || false then print 1 else print 0 fi", &[1]);
    // Read as (!true) && false.
    assert_output("if !true && false then print 1 else print 0 fi", &[0]);
}

#[test]
fn parenthesised_integer_operand_in_comparison() {
    assert_output("x := 3; if (x + 1) * 2 = 8 then print 1 else print 0 fi", &[1]);
}

#[test]
fn output_follows_program_order() {
    assert_output("a := 1; print a; a := a + 1; print a * 10; b := a; print b; print 7",
                  &[1, 20, 2, 7]);
}

#[test]
fn final_state_is_returned() {
    let state = final_state("x := 2; y := x * x; skip");

    assert_eq!(state.get("x"), 2);
    assert_eq!(state.get("y"), 4);
    assert_eq!(state.get("z"), 0);
    assert_eq!(state.len(), 2);

    let mut variables: Vec<(&str, i64)> = state.iter().collect();
    variables.sort_unstable();
    assert_eq!(variables, [("x", 2), ("y", 4)]);
}

#[test]
fn skip_has_no_effect() {
    let state = final_state("skip; skip");
    assert!(state.is_empty());
}

#[test]
fn trailing_separator_is_tolerated() {
    assert_output("print 1;", &[1]);
}

#[test]
fn lexemes_reproduce_source_operators_and_keywords() {
    let source = "x := 0 ; while x <= 2 && ! ( x = 5 ) || false do x := x + 1 * 2 - 1 od ;\n\
                  if true then skip else print ( x ) fi";
    let tokens = scan(source).unwrap();

    let expected: HashSet<&str> = source.split_whitespace()
                                        .filter(|word| word.chars().all(|c| !c.is_ascii_digit()))
                                        .filter(|word| *word != "x")
                                        .collect();
    let actual: HashSet<&str> = tokens.iter()
                                      .filter(|t| t.kind.fixed_lexeme().is_some())
                                      .map(|t| t.lexeme.as_str())
                                      .collect();

    assert_eq!(actual, expected);
}

#[test]
fn token_kinds_survive_rescanning_lexemes() {
    let tokens = scan("while x <= 10 do x := x * 2 od; print x").unwrap();
    let rebuilt = tokens.iter()
                        .map(|t| t.lexeme.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");

    let rescanned: Vec<TokenKind> = scan(&rebuilt).unwrap().iter().map(|t| t.kind).collect();
    let original: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(rescanned, original);
}

#[test]
fn rendered_program_behaves_like_its_source() {
    let source = fs::read_to_string(Path::new("programs").join("primes.imp")).unwrap();
    let program = parse(&scan(&source).unwrap()).unwrap();

    let rendered = program.to_string();
    assert_eq!(output_of(&rendered).unwrap(), output_of(&source).unwrap());
}

#[test]
fn unmatched_parenthesis_is_parse_error() {
    let error = assert_failure("x := 1;\nprint (x + 2");
    assert!(matches!(error, Error::Parse(ParseError::UnmatchedParenthesis { line: 2 })),
            "got {error:?}");
}

#[test]
fn comparison_with_unclosed_right_operand_reports_the_parenthesis() {
    let error = assert_failure("x := 1;\nif (x + 1) = (2 then skip else skip fi");
    assert_eq!(error.to_string(),
               "Error on line 2: Unmatched parenthesis, expected closing ')' but none found.");
}

#[test]
fn operators_must_sit_between_operands() {
    let error = assert_failure("print + 1 2");
    assert!(matches!(&error, Error::Parse(ParseError::MissingOperand { operator, line: 1 }) if operator == "+"),
            "got {error:?}");

    let error = assert_failure("print 1 2 +");
    assert!(matches!(&error, Error::Parse(ParseError::UnexpectedToken { found, .. }) if found == "2"),
            "got {error:?}");

    let error = assert_failure("if true false && then skip else skip fi");
    assert!(matches!(&error,
                     Error::Parse(ParseError::UnexpectedToken { expected, found, .. })
                     if expected == "'then'" && found == "false"),
            "got {error:?}");
}

#[test]
fn deeply_nested_parentheses_are_a_parse_error() {
    let source = format!("if {}x{} = 0 then skip else skip fi", "(".repeat(2000), ")".repeat(2000));
    let error = assert_failure(&source);
    assert!(matches!(error, Error::Parse(ParseError::NestingTooDeep { line: 1, .. })),
            "got {error:?}");

    assert_output(&format!("print {}7{}", "(".repeat(200), ")".repeat(200)), &[7]);
}

#[test]
fn missing_keywords_are_parse_errors() {
    let cases = [("while x <= 1\nprint x od", "'do'", 2),
                 ("while x <= 1 do\nx := 1\n", "'od'", 3),
                 ("if x = 1\nskip else skip fi", "'then'", 2),
                 ("if x = 1 then skip\nfi", "'else'", 2),
                 ("if x = 1 then skip else\nskip", "'fi'", 2)];

    for (src, keyword, line) in cases {
        match assert_failure(src) {
            Error::Parse(ParseError::UnexpectedToken { expected, line: l, .. }) => {
                assert_eq!(expected, keyword, "for {src:?}");
                assert_eq!(l, line, "for {src:?}");
            },
            other => panic!("expected a parse error for {src:?}, got {other:?}"),
        }
    }
}

#[test]
fn stray_character_is_lex_error() {
    let error = assert_failure("x := 1;\n\nprint x $ 2");
    assert!(matches!(error,
                     Error::Lex(LexError::UnexpectedCharacter { character: '$',
                                                                line:      3, })),
            "got {error:?}");
}

#[test]
fn lex_error_stops_before_execution() {
    let mut output = Vec::<u8>::new();
    assert!(run("print 1; print ?", &mut output).is_err());
    assert!(output.is_empty());
}

#[test]
fn overflow_is_runtime_error() {
    let error = assert_failure("x := 9223372036854775807;\nprint x + 1");
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { line: 2 })),
            "got {error:?}");
}

#[test]
fn overflow_in_discarded_operand_is_still_reported() {
    let error = assert_failure("m := 9223372036854775807;\nif true || m + 1 = 0 then skip else skip fi");
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { line: 2 })),
            "got {error:?}");
}

#[test]
fn output_before_runtime_error_is_kept() {
    let mut output = Vec::<u8>::new();
    let result = run("print 1; print 9223372036854775807 * 2", &mut output);

    assert!(result.is_err());
    assert_eq!(output, b"1\n");
}

#[test]
fn oversized_literal_is_parse_error() {
    let error = assert_failure("print 123456789012345678901234567890");
    assert!(matches!(error, Error::Parse(ParseError::LiteralTooLarge { line: 1, .. })),
            "got {error:?}");
}

#[test]
fn errors_name_their_line() {
    let error = assert_failure("skip;\nskip;\nx := (1");
    assert_eq!(error.line(), 3);
    assert_eq!(error.to_string(),
               "Error on line 3: Unmatched parenthesis, expected closing ')' but none found.");
}
