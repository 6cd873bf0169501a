use std::{fs, io, path::Path};

use infixcalc::{
    error::{CalcError, EvalError, LexError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexer, Operator, Token},
        session::{ErrorPolicy, GOODBYE, Outcome, PROMPT, Session, SessionEnd, SessionOptions,
                  banner},
        symbols::SymbolTable,
    },
};
use walkdir::WalkDir;

fn run_quiet(input: &str, options: SessionOptions) -> (Result<SessionEnd, CalcError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let end = Session::new(input.as_bytes()).options(options)
                                             .run(&mut out, &mut err);
    (end,
     String::from_utf8(out).expect("stdout is not UTF-8"),
     String::from_utf8(err).expect("stderr is not UTF-8"))
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_out = read_expected(path, "out");
        let expected_err = read_expected(path, "err");

        let (end, out, err) = run_quiet(&script, SessionOptions::quiet());
        count += 1;

        if let Err(e) = end {
            panic!("Script {path:?} failed:\n{script}\nError: {e}");
        }
        assert_eq!(out, expected_out, "stdout of {path:?}");
        assert_eq!(err, expected_err, "stderr of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn read_expected(script: &Path, extension: &str) -> String {
    let path = script.with_extension(extension);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn pushed_back_token_is_returned_unchanged() {
    let mut lexer = Lexer::new("1 + 2;".as_bytes());

    let first = lexer.next_token().unwrap();
    assert_eq!(first, Token::Number(1.0));

    lexer.push_back(first.clone()).unwrap();
    assert_eq!(lexer.next_token().unwrap(), first);
    assert_eq!(lexer.next_token().unwrap(), Token::Operator(Operator::Plus));

    let name = Token::Identifier("sqrt2".to_string());
    lexer.push_back(name.clone()).unwrap();
    assert_eq!(lexer.next_token().unwrap(), name);
    assert_eq!(lexer.next_token().unwrap(), Token::Number(2.0));
}

#[test]
fn second_push_back_is_rejected() {
    let mut lexer = Lexer::new("".as_bytes());
    lexer.push_back(Token::Quit).unwrap();

    assert!(matches!(lexer.push_back(Token::Terminator),
                     Err(LexError::PutbackIntoFullBuffer { .. })));
    assert_eq!(lexer.next_token().unwrap(), Token::Quit);
}

#[test]
fn lexer_recognizes_every_token_kind() {
    let mut lexer = Lexer::new("( ) + - * / % = ; q quux x_1 4.5".as_bytes());
    let expected = [Token::Operator(Operator::LParen),
                    Token::Operator(Operator::RParen),
                    Token::Operator(Operator::Plus),
                    Token::Operator(Operator::Minus),
                    Token::Operator(Operator::Star),
                    Token::Operator(Operator::Slash),
                    Token::Operator(Operator::Percent),
                    Token::Assign,
                    Token::Terminator,
                    Token::Quit,
                    Token::Identifier("quux".to_string()),
                    Token::Identifier("x_1".to_string()),
                    Token::Number(4.5)];

    for token in expected {
        assert_eq!(lexer.next_token().unwrap(), token);
    }
    assert!(!lexer.is_exhausted());
    assert_eq!(lexer.next_token().unwrap(), Token::Terminator);
    assert!(lexer.is_exhausted());
    assert_eq!(lexer.next_token().unwrap(), Token::Terminator);
}

#[test]
fn lone_q_is_quit_but_longer_names_are_identifiers() {
    assert_eq!(Lexer::new("q".as_bytes()).next_token().unwrap(), Token::Quit);
    assert_eq!(Lexer::new("qq".as_bytes()).next_token().unwrap(),
               Token::Identifier("qq".to_string()));
    assert_eq!(Lexer::new("q1".as_bytes()).next_token().unwrap(),
               Token::Identifier("q1".to_string()));
}

#[test]
fn lexer_counts_lines() {
    let mut lexer = Lexer::new("1\n\n  2\n".as_bytes());
    assert_eq!(lexer.line_number(), 0);

    lexer.next_token().unwrap();
    assert_eq!(lexer.line_number(), 1);

    lexer.next_token().unwrap();
    assert_eq!(lexer.line_number(), 3);
}

#[test]
fn lexer_reads_input_only_on_demand() {
    let mut lexer = Lexer::new("1 + 2;\n3;\n".as_bytes());

    assert!(lexer.needs_input());
    for _ in 0..4 {
        lexer.next_token().unwrap();
    }
    assert!(lexer.needs_input());
    assert_eq!(lexer.line_number(), 1);

    assert_eq!(lexer.next_token().unwrap(), Token::Number(3.0));
    assert_eq!(lexer.line_number(), 2);
    assert!(!lexer.needs_input());
}

#[test]
fn recover_skips_rest_of_failed_statement() {
    let mut session = Session::new("1 / 0 + 5; 7;\n".as_bytes());

    assert!(matches!(session.next_outcome(),
                     Err(CalcError::Eval(EvalError::DivideByZero { .. }))));
    session.recover();
    assert_eq!(session.next_outcome().unwrap(), Outcome::Value(7.0));
    assert_eq!(session.next_outcome().unwrap(), Outcome::EndOfInput);
}

#[test]
fn recover_keeps_next_statement_when_terminator_was_consumed() {
    let mut session = Session::new("(1; 2;\n".as_bytes());

    assert!(session.next_outcome().is_err());
    session.recover();
    assert_eq!(session.next_outcome().unwrap(), Outcome::Value(2.0));
}

#[test]
fn recover_skips_across_lines_to_the_terminator() {
    let mut session = Session::new("1 $ 2\n3;\n4;\n".as_bytes());

    assert!(session.next_outcome().is_err());
    session.recover();
    assert_eq!(session.next_outcome().unwrap(), Outcome::Value(4.0));
    assert_eq!(session.next_outcome().unwrap(), Outcome::EndOfInput);
}

#[test]
fn recover_stops_at_end_of_input() {
    let mut session = Session::new("1 / 0\n+ 3\n".as_bytes());

    assert!(matches!(session.next_outcome(),
                     Err(CalcError::Eval(EvalError::DivideByZero { line: 1 }))));
    session.recover();
    assert_eq!(session.next_outcome().unwrap(), Outcome::EndOfInput);
}

#[test]
fn failed_assignment_is_not_committed() {
    let mut session = Session::new("x = 1; x = 2 / 0; x;".as_bytes());

    assert_eq!(session.next_outcome().unwrap(), Outcome::Value(1.0));
    assert!(session.next_outcome().is_err());
    session.recover();
    assert_eq!(session.next_outcome().unwrap(), Outcome::Value(1.0));
    assert_eq!(session.symbols().get("x"), Some(1.0));
}

#[test]
fn quit_prints_goodbye_and_stops() {
    let (end, out, err) = run_quiet("1 + 1;\nq\n2;\n", SessionOptions::quiet());

    assert_eq!(end.unwrap(), SessionEnd::Quit);
    assert_eq!(out, format!("= 2\n{GOODBYE}\n"));
    assert!(err.is_empty());
}

#[test]
fn end_of_input_stops_without_goodbye() {
    let (end, out, _) = run_quiet("3 * 3;\n", SessionOptions::quiet());

    assert_eq!(end.unwrap(), SessionEnd::EndOfInput);
    assert_eq!(out, "= 9\n");
}

#[test]
fn abort_policy_returns_first_error() {
    let options = SessionOptions { on_error: ErrorPolicy::Abort,
                                   ..SessionOptions::quiet() };
    let (end, out, err) = run_quiet("1;\n1 / 0;\n2;\n", options);

    let e = end.unwrap_err();
    assert!(matches!(e, CalcError::Eval(EvalError::DivideByZero { line: 2 })));
    assert_eq!(e.exit_code(), 1);
    assert_eq!(out, "= 1\n");
    assert!(err.is_empty());
}

#[test]
fn banner_and_prompts_are_printed_when_enabled() {
    let (end, out, _) = run_quiet("1;\n2;\nq\n", SessionOptions::default());

    assert_eq!(end.unwrap(), SessionEnd::Quit);
    assert_eq!(out,
               format!("{}\n{PROMPT}= 1\n{PROMPT}= 2\n{PROMPT}{GOODBYE}\n", banner()));
}

#[test]
fn banner_lists_every_constant() {
    let text = banner();
    for name in SymbolTable::constant_names() {
        assert!(text.contains(name), "{name} missing from banner");
    }
}

#[test]
fn sessions_do_not_share_symbols() {
    let mut first = Session::new("x = 1;".as_bytes());
    assert_eq!(first.next_outcome().unwrap(), Outcome::Value(1.0));

    let mut second = Session::new("x;".as_bytes());
    assert!(matches!(second.next_outcome(),
                     Err(CalcError::Eval(EvalError::NotDefined { .. }))));
}

#[test]
fn context_can_start_from_custom_symbols() {
    let mut symbols = SymbolTable::empty();
    symbols.set("rate", 0.5);
    let mut context = Context::with_symbols(symbols);
    context.max_depth = 2;

    let mut session = Session::with_context("rate * 4; pi; ((1));\n(((1)));".as_bytes(), context);
    assert_eq!(session.next_outcome().unwrap(), Outcome::Value(2.0));
    assert!(session.next_outcome().is_err());
    session.recover();
    assert_eq!(session.next_outcome().unwrap(), Outcome::Value(1.0));
    assert!(session.next_outcome().is_err());
}

#[test]
fn write_failures_are_not_recoverable() {
    struct Closed;

    impl io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut err = Vec::new();
    let end = Session::new("1;".as_bytes()).options(SessionOptions::quiet())
                                           .run(&mut Closed, &mut err);

    let e = end.unwrap_err();
    assert!(matches!(e, CalcError::Io(_)));
    assert!(!e.is_recoverable());
    assert_eq!(e.exit_code(), 2);
}
