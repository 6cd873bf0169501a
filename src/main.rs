use std::{
    fs::File,
    io::{self, BufRead, BufReader, Cursor, IsTerminal},
    panic,
    process::ExitCode,
};

use clap::Parser;
use infixcalc::{
    error::{CalcResult, EXIT_UNEXPECTED_ERROR},
    interpreter::{
        evaluator::core::{Context, DEFAULT_MAX_DEPTH},
        session::{ErrorPolicy, Session, SessionEnd, SessionOptions},
    },
};

/// infixcalc evaluates infix arithmetic statements terminated by ';', with
/// variables and named constants. Type 'q' to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infixcalc to treat CONTENTS as the path of a file of statements.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Suppresses the banner and the prompts.
    #[arg(short, long)]
    quiet: bool,

    /// Stops at the first failing statement instead of reporting it and
    /// moving on.
    #[arg(long)]
    abort_on_error: bool,

    /// Deepest nesting of parentheses, unary signs and assignments accepted
    /// in one statement.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Statements to evaluate. Standard input is read when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    panic::set_hook(Box::new(|_| {}));
    match panic::catch_unwind(|| run(&args)) {
        Ok(Ok(_)) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            eprintln!("Runtime error: {e}");
            ExitCode::from(e.exit_code())
        },
        Err(_) => {
            eprintln!("An unexpected error occurred.");
            ExitCode::from(EXIT_UNEXPECTED_ERROR)
        },
    }
}

fn run(args: &Args) -> CalcResult<SessionEnd> {
    let interactive = args.contents.is_none() && io::stdin().is_terminal() && !args.quiet;

    let input: Box<dyn BufRead> = match (&args.contents, args.file) {
        (Some(path), true) => Box::new(BufReader::new(File::open(path)?)),
        (Some(script), false) => Box::new(Cursor::new(script.clone())),
        (None, _) => Box::new(io::stdin().lock()),
    };

    let mut context = Context::new();
    context.max_depth = args.max_depth;

    let options = SessionOptions { banner:   interactive,
                                   prompt:   interactive,
                                   on_error: if args.abort_on_error {
                                       ErrorPolicy::Abort
                                   } else {
                                       ErrorPolicy::Recover
                                   }, };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    Session::with_context(input, context).options(options)
                                         .run(&mut out, &mut err)
}
