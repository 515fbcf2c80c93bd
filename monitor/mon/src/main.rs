//! Monitor console CLI.
//!
//! Evaluates debugger expressions over x86 registers, interactively or one
//! expression at a time.

use std::io::{self, IsTerminal};

use mon::console::{report_error, write_tokens};
use mon::{
    evaluate, init_tracing, lex, parse_args, CliArgs, Console, CpuState, ExprError, Register,
};
use mon_diagnostic::{ErrorCode, ErrorDocs};

fn main() {
    init_tracing();
    mon_lexer::init();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        run_repl(&[]);
        return;
    };

    match command.as_str() {
        "repl" => run_repl(&args[2..]),
        "eval" => {
            let cli = parse_or_exit(&args[2..]);
            let Some(expression) = cli.expression() else {
                eprintln!("Usage: mon eval <expr> [--reg <name>=<value> ...]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --reg <name>=<value>  Seed a register (decimal or 0x hex)");
                eprintln!("  --max-tokens=<N>      Token limit (default: 256)");
                eprintln!("  --color=<mode>        auto, always or never");
                std::process::exit(1);
            };
            match evaluate(&expression, &cli.registers, &cli.config) {
                Ok(value) => println!("{}", mon::console::format_value(value)),
                Err(err) => fail(&cli, &expression, &err),
            }
        }
        "lex" => {
            let cli = parse_or_exit(&args[2..]);
            let Some(expression) = cli.expression() else {
                eprintln!("Usage: mon lex <expr>");
                std::process::exit(1);
            };
            match lex(&expression, &cli.config) {
                Ok(tokens) => {
                    if let Err(err) = write_tokens(&mut io::stdout().lock(), &tokens) {
                        eprintln!("error: {err}");
                        std::process::exit(1);
                    }
                }
                Err(err) => fail(&cli, &expression, &err.into()),
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mon --explain <ERROR_CODE>");
                eprintln!("Example: mon --explain E2002");
                eprintln!();
                for code in ErrorCode::ALL {
                    eprintln!("  {code}  {}", code.description());
                }
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("mon {}", env!("CARGO_PKG_VERSION"));
        }
        _ if command.starts_with("--") => run_repl(&args[1..]),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(args: &[String]) -> CliArgs {
    match parse_args(args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn fail(cli: &CliArgs, expression: &str, err: &ExprError) -> ! {
    let is_tty = io::stderr().is_terminal();
    report_error(io::stderr().lock(), cli.config.color, is_tty, expression, err);
    std::process::exit(1);
}

fn run_repl(args: &[String]) {
    let cli = parse_or_exit(args);
    if !cli.positional.is_empty() {
        eprintln!("error: unexpected argument '{}'", cli.positional[0]);
        std::process::exit(1);
    }

    let mut cpu = CpuState::new();
    for (name, value) in &cli.registers {
        if let Some(reg) = Register::from_name(name) {
            cpu.write(reg, *value);
        }
    }

    let mut console = Console::new(cli.config).with_cpu(cpu);
    let is_tty = io::stderr().is_terminal();
    if let Err(err) = console.run(io::stdin().lock(), io::stdout(), io::stderr(), is_tty) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E2002");
        std::process::exit(1);
    };

    match ErrorDocs::get(code) {
        Some(doc) => println!("{doc}"),
        None => {
            eprintln!("No documentation available for {code}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("mon - debugger expression console");
    println!();
    println!("Usage: mon [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Interactive console (default)");
    println!("  eval <expr>          Evaluate one expression and print it");
    println!("  lex <expr>           Tokenize and display tokens");
    println!("  --explain <code>     Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --reg <name>=<value> Seed a register (repeatable)");
    println!("  --max-tokens=<N>     Token limit per expression (default: 256)");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  MON_LOG              Tracing filter, e.g. debug or mon_eval=trace");
    println!("  MON_LOG_TREE=1       Render tracing spans as a tree");
}
