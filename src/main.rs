use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use exprlang::{lexer::lexer::Lexer, parser::parser::Parser, render_error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: exprlang <file>");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(2);
        }
    };

    let start = Instant::now();

    let mut parser = Parser::new(Lexer::with_file(source.clone(), file_name));
    let program = parser.parse_program();

    println!("Parsed in {:?}", start.elapsed());

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            eprint!("{}", render_error(error, &source));
        }
        process::exit(1);
    }

    for stmt in program.iter() {
        println!("{}", stmt);
    }
}
