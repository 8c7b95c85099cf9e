use std::{env, fs, process, time::Instant};

use myco::{display_error, parse, tokenize_bytes};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (show_tokens, file_path) = match args.as_slice() {
        [_, flag, path] if flag == "--tokens" => (true, path),
        [_, path] => (false, path),
        _ => {
            eprintln!("usage: myco [--tokens] <file>");
            process::exit(2);
        }
    };

    let bytes = match fs::read(file_path) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };
    let source = String::from_utf8_lossy(&bytes);

    let start = Instant::now();

    let tokens = match tokenize_bytes(&bytes) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, file_path, &source);
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if show_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();

    let tree = match parse(&tokens) {
        Ok(tree) => tree,
        Err(error) => {
            display_error(&error, file_path, &source);
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());
    println!("{}", tree);
}
