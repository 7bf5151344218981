//! Build script to embed the game's word lists
//!
//! Turns `data/*.txt` (one lowercase word per line) into `&[&str]` constants.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// (source file, generated file, constant name, doc line)
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Solution pool: words that can be drawn as the hidden word",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Guessable words accepted on submit",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for (source, generated, name, doc) in LISTS {
        println!("cargo:rerun-if-changed={source}");

        let text = fs::read_to_string(source)
            .unwrap_or_else(|e| panic!("cannot read word list {source}: {e}"));
        let target = Path::new(&out_dir).join(generated);
        fs::write(&target, render_constants(&text, name, doc))
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
    }
}

/// Rust source for `NAME: &[&str]` and `NAME_COUNT`, skipping blank lines
fn render_constants(text: &str, name: &str, doc: &str) -> String {
    let words: Vec<&str> = text.lines().map(str::trim).filter(|w| !w.is_empty()).collect();

    let mut code = format!("/// {doc}\npub const {name}: &[&str] = &[\n");
    for word in &words {
        let _ = writeln!(code, "    {word:?},");
    }
    let _ = write!(
        code,
        "];\n\n/// Number of words in {name}\npub const {name}_COUNT: usize = {};\n",
        words.len()
    );
    code
}
