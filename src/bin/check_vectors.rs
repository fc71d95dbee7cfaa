// Checks a generated_test_data/ directory produced by gen_vectors: re-derives
// every run from its stored seed, re-encrypts, and compares field by field.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;

use aes_ctr_verif::vectors::generate_run;

fn read_value(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s.trim().to_string(),
        Err(e) => {
            eprintln!("cannot read {}: {}", path.display(), e);
            exit(1);
        }
    }
}

fn read_blocks(path: &Path) -> Vec<String> {
    read_value(path)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let dir = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("generated_test_data")
    };

    let count: u32 = read_value(&dir.join("number_of_test_sets.txt"))
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("number_of_test_sets.txt does not contain a run count");
            exit(1);
        });

    let mut failures = 0u32;
    for i in 0..count {
        let id = format!("{:03}", i);
        let seed: u64 = read_value(&dir.join(format!("t_{id}_seed.txt")))
            .parse()
            .unwrap_or_else(|_| {
                eprintln!("run {id}: seed file is not an integer");
                exit(1);
            });
        let key = read_value(&dir.join(format!("t_{id}_key.txt")));
        let iv = read_value(&dir.join(format!("t_{id}_iv.txt")));
        let plaintext = read_blocks(&dir.join(format!("t_{id}_plaintext.txt")));
        let ciphertext = read_blocks(&dir.join(format!("t_{id}_ciphertext.txt")));

        let expected = generate_run(seed, i, plaintext.len()).expect("regenerate run");

        let mut bad = Vec::new();
        if key != expected.key {
            bad.push("key");
        }
        if iv != expected.iv {
            bad.push("iv");
        }
        if plaintext != expected.plaintext {
            bad.push("plaintext");
        }
        if ciphertext != expected.ciphertext {
            bad.push("ciphertext");
        }

        if bad.is_empty() {
            println!("run {id}: ok ({} blocks)", plaintext.len());
        } else {
            eprintln!("run {id}: MISMATCH in {}", bad.join(", "));
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {count} runs failed verification");
        exit(1);
    }
    println!("All {count} runs verified");
}
