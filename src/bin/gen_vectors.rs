// Generates deterministic AES-256-CTR verification runs for the DUT and
// persists them under generated_test_data/ (hex, one file per field).

use std::env;
use std::fs;
use std::path::Path;
use std::process::exit;

use aes_ctr_verif::vectors::{generate_suite, Run};

const OUT_DIR: &str = "generated_test_data";
const ROOT_SEED: u64 = 0;

fn parse_args() -> (u32, usize) {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: gen_vectors <number_of_runs> <blocks_per_run>");
        exit(1);
    }
    let num_runs = match args[1].parse::<u32>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("number_of_runs must be a non-negative integer");
            exit(1);
        }
    };
    let blocks_per_run = match args[2].parse::<usize>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("blocks_per_run must be a non-negative integer");
            exit(1);
        }
    };
    (num_runs, blocks_per_run)
}

fn joined_lines(blocks: &[String]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(block);
        out.push('\n');
    }
    out
}

fn write_run(dir: &Path, run: &Run) -> std::io::Result<()> {
    let id = format!("{:03}", run.id);
    fs::write(dir.join(format!("t_{id}_seed.txt")), format!("{}\n", run.seed))?;
    fs::write(dir.join(format!("t_{id}_key.txt")), format!("{}\n", run.key))?;
    fs::write(dir.join(format!("t_{id}_iv.txt")), format!("{}\n", run.iv))?;
    fs::write(dir.join(format!("t_{id}_plaintext.txt")), joined_lines(&run.plaintext))?;
    fs::write(dir.join(format!("t_{id}_ciphertext.txt")), joined_lines(&run.ciphertext))?;
    Ok(())
}

fn main() {
    let (num_runs, blocks_per_run) = parse_args();

    let dir = Path::new(OUT_DIR);
    fs::create_dir_all(dir).expect("create output directory");

    let runs = generate_suite(ROOT_SEED, num_runs, blocks_per_run).expect("generate suite");
    for run in &runs {
        write_run(dir, run).expect("write run files");
    }
    fs::write(dir.join("number_of_test_sets.txt"), format!("{}\n", runs.len()))
        .expect("write run count");

    println!(
        "Wrote {} runs ({} blocks each) to {}/",
        runs.len(),
        blocks_per_run,
        OUT_DIR
    );
}
