use std::path::{Path, PathBuf};

use wordgrid::render;
use wordgrid::{Dictionary, GenError, Params, Puzzle};

fn load_dictionary(arg: Option<&String>) -> Result<Dictionary, GenError> {
    let Some(path) = arg.filter(|p| p.as_str() != "-") else {
        return Ok(Dictionary::builtin());
    };
    let src = std::fs::read_to_string(path)
        .map_err(|e| GenError::InvalidInput(format!("reading {path}: {e}")))?;
    if Path::new(path).extension().is_some_and(|ext| ext == "json") {
        Dictionary::from_json(&src)
    } else {
        Dictionary::from_lines(&src)
    }
}

fn save_puzzle(out_dir: &Path, puzzle: &Puzzle) -> Result<(), Box<dyn std::error::Error>> {
    let name: String = puzzle
        .seed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let dir = out_dir.join(name);
    std::fs::create_dir_all(&dir)?;

    let json = serde_json::to_string_pretty(&puzzle.document())?;
    let path = dir.join("puzzle.json");
    std::fs::write(&path, json)?;
    log::info!("Saved {}", path.display());

    let path = dir.join("solution.png");
    std::fs::write(&path, render::encode_png(&render::render_solution(puzzle, 24))?)?;
    log::info!("Saved {}", path.display());

    let path = dir.join("directions.png");
    std::fs::write(&path, render::encode_png(&render::render_directions(&puzzle.grid))?)?;
    log::info!("Saved {}", path.display());
    Ok(())
}

fn print_puzzle(puzzle: &Puzzle) {
    println!("{}", puzzle.grid);
    for word in &puzzle.words {
        let start = word.coords.first();
        match start {
            Some(c) => println!("  {:12} ({}, {})", word.text, c.x, c.y),
            None => println!("  {}", word.text),
        }
    }
    if !puzzle.skipped.is_empty() {
        println!("  skipped: {}", puzzle.skipped.join(", "));
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.get(1).cloned().unwrap_or_else(|| "1234567890".to_string());
    let word_count: i64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);
    let dict = load_dictionary(args.get(3))?;
    let out_dir: PathBuf = args
        .get(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));
    let batch: usize = args.get(5).and_then(|s| s.parse().ok()).unwrap_or(1).max(1);

    let params = Params::default();

    if batch == 1 {
        log::info!(
            "Generating puzzle seed={seed:?}, words={word_count}, dictionary={} entries",
            dict.len()
        );
        let (puzzle, timings) = wordgrid::generate_timed(word_count, &seed, &dict, &params)?;
        print_puzzle(&puzzle);

        eprintln!("\nTimings:");
        for t in &timings {
            eprintln!("  {:20} {:8.3} ms", t.name, t.ms);
        }
        save_puzzle(&out_dir, &puzzle)?;
        return Ok(());
    }

    let seeds: Vec<String> = (0..batch).map(|i| format!("{seed}-{i}")).collect();
    log::info!("Generating {batch} puzzles from base seed {seed:?}");
    let puzzles = wordgrid::generate_batch(&seeds, word_count, &dict, &params)?;
    for puzzle in &puzzles {
        println!("== {} ({}x{})", puzzle.seed, puzzle.width(), puzzle.height());
        print_puzzle(puzzle);
        save_puzzle(&out_dir, puzzle)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
