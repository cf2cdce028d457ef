//! Batch command implementation.

use anyhow::{Context, Result};
use scout_core::interpret;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Run the batch command.
pub fn run(file: Option<PathBuf>) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let count = interpret_lines(reader, &mut stdout.lock())?;
    tracing::info!("Interpreted {} phrases", count);

    Ok(())
}

/// Interpret each non-blank line, writing one compact JSON object per line.
fn interpret_lines(reader: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = interpret(&line);
        writeln!(out, "{}", serde_json::to_string(&parsed)?)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_lines_skips_blanks() {
        let input = "Toyota Camry\n\n   \nCars under $20k\n";
        let mut out = Vec::new();
        let count = interpret_lines(input.as_bytes(), &mut out).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows[0]["filters"]["make"], "Toyota");
        assert_eq!(rows[1]["filters"]["priceMax"], 20_000);
    }

    #[test]
    fn test_run_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Sony camera").unwrap();
        assert!(run(Some(file.path().to_path_buf())).is_ok());
        assert!(run(Some(file.path().with_extension("missing"))).is_err());
    }
}
