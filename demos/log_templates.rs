//! Aligns two tokenized log lines and prints the shared template.
//!
//! Run with:
//! `RUST_LOG=trace cargo run --example log_templates`

use sw_align::{Aligner, AlignerConfig, ScoreParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let line1: Vec<&str> = "Accepted password for alice from 10.0.0.1 port 22"
        .split_whitespace()
        .collect();
    let line2: Vec<&str> = "Accepted password for bob from 10.0.0.7 port 22 ssh2"
        .split_whitespace()
        .collect();

    let aligner = Aligner::new(
        AlignerConfig::new()
            .with_params(ScoreParams::default())
            .with_max_cells(1 << 20),
    );
    let aln = aligner.align(&line1, &line2)?;

    println!("Score: {}", aln.score);
    println!("Line 1: {}", aln.aligned_seq1.join(" "));
    println!("Line 2: {}", aln.aligned_seq2.join(" "));
    if !aln.is_empty() {
        println!("Identity: {:.2}%", aln.identity()?);
    }

    let template: Vec<&str> = aln
        .aligned_seq1
        .iter()
        .zip(&aln.aligned_seq2)
        .map(|(a, b)| if a == b { *a } else { "*" })
        .collect();
    println!("Template: {}", template.join(" "));

    Ok(())
}
