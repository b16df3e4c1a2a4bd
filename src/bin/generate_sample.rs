use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use name_stats::config::DEFAULT_INPUT;
use name_stats::Record;

/// Write a deterministic sample records file for manual runs.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about = "Write a sample name/gender/count file")]
struct Args {
    /// Output path
    #[arg(default_value = DEFAULT_INPUT)]
    output: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const FEMALE: [&str; 12] = [
    "Anna", "Maria", "Olga", "Elena", "Tatiana", "Natalia", "Irina", "Svetlana", "Yulia",
    "Ekaterina", "Daria", "Vasilisa",
];
const MALE: [&str; 12] = [
    "Ivan", "Alexander", "Dmitry", "Sergey", "Andrey", "Mikhail", "Nikolai", "Pavel", "Artem",
    "Maxim", "Fedor", "Yaroslav",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Heavy-tailed count: mostly small, a few large, about one in ten zero.
    fn count(&mut self) -> u64 {
        if self.next_f64() < 0.1 {
            return 0;
        }
        let u = self.next_f64().max(1e-9);
        (u.powi(3) * 120.0).round() as u64
    }
}

fn sample_records(seed: u64) -> Vec<Record> {
    let mut rng = SimpleRng::new(seed);
    FEMALE
        .iter()
        .map(|n| (n, "female"))
        .chain(MALE.iter().map(|n| (n, "male")))
        .map(|(name, gender)| Record::new(*name, gender, rng.count()))
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let records = sample_records(args.seed);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    for r in &records {
        writeln!(writer, "{} {} {}", r.name, r.gender, r.count)?;
    }
    writer.flush()?;

    println!("Wrote {} records to {}", records.len(), args.output.display());
    Ok(())
}
