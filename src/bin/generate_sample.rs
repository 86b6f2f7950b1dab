use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use har_loader::{DatasetLayout, Split, CHANNELS};

/// Write a small synthetic dataset tree in the UCI HAR layout.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Directory that receives the `UCI HAR Dataset` folder
    #[arg(default_value = "dataset")]
    root: PathBuf,

    /// Windows per split
    #[arg(long, default_value = "24")]
    windows: usize,

    /// Samples per window
    #[arg(long, default_value = "128")]
    timesteps: usize,

    #[arg(long, default_value = "42")]
    seed: u64,
}

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Activity `label` oscillates at `label` cycles per window; gravity adds
/// a constant offset to the total-acceleration channels.
fn signal(label: i64, channel: usize, t: usize, timesteps: usize, rng: &mut SimpleRng) -> f64 {
    let phase = 2.0 * std::f64::consts::PI * label as f64 * t as f64 / timesteps as f64;
    let axis = (channel % 3) as f64;
    let base = match channel / 3 {
        0 => 0.1 * (phase + axis).sin(),
        1 => 0.3 * (phase + axis).cos(),
        _ => 0.1 * (phase + axis).sin() + if axis == 0.0 { 1.0 } else { 0.0 },
    };
    base + rng.gauss(0.0, 0.01)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let layout = DatasetLayout::with_root(&args.root);
    let mut rng = SimpleRng::new(args.seed);

    for split in Split::ALL {
        let labels: Vec<i64> = (0..args.windows).map(|w| (w % 6) as i64 + 1).collect();

        for ch in CHANNELS {
            let mut text = String::new();
            for &label in &labels {
                for t in 0..args.timesteps {
                    let v = signal(label, ch.index(), t, args.timesteps, &mut rng);
                    write!(text, "  {v:.7e}")?;
                }
                text.push('\n');
            }
            write_file(&layout.resolve_path(Some(ch), split), &text)?;
        }

        let text: String = labels.iter().map(|l| format!("{l}\n")).collect();
        write_file(&layout.resolve_path(None, split), &text)?;
    }

    println!(
        "Wrote {} windows x {} timesteps per split under {}",
        args.windows,
        args.timesteps,
        layout.split_dir(Split::Train).parent().unwrap_or(&args.root).display()
    );
    Ok(())
}
