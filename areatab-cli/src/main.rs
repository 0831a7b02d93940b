//! areatab experiment driver
//!
//! Runs the fixed comparison grid over one source image: direct box blur,
//! SAT-backed blur, and AAT-backed blurs at every scale factor and dither
//! policy, for every radius in the budget. Writes one PNG per combination
//! plus a precision report keyed by the image's base name.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use areatab_core::GrayImage;
use areatab_filter::{
    AvgTable, BlueNoise, DitherSource, RoundToNearest, SumTable, WhiteNoise, box_blur,
    box_blur_separable,
};
use areatab_io::{read_gray, write_gray};
use clap::Parser;

/// Radii of the experiment grid.
const RADII: [u32; 5] = [0, 1, 5, 25, 100];

/// Scale factors for the round-to-nearest tables (8/10/12/16-bit codes).
const ROUND_SCALES: [u32; 4] = [1, 4, 16, 256];

/// Scale factors for the dithered tables. Dithering targets the visible
/// quantization of the narrow representations; 256x is already exact to
/// the eye, so the stochastic variants stop at 16x.
const STOCHASTIC_SCALES: [u32; 3] = [1, 4, 16];

/// Box-blur precision study: SAT vs AAT accumulation tables
///
/// Blurs the source image with every strategy in the experiment grid and
/// reports the min/max magnitudes and required bit widths of each table.
#[derive(Parser, Debug)]
#[command(name = "areatab")]
#[command(author, version, about)]
struct Cli {
    /// Source image (PNG; color inputs are reduced to luma)
    #[arg(value_name = "IMAGE", required_unless_present = "synthetic")]
    image: Option<PathBuf>,

    /// Tileable blue-noise texture
    #[arg(long, value_name = "PNG", default_value = "bluenoise.png")]
    blue_noise: PathBuf,

    /// Output directory for blurred images and the report
    #[arg(short, long, value_name = "DIR", default_value = "out")]
    out_dir: PathBuf,

    /// Seed for white-noise dithering (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run on a synthetic uniform-random image instead of a file
    #[arg(long, value_name = "WxH", conflicts_with = "image")]
    synthetic: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // External inputs fail fast, before any table is built.
    let (source, base) = load_source(cli)?;
    let blue_texture = read_gray(&cli.blue_noise)
        .map_err(|e| format!("blue-noise texture {}: {}", cli.blue_noise.display(), e))?;
    fs::create_dir_all(&cli.out_dir)?;

    let sat = SumTable::build(&source);

    // Mean-centered variant for the signed bit-width comparison.
    let pixel_count = source.width() as i64 * source.height() as i64;
    let mean = (sat.cell(source.width() - 1, source.height() - 1) + pixel_count / 2) / pixel_count;
    let biased = SumTable::build_biased(&source, mean);

    let mut white = match cli.seed {
        Some(seed) => WhiteNoise::seeded(seed),
        None => WhiteNoise::new(),
    };
    let mut blue = BlueNoise::new(blue_texture);

    // Every AAT variant is built once and queried at every radius.
    let mut variants: Vec<(String, AvgTable)> = Vec::new();
    for &scale in &ROUND_SCALES {
        let label = scaled_label("AAT", scale);
        variants.push((label, AvgTable::build(&sat, scale, &mut RoundToNearest)?));
    }
    for &scale in &STOCHASTIC_SCALES {
        let label = scaled_label("SAAT_White", scale);
        variants.push((label, AvgTable::build(&sat, scale, &mut white)?));
    }
    for &scale in &STOCHASTIC_SCALES {
        let label = scaled_label("SAAT_Blue", scale);
        variants.push((label, AvgTable::build(&sat, scale, &mut blue)?));
    }

    for &radius in &RADII {
        let direct = box_blur_separable(&source, radius)?;
        write_gray(out_path(&cli.out_dir, &base, radius, None), &direct)?;

        let via_sat = box_blur(&sat, radius)?;
        write_gray(out_path(&cli.out_dir, &base, radius, Some("SAT")), &via_sat)?;

        for (label, table) in &variants {
            let blurred = box_blur(table, radius)?;
            write_gray(
                out_path(&cli.out_dir, &base, radius, Some(label.as_str())),
                &blurred,
            )?;
        }
    }

    let mut report = String::new();
    writeln!(report, "precision report: {}", base)?;
    writeln!(report, "image: {}x{}", source.width(), source.height())?;
    writeln!(report, "SAT: {}", sat.stats())?;
    writeln!(report, "SAT bias {}: {}", mean, biased.stats())?;
    for (label, table) in &variants {
        writeln!(report, "{}: {}", label, table.stats())?;
    }
    fs::write(cli.out_dir.join(format!("{}_report.txt", base)), report)?;

    Ok(())
}

/// Load the source image from a file, or synthesize the uniform-random one.
fn load_source(cli: &Cli) -> Result<(GrayImage, String), Box<dyn std::error::Error>> {
    if let Some(spec) = &cli.synthetic {
        let (w, h) = parse_size(spec)?;
        let mut noise = match cli.seed {
            Some(seed) => WhiteNoise::seeded(seed),
            None => WhiteNoise::new(),
        };
        let mut img = GrayImage::new(w, h)?;
        for y in 0..h {
            for x in 0..w {
                img.set_unchecked(x, y, (noise.sample(x, y) * 256.0) as u8);
            }
        }
        return Ok((img, "rng".to_string()));
    }

    // clap guarantees the path is present when --synthetic is absent
    let path = cli.image.as_deref().unwrap_or(Path::new(""));
    let img = read_gray(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let base = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok((img, base))
}

fn parse_size(spec: &str) -> Result<(u32, u32), String> {
    let (w, h) = spec
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", spec))?;
    let w: u32 = w.parse().map_err(|_| format!("bad width in '{}'", spec))?;
    let h: u32 = h.parse().map_err(|_| format!("bad height in '{}'", spec))?;
    if w == 0 || h == 0 {
        return Err(format!("size must be non-zero, got '{}'", spec));
    }
    Ok((w, h))
}

/// `AAT` at scale 1, `AAT_16x` at scale 16, and so on.
fn scaled_label(stem: &str, scale: u32) -> String {
    if scale > 1 {
        format!("{}_{}x", stem, scale)
    } else {
        stem.to_string()
    }
}

/// `{base}_{radius}.png` for the direct blur, `{base}_{radius}_{variant}.png`
/// for the table-backed ones.
fn out_path(dir: &Path, base: &str, radius: u32, variant: Option<&str>) -> PathBuf {
    match variant {
        Some(v) => dir.join(format!("{}_{}_{}.png", base, radius, v)),
        None => dir.join(format!("{}_{}.png", base, radius)),
    }
}
