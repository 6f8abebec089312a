//! TNL Converter CLI
//!
//! Command-line interface for converting console thumbnails and raw textures.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tnl::{Converter, ConverterConfig, Orientation, TnlFile};
use tracing::debug;

#[derive(Parser)]
#[command(name = "tnl")]
#[command(about = "Convert console TNL thumbnails and raw textures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML configuration file with conversion defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit an image into a TNL thumbnail
    ToTnl {
        /// Source image (JPEG, PNG, ...)
        input: PathBuf,

        /// Output TNL path (defaults to the input with a .tnl extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target profile: wide, normal or auto
        #[arg(long)]
        orientation: Option<Orientation>,

        /// Crop to fill the profile instead of letterboxing
        #[arg(long, overrides_with = "no_clip")]
        clip: bool,

        /// Letterbox even if the config enables clipping
        #[arg(long, overrides_with = "clip")]
        no_clip: bool,

        /// Trim uniform borders before fitting
        #[arg(long, overrides_with = "no_autocrop")]
        autocrop: bool,

        /// Keep borders even if the config enables autocrop
        #[arg(long, overrides_with = "autocrop")]
        no_autocrop: bool,
    },

    /// Extract the JPEG from a TNL thumbnail
    ToJpeg {
        /// Input TNL file
        input: PathBuf,

        /// Output JPEG path (defaults to the input with a .jpg extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a raw tiled texture into two images
    RawDecode {
        /// Raw texture buffer
        input: PathBuf,

        /// Output path for the tall region
        #[arg(long)]
        tall: PathBuf,

        /// Output path for the strip region
        #[arg(long)]
        strip: PathBuf,

        /// Trim uniform borders from the exported images
        #[arg(long, overrides_with = "no_autocrop")]
        autocrop: bool,

        /// Keep borders even if the config enables export autocrop
        #[arg(long, overrides_with = "autocrop")]
        no_autocrop: bool,
    },

    /// Encode two images into a raw tiled texture
    RawEncode {
        /// Image for the tall region (216x168 on screen)
        #[arg(long)]
        tall: PathBuf,

        /// Image for the strip region (240x32 on screen)
        #[arg(long)]
        strip: PathBuf,

        /// Output raw texture path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Check TNL or JPEG files for the broken-encoder fingerprint
    Check {
        /// Files to check
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show the header of a TNL file
    Info {
        /// Input TNL file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::ToTnl {
            input,
            output,
            orientation,
            clip,
            no_clip,
            autocrop,
            no_autocrop,
        } => {
            let mut config = config;
            if let Some(orientation) = orientation {
                config.fit.orientation = orientation;
            }
            config.fit.clip = flag_override(clip, no_clip).unwrap_or(config.fit.clip);
            config.fit.autocrop =
                flag_override(autocrop, no_autocrop).unwrap_or(config.fit.autocrop);
            to_tnl_command(config, &input, output)
        }
        Commands::ToJpeg { input, output } => to_jpeg_command(config, &input, output),
        Commands::RawDecode {
            input,
            tall,
            strip,
            autocrop,
            no_autocrop,
        } => {
            let mut config = config;
            config.export_autocrop =
                flag_override(autocrop, no_autocrop).unwrap_or(config.export_autocrop);
            Converter::new(config)
                .raw_to_images(&input, &tall, &strip)
                .with_context(|| format!("Failed to decode raw texture {}", input.display()))?;
            println!(
                "✓ Decoded {} -> {}, {}",
                input.display(),
                tall.display(),
                strip.display()
            );
            Ok(())
        }
        Commands::RawEncode {
            tall,
            strip,
            output,
        } => {
            Converter::new(config)
                .images_to_raw(&tall, &strip, &output)
                .context("Failed to encode raw texture")?;
            println!("✓ Encoded raw texture {}", output.display());
            Ok(())
        }
        Commands::Check { inputs } => check_command(config, &inputs),
        Commands::Info { input } => info_command(&input),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ConverterConfig> {
    match path {
        Some(path) => {
            let config = ConverterConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            debug!("Loaded configuration from {}: {:?}", path.display(), config);
            Ok(config)
        }
        None => Ok(ConverterConfig::default()),
    }
}

/// Value forced by a `--flag` / `--no-flag` pair, if either was given
fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// `input` with its extension replaced
fn default_output(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

fn to_tnl_command(config: ConverterConfig, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| default_output(input, "tnl"));
    let fitted = Converter::new(config)
        .jpeg_to_tnl(input, &output)
        .with_context(|| format!("Failed to convert {} to TNL", input.display()))?;

    match fitted.quality {
        Some(quality) => println!(
            "✓ {} -> {} ({}, re-encoded at quality {}, {} bytes)",
            input.display(),
            output.display(),
            fitted.profile,
            quality,
            fitted.jpeg.len()
        ),
        None => println!(
            "✓ {} -> {} ({}, JPEG kept as is, {} bytes)",
            input.display(),
            output.display(),
            fitted.profile,
            fitted.jpeg.len()
        ),
    }
    Ok(())
}

fn to_jpeg_command(config: ConverterConfig, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| default_output(input, "jpg"));
    let len = Converter::new(config)
        .tnl_to_jpeg(input, &output)
        .with_context(|| format!("Failed to extract JPEG from {}", input.display()))?;
    println!(
        "✓ {} -> {} ({} bytes)",
        input.display(),
        output.display(),
        len
    );
    Ok(())
}

fn check_command(config: ConverterConfig, inputs: &[PathBuf]) -> Result<()> {
    let converter = Converter::new(config);
    let mut broken = 0;
    for input in inputs {
        let report = converter
            .check(input)
            .with_context(|| format!("Failed to check {}", input.display()))?;
        if report.broken {
            broken += 1;
        }
        println!("{}: {}", input.display(), report);
    }
    if broken > 0 {
        println!("⚠ {} of {} files are broken", broken, inputs.len());
    }
    Ok(())
}

fn info_command(input: &Path) -> Result<()> {
    let data =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let size = data.len();
    let file = TnlFile::from_bytes(data)
        .with_context(|| format!("{} is not a TNL file", input.display()))?;
    let header = file.header();

    println!("File: {}", input.display());
    println!("  Size: {} bytes (expected {})", size, tnl::TNL_SIZE);
    println!(
        "  Checksum: {:#010x} ({})",
        header.checksum,
        if file.is_checksum_valid() { "ok" } else { "mismatch" }
    );
    println!("  JPEG length: {} bytes", header.length);
    println!("  Broken: {}", if file.is_broken() { "yes" } else { "no" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_to_tnl() {
        let cli = Cli::try_parse_from([
            "tnl",
            "to-tnl",
            "shot.png",
            "--orientation",
            "wide",
            "--clip",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::ToTnl {
                input,
                output,
                orientation,
                clip,
                no_clip,
                autocrop,
                no_autocrop,
            } => {
                assert_eq!(input, PathBuf::from("shot.png"));
                assert!(output.is_none());
                assert_eq!(orientation, Some(Orientation::Wide));
                assert_eq!(flag_override(clip, no_clip), Some(true));
                assert_eq!(flag_override(autocrop, no_autocrop), None);
            }
            _ => panic!("expected to-tnl"),
        }
    }

    #[test]
    fn test_no_clip_overrides_config() {
        let cli = Cli::try_parse_from([
            "tnl",
            "to-tnl",
            "shot.png",
            "--no-clip",
            "--no-autocrop",
        ])
        .unwrap();
        match cli.command {
            Commands::ToTnl {
                clip,
                no_clip,
                autocrop,
                no_autocrop,
                ..
            } => {
                assert_eq!(flag_override(clip, no_clip), Some(false));
                assert_eq!(flag_override(autocrop, no_autocrop), Some(false));
            }
            _ => panic!("expected to-tnl"),
        }
    }

    #[test]
    fn test_last_flag_wins() {
        let cli =
            Cli::try_parse_from(["tnl", "to-tnl", "shot.png", "--clip", "--no-clip"]).unwrap();
        match cli.command {
            Commands::ToTnl { clip, no_clip, .. } => {
                assert_eq!(flag_override(clip, no_clip), Some(false));
            }
            _ => panic!("expected to-tnl"),
        }
    }

    #[test]
    fn test_flag_override() {
        assert_eq!(flag_override(false, false), None);
        assert_eq!(flag_override(true, false), Some(true));
        assert_eq!(flag_override(false, true), Some(false));
    }

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(Path::new("dir/shot.png"), "tnl"),
            PathBuf::from("dir/shot.tnl")
        );
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tnl.yaml");
        std::fs::write(&path, "orientation: normal\nclip: true\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.fit.orientation, Orientation::Normal);
        assert!(config.fit.clip);
        assert_eq!(load_config(None).unwrap(), ConverterConfig::default());
    }
}
