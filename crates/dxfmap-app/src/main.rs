//! DXFMAP 命令行入口
//! 将 DXF 平面图转换为 GeoJSON 或 OSM XML

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dxfmap_core::units::Unit;
use dxfmap_file::{convert_directory, dxf_to_geojson, dxf_to_osm, OsmConfig};

#[derive(Parser, Debug)]
#[command(name = "dxfmap", version, about = "Convert DXF floor plans to GeoJSON or OSM XML")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a DXF file to a GeoJSON FeatureCollection
    Geojson {
        /// Input DXF file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output GeoJSON file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Convert a DXF file to OSM XML with deduplicated nodes
    Osm {
        /// Input DXF file [default: <INPUT_DIR>/sample.dxf]
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output OSM file [default: <OUTPUT_DIR>/<input stem>.osm]
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Drawing unit written to the `unit` tag (mm, cm, m, ft)
        #[arg(short, long, default_value_t = Unit::Mm)]
        unit: Unit,

        /// Input directory
        #[arg(long, value_name = "DIR", default_value = "DXF")]
        input_dir: PathBuf,

        /// Output directory
        #[arg(long, value_name = "DIR", default_value = "OSM")]
        output_dir: PathBuf,

        /// Convert every .dxf file in the input directory
        #[arg(long, conflicts_with_all = ["input", "output"])]
        all: bool,
    },
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Geojson { input, output } => {
            let count = dxf_to_geojson(&input, &output)
                .with_context(|| format!("Failed to convert {} to GeoJSON", input.display()))?;
            info!("Features written: {}", count);
        }

        Command::Osm {
            input,
            output,
            unit,
            input_dir,
            output_dir,
            all,
        } => {
            let config = OsmConfig {
                unit,
                input_dir,
                output_dir,
            };

            if all {
                let results = convert_directory(&config).with_context(|| {
                    format!("Failed to convert directory {}", config.input_dir.display())
                })?;
                info!("Converted {} file(s)", results.len());
                return Ok(());
            }

            let input = input.unwrap_or_else(|| config.default_input());
            let output = match output {
                Some(path) => path,
                None => config.output_for(&input)?,
            };
            dxf_to_osm(&input, &output, config.unit)
                .with_context(|| format!("Failed to convert {} to OSM", input.display()))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(FmtSubscriber::builder().with_max_level(level).finish())?;

    run(cli.command)
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
    fn test_parse_geojson() {
        let cli = Cli::try_parse_from(["dxfmap", "geojson", "in.dxf", "out.geojson"]).unwrap();
        match cli.command {
            Command::Geojson { input, output } => {
                assert_eq!(input, PathBuf::from("in.dxf"));
                assert_eq!(output, PathBuf::from("out.geojson"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_osm_defaults() {
        let cli = Cli::try_parse_from(["dxfmap", "osm"]).unwrap();
        match cli.command {
            Command::Osm {
                input,
                unit,
                input_dir,
                all,
                ..
            } => {
                assert!(input.is_none());
                assert_eq!(unit, Unit::Mm);
                assert_eq!(input_dir, PathBuf::from("DXF"));
                assert!(!all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_osm_unit() {
        let cli = Cli::try_parse_from(["dxfmap", "-v", "osm", "plan.dxf", "--unit", "ft"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Osm { unit: Unit::Ft, .. }));

        assert!(Cli::try_parse_from(["dxfmap", "osm", "--unit", "yd"]).is_err());
    }
}
