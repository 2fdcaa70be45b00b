use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use recta_cli::config::RectaConfig;
use recta_cli::io;
use recta_cli::io::cli::Cli;
use recta_cli::io::comparison_to_svg::comparison_to_svg;
use recta_rs::relations::compare;

const SVG_FILE_NAME: &str = "draw.svg";

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            info!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RectaConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("Successfully parsed RectaConfig: {config:?}");

    let (r1, r2) = match recta_cli::build_rectangles(args.rectangle_values()?) {
        Ok(rectangles) => rectangles,
        Err(rejected) => {
            warn!("[MAIN] Declining to compare, {} invalid rectangle(s)", rejected.0.len());
            eprintln!("{rejected}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let result = compare(&r1, &r2);

    match (args.json, config.pretty_json) {
        (true, true) => println!("{}", serde_json::to_string_pretty(&result)?),
        (true, false) => println!("{}", serde_json::to_string(&result)?),
        (false, _) => println!("{result}"),
    }

    if args.draw {
        if !args.output_folder.exists() {
            fs::create_dir_all(&args.output_folder).with_context(|| {
                format!(
                    "could not create output folder: {}",
                    args.output_folder.display()
                )
            })?;
        }
        let svg = comparison_to_svg(&r1, &r2, &result, config.svg_draw_options);
        io::write_svg(&svg, &args.output_folder.join(SVG_FILE_NAME))?;
    }

    Ok(ExitCode::SUCCESS)
}
