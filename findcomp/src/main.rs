use anyhow::{Context, Result};
use clap::Parser;
use findcomp_io::{RenderMode, Rendered, read_pnm_file, render_components, write_pgm, write_ppm};
use findcomp_region::ImageProcessor;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Extract connected components from a PGM or PPM raster.
///
/// Pixels at or above the threshold are foreground; the foreground is
/// partitioned into 4-connected components which can be filtered by size,
/// printed, and rendered to PGM/PPM output files.
#[derive(Parser, Debug)]
#[command(name = "findcomp")]
#[command(about = "Extract connected components from a PGM/PPM raster")]
struct Args {
    /// Input PGM (P5) or PPM (P6) file
    input: PathBuf,

    /// Intensity threshold separating foreground from background
    #[arg(short, long, default_value_t = 128)]
    threshold: u8,

    /// Minimum pixel count for a component to be retained at extraction
    #[arg(short, long, default_value_t = 1)]
    min_size: usize,

    /// Keep only components whose size lies in [MIN, MAX] (inclusive)
    #[arg(short, long, num_args = 2, value_names = ["MIN", "MAX"])]
    filter: Option<Vec<usize>>,

    /// Print the id and size of every retained component
    #[arg(short, long)]
    print: bool,

    /// Write retained components as a white-on-black mask to <STEM>.pgm
    #[arg(short, long, value_name = "STEM")]
    write: Option<PathBuf>,

    /// Write the input with red bounding boxes drawn over it to <STEM>.ppm
    #[arg(short, long, value_name = "STEM")]
    boxes: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raster = read_pnm_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mut processor = ImageProcessor::new(raster);
    let extracted = processor.extract_components(args.threshold, args.min_size);
    println!("Extracted components: {extracted}");

    if let Some(range) = &args.filter {
        // clap guarantees exactly two values for --filter
        let remaining = processor.filter_components_by_size(range[0], range[1]);
        println!("Filtered components: {remaining}");
        if remaining == 0 {
            eprintln!("No components matched the size criteria");
        }
    }

    if args.print {
        for region in processor.regions() {
            println!(
                "Component ID: {}, Size: {} pixels.",
                region.id(),
                region.size()
            );
        }
    }

    if let Some(stem) = &args.write {
        let path = stem.with_extension("pgm");
        let Rendered::Gray(mask) =
            render_components(processor.raster(), processor.regions(), RenderMode::Mask)?
        else {
            anyhow::bail!("mask rendering produced a non-grayscale image");
        };
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_pgm(&mask, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote component mask to {}", path.display());
    }

    if let Some(stem) = &args.boxes {
        let path = stem.with_extension("ppm");
        let Rendered::Rgb(overlay) = render_components(
            processor.raster(),
            processor.regions(),
            RenderMode::Overlay { boxes: true },
        )?
        else {
            anyhow::bail!("overlay rendering produced a non-color image");
        };
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_ppm(
            overlay.width(),
            overlay.height(),
            overlay.data(),
            BufWriter::new(file),
        )
        .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote bounding box overlay to {}", path.display());
    }

    println!("Components: {}", processor.component_count());
    println!("Smallest: {}", processor.smallest_size());
    println!("Largest: {}", processor.largest_size());

    Ok(())
}
