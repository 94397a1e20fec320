use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glyphcut::{
    crop_glyphs, discover_sheets, pack_horizontal, segment, unpack_sheet,
    CharAssignment, FontDescriptor, FrameManifest, RotationDirection, DEFAULT_GLYPH_MARGIN,
    DEFAULT_MIN_WIDTH, DEFAULT_SPACING,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::sink::DirFrameSink;
mod console;
mod sink;

const CHARS_DIR: &str = "chars";
const MAPPING_FILE: &str = "mapping.txt";
const ATLAS_FILE: &str = "font.png";
const FONT_FILE: &str = "font.fnt";

#[derive(Parser)]
#[command(
    name = "glyphcut",
    about = "Build BMFont atlases from glyph strips and unpack sprite sheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Cut a glyph strip into characters and build font.png + font.fnt
    Cut {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Characters in strip order, one per glyph
        #[arg(long, conflicts_with = "mapping")]
        char_order: Option<String>,
        /// Filled in mapping.txt
        #[arg(long)]
        mapping: Option<PathBuf>,
        /// Only cut glyphs and write a mapping template
        #[arg(long)]
        only_cut: bool,
        #[arg(long, default_value_t = DEFAULT_MIN_WIDTH)]
        min_width: u32,
        /// Extra columns kept on each side of a glyph
        #[arg(long, default_value_t = DEFAULT_GLYPH_MARGIN)]
        glyph_margin: u32,
        /// Gap between glyphs in the atlas
        #[arg(long, default_value_t = DEFAULT_SPACING)]
        spacing: u32,
    },
    /// Print the glyph boxes detected in a strip
    Inspect {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MIN_WIDTH)]
        min_width: u32,
    },
    /// Extract the frames of one sprite sheet
    Unpack {
        #[arg(short, long)]
        manifest: PathBuf,
        /// Sheet image, defaults to the manifest's sibling .png
        #[arg(short, long)]
        sheet: Option<PathBuf>,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, value_enum, default_value = "ccw")]
        rotation: Rotation,
    },
    /// Extract every manifest/sheet pair found in a directory
    UnpackDir {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, value_enum, default_value = "ccw")]
        rotation: Rotation,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Rotation {
    Ccw,
    Cw,
}

impl From<Rotation> for RotationDirection {
    fn from(r: Rotation) -> Self {
        match r {
            Rotation::Ccw => RotationDirection::CounterClockwise,
            Rotation::Cw => RotationDirection::Clockwise,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();
    match cli.command {
        Cmd::Cut {
            input,
            output,
            char_order,
            mapping,
            only_cut,
            min_width,
            glyph_margin,
            spacing,
        } => {
            let image = image::open(&input)
                .with_context(|| format!("failed to open {}", input.display()))?;
            let boxes = segment(&image, min_width);
            let crops = crop_glyphs(&image, &boxes, glyph_margin);

            let chars_dir = output.join(CHARS_DIR);
            fs::create_dir_all(&chars_dir)
                .with_context(|| format!("failed to create {}", chars_dir.display()))?;
            for (idx, crop) in crops.iter().enumerate() {
                let path = chars_dir.join(format!("char_{idx}.png"));
                crop.save(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            log::info!("cut {} glyphs into {}", crops.len(), chars_dir.display());

            let chars = match (char_order, mapping) {
                (Some(order), _) if !only_cut => CharAssignment::from_order(&order, crops.len())?,
                (_, Some(path)) if !only_cut => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    CharAssignment::from_mapping(&text, crops.len())
                        .with_context(|| format!("invalid mapping {}", path.display()))?
                }
                _ => {
                    let path = output.join(MAPPING_FILE);
                    fs::write(&path, glyphcut::mapping::template(crops.len()))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    log::info!("mapping template written to {}", path.display());
                    log::info!("fill in the mapping and run again with --mapping");
                    return Ok(());
                }
            };

            let atlas = pack_horizontal(&crops, spacing)?;
            let atlas_path = output.join(ATLAS_FILE);
            atlas
                .image
                .save(&atlas_path)
                .with_context(|| format!("failed to write {}", atlas_path.display()))?;

            let descriptor =
                FontDescriptor::new(&atlas.placements, &chars, atlas.line_height(), ATLAS_FILE)?;
            let fnt_path = output.join(FONT_FILE);
            fs::write(&fnt_path, descriptor.to_string())
                .with_context(|| format!("failed to write {}", fnt_path.display()))?;
            log::info!(
                "wrote {} ({}x{}) and {}",
                atlas_path.display(),
                atlas.width(),
                atlas.height(),
                fnt_path.display()
            );
        }
        Cmd::Inspect { input, min_width } => {
            let image = image::open(&input)
                .with_context(|| format!("failed to open {}", input.display()))?;
            let boxes = segment(&image, min_width);
            print!("{}", console::glyph_table(&boxes));
        }
        Cmd::Unpack {
            manifest,
            sheet,
            output,
            rotation,
        } => {
            let sheet = sheet.unwrap_or_else(|| glyphcut::discover::sheet_for(&manifest));
            unpack_one(&manifest, &sheet, &output, rotation.into())?;
        }
        Cmd::UnpackDir {
            dir,
            output,
            rotation,
        } => {
            let found = discover_sheets(&dir)
                .with_context(|| format!("failed to scan {}", dir.display()))?;
            for manifest in &found.unmatched {
                log::warn!("no sheet image for {}, skipping", manifest.display());
            }
            for pair in &found.pairs {
                unpack_one(&pair.manifest, &pair.sheet, &output, rotation.into())?;
            }
        }
    }
    Ok(())
}

/// Extracts one sheet into `<output>/<manifest stem>/`.
fn unpack_one(
    manifest: &Path,
    sheet: &Path,
    output: &Path,
    direction: RotationDirection,
) -> Result<()> {
    let frames = FrameManifest::load(manifest)
        .with_context(|| format!("failed to load {}", manifest.display()))?;
    let image = image::open(sheet)
        .with_context(|| format!("failed to open {}", sheet.display()))?
        .to_rgba8();
    let stem = manifest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut sink = DirFrameSink::create(output.join(stem))?;
    let report = unpack_sheet(&image, &frames, direction, &mut sink)
        .with_context(|| format!("failed to unpack {}", manifest.display()))?;
    if !report.skipped.is_empty() {
        log::warn!("{}", console::skipped_frames(&report.skipped));
    }
    log::info!(
        "{}: {} frames written, {} skipped",
        manifest.display(),
        report.written,
        report.skipped.len()
    );
    Ok(())
}
