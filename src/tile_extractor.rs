use std::{
    collections::HashMap,
    fs,
    fs::File,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use image::RgbImage;
use oxipng::{self, InFile, OutFile};
use tracing::debug;

use crate::{
    containers::tileset::TilesetArchive,
    error::Result,
    graphics::{decode_tile, RawTile},
    plugin,
};

/// Decode every record in an archive, preserving archive order.
///
/// Each surviving tile keeps its original archive index, so dropped records
/// leave gaps rather than renumbering everything after them.
pub fn decode_archive(data: &[u8]) -> Result<Vec<(usize, RgbImage)>> {
    let archive = TilesetArchive::from_bytes(data)?;
    debug!("archive contains {} records", archive.len());

    Ok(archive
        .iter()
        .enumerate()
        .filter_map(|(index, slice)| {
            let tile = RawTile::resolve(slice)?;
            decode_tile(&tile).map(|image| (index, image))
        })
        .collect())
}

pub struct TileExtractor {
    dav_path: PathBuf,
    dav_data: Vec<u8>,
}

impl TileExtractor {
    pub fn new<P: AsRef<Path>>(game_dir: P) -> io::Result<Self> {
        let dav_path = game_dir.as_ref().join(plugin::TILE_ARCHIVE_NAME);

        let mut dav_file = File::open(&dav_path)?;
        let mut dav_data = Vec::new();
        dav_file.read_to_end(&mut dav_data)?;

        Ok(TileExtractor { dav_path, dav_data })
    }

    /// Extract the tiles
    pub fn extract_tiles(&self) -> Result<Vec<(usize, RgbImage)>> {
        decode_archive(&self.dav_data)
    }

    /// Decode the archive and write one PNG per surviving tile, plus a JSON
    /// manifest of tile names and dimensions
    pub fn write_images(&self, output_dir: &Path, optimise: bool) -> Result<()> {
        fs::create_dir_all(output_dir)?;

        let tiles = self.extract_tiles()?;
        println!(
            "Decoded {} tiles from {}",
            tiles.len(),
            self.dav_path.display()
        );

        let mut manifest: HashMap<String, (u32, u32)> = HashMap::new();

        for (index, image) in &tiles {
            if image.width() == 0 || image.height() == 0 {
                debug!("skipping degenerate {}x{} tile {}", image.width(), image.height(), index);
                continue;
            }

            let name = format!("tile_{:03}", index);
            let png_path = output_dir.join(format!("{}.png", name));

            image.save(&png_path)?;

            if optimise {
                if let Err(e) = optimise_tile_png(&png_path) {
                    println!("Warning: PNG optimisation failed: {}", e);
                }
            }

            manifest.insert(name, (image.width(), image.height()));
        }

        save_manifest(&manifest, &output_dir.join("tiles.json"))?;

        println!("Wrote {} tiles to {}", manifest.len(), output_dir.display());
        Ok(())
    }
}

fn save_manifest(manifest: &HashMap<String, (u32, u32)>, path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(manifest)?;

    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    Ok(())
}

/// Optimises a PNG file using oxipng for better compression
fn optimise_tile_png(path: &Path) -> std::result::Result<(), String> {
    let temp_path = path.with_extension("temp.png");

    std::fs::rename(path, &temp_path).map_err(|e| format!("Failed to prepare temp file: {}", e))?;

    let mut options = oxipng::Options::from_preset(4);
    options.bit_depth_reduction = true;

    oxipng::optimize(
        &InFile::Path(temp_path.clone()),
        &OutFile::Path(Some(path.to_path_buf())),
        &options,
    )
    .map_err(|e| format!("PNG optimisation failed: {}", e))?;

    if let Err(e) = std::fs::remove_file(&temp_path) {
        println!("  Warning: Failed to remove temporary file: {}", e);
    }

    Ok(())
}
