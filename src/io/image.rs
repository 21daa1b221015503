//! Texture loading and variation export

use crate::io::configuration::OUTPUT_INFIX;
use crate::io::error::{Result, VariationError};
use crate::variation::pool::BaseTexture;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Load a base texture, naming it after the source file stem
///
/// Decoding is delegated to the image codec; whatever formats it recognizes
/// are accepted. The decoded image is normalized to three channels.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn load_texture(path: &Path) -> Result<BaseTexture> {
    let decoded = image::open(path).map_err(|e| VariationError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(BaseTexture {
        name,
        image: decoded.to_rgb8(),
    })
}

/// Output filename for one variation of a named texture
pub fn variation_filename(texture_name: &str, index: u32) -> String {
    format!("{texture_name}{OUTPUT_INFIX}{index}.png")
}

/// Save a variation under the output directory, creating it on demand
///
/// # Errors
///
/// Returns `FileSystem` if the output directory cannot be created and
/// `ImageExport` if encoding or writing the file fails.
pub fn export_variation(
    image: &RgbImage,
    output_dir: &Path,
    texture_name: &str,
    index: u32,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| VariationError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let output_path = output_dir.join(variation_filename(texture_name, index));
    image
        .save(&output_path)
        .map_err(|e| VariationError::ImageExport {
            path: output_path.clone(),
            source: e,
        })?;

    Ok(output_path)
}
