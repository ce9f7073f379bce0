use crate::error::Result;
use image::RgbImage;
use log::info;
use std::path::Path;

/// Writes an 8-bit image; the format follows the file extension.
pub fn save_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image.save(path)?;
    info!(
        "Saved {}x{} image to '{}'.",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
