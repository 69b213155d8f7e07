//! Figure crop export.
//!
//! Figures are exported as PNG crops of the source page image, scaled to
//! the configured thumbnail width. With `export_figure_letter` set, the
//! text-line regions lying inside each figure are cropped alongside it.

use std::fs;
use std::path::PathBuf;

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::model::Page;

use super::ExportOptions;

/// A figure crop written to disk, for inline referencing.
#[derive(Debug, Clone)]
pub(crate) struct FigureRef {
    /// Path of the written PNG
    pub path: PathBuf,

    /// Thumbnail width in pixels
    pub width: u32,
}

/// Write all figure crops of one page and return their references in
/// figure order.
pub(crate) fn export_page_figures(
    page: &Page,
    image: &RgbImage,
    options: &ExportOptions,
) -> Result<Vec<FigureRef>> {
    fs::create_dir_all(&options.figure_dir)?;

    let mut refs = Vec::with_capacity(page.figures.len());
    for (index, figure) in page.figures.iter().enumerate() {
        let crop = crop_region(image, &figure.box_);
        let thumb = thumbnail(&crop, options.figure_width);
        let path = options
            .figure_dir
            .join(format!("figure_p{}_{}.png", page.page_index + 1, index));
        thumb.save(&path)?;

        if options.export_figure_letter {
            let letters = page
                .paragraphs
                .iter()
                .filter(|p| figure.box_.contains(&p.box_));
            for (letter_index, paragraph) in letters.enumerate() {
                let letter_path = options.figure_dir.join(format!(
                    "figure_p{}_{}_letter_{}.png",
                    page.page_index + 1,
                    index,
                    letter_index
                ));
                crop_region(image, &paragraph.box_).save(&letter_path)?;
            }
        }

        refs.push(FigureRef {
            path,
            width: thumb.width(),
        });
    }

    Ok(refs)
}

/// Crop a box out of the page image, clamped to the image bounds.
fn crop_region(image: &RgbImage, box_: &BoundingBox) -> RgbImage {
    let x1 = (box_.x1.max(0.0) as u32).min(image.width().saturating_sub(1));
    let y1 = (box_.y1.max(0.0) as u32).min(image.height().saturating_sub(1));
    let x2 = (box_.x2.max(0.0) as u32).clamp(x1 + 1, image.width().max(x1 + 1));
    let y2 = (box_.y2.max(0.0) as u32).clamp(y1 + 1, image.height().max(y1 + 1));
    imageops::crop_imm(image, x1, y1, x2 - x1, y2 - y1).to_image()
}

/// Scale down to the target width, preserving aspect ratio. Crops already
/// narrower than the target are left untouched.
fn thumbnail(image: &RgbImage, width: u32) -> RgbImage {
    if width == 0 || image.width() <= width {
        return image.clone();
    }
    let height = ((image.height() as u64 * width as u64) / image.width() as u64).max(1) as u32;
    imageops::resize(image, width, height, FilterType::Triangle)
}
