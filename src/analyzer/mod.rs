//! Document analysis pipeline.
//!
//! [`DocumentAnalyzer`] drives the perception collaborators over page
//! images and reconstructs the results into the document model. The
//! pipeline is split in two:
//!
//! 1. `observe`: the perception pass. Sequential per page, since
//!    collaborators may hold mutable runtime state and are not assumed
//!    reentrant.
//! 2. `reconstruct_page`: pure fusion and assembly over a
//!    [`PageObservation`]. Safe to fan out across pages, and usable on
//!    recorded observations with no model present.

pub mod assemble;
pub mod batch;
pub mod fusion;
pub mod recognition;

pub use assemble::{assemble_document, assemble_page};
pub use batch::{analyze_directory, collect_source_files, BatchOutcome};
pub use fusion::{fuse, PageLayout};
pub use recognition::{decode_lines, TextRecognition};

use image::RgbImage;
use log::debug;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::Quad;
use crate::model::{Document, Page};
use crate::perception::{
    PageObservation, RegionDetector, TableStructureRecognizer, TextRecognizer,
};

/// Orchestrates perception, fusion, and assembly for images and documents.
pub struct DocumentAnalyzer {
    regions: Box<dyn RegionDetector + Send + Sync>,
    tables: Box<dyn TableStructureRecognizer + Send + Sync>,
    text: Box<dyn TextRecognizer + Send + Sync>,
}

impl DocumentAnalyzer {
    /// Create an analyzer over the given collaborators.
    pub fn new(
        regions: Box<dyn RegionDetector + Send + Sync>,
        tables: Box<dyn TableStructureRecognizer + Send + Sync>,
        text: Box<dyn TextRecognizer + Send + Sync>,
    ) -> Self {
        Self {
            regions,
            tables,
            text,
        }
    }

    /// Run the perception pass over one page image.
    ///
    /// The table-grid recognizer is invoked on the detected table boxes
    /// and the text recognizer on the detected paragraph boxes, so the
    /// index correspondence the reconstruction stage relies on holds by
    /// construction.
    pub fn observe(&self, image: &RgbImage) -> Result<PageObservation> {
        let regions = self.regions.detect(image)?;
        debug!(
            "detected {} paragraphs, {} tables, {} figures",
            regions.paragraphs.len(),
            regions.tables.len(),
            regions.figures.len()
        );

        let table_boxes: Vec<_> = regions.tables.iter().map(|t| t.box_).collect();
        let grids = self.tables.recognize(image, &table_boxes)?;

        let quads: Vec<Quad> = regions
            .paragraphs
            .iter()
            .map(|p| Quad::from_rect(&p.box_))
            .collect();
        let lines = self.text.recognize(image, &quads)?;

        Ok(PageObservation {
            regions,
            grids,
            lines,
        })
    }

    /// Reconstruct one page from a perception observation.
    ///
    /// Pure: no collaborator is touched, so recorded observations can be
    /// replayed through this path.
    pub fn reconstruct_page(observation: PageObservation, page_index: usize) -> Result<Page> {
        let text = decode_lines(&observation.lines)?;
        let layout = fuse(observation.regions, observation.grids)?;
        assemble_page(layout, &text, page_index)
    }

    /// Analyze a single page image.
    pub fn analyze(&self, image: &RgbImage) -> Result<Page> {
        let observation = self.observe(image)?;
        Self::reconstruct_page(observation, 0)
    }

    /// Analyze a multi-page source.
    ///
    /// Perception runs page by page; reconstruction fans out over the
    /// collected observations, which share no state. Any page error is
    /// wrapped as [`Error::PageFailure`] and aborts the whole document;
    /// no partial [`Document`] is returned.
    pub fn analyze_document(&self, images: &[RgbImage]) -> Result<Document> {
        let mut observations = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let observation = self
                .observe(image)
                .map_err(|e| Error::page_failure(index, e))?;
            observations.push(observation);
        }

        let pages = observations
            .into_par_iter()
            .enumerate()
            .map(|(index, observation)| {
                Self::reconstruct_page(observation, index)
                    .map_err(|e| Error::page_failure(index, e))
            })
            .collect::<Result<Vec<Page>>>()?;

        Ok(assemble_document(pages))
    }
}
