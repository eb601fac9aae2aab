//! lopdf-backed output sink

use super::guides::cut_guide_ops;
use super::sink::{ImageHandle, OutputSink};
use super::xobject::create_image_xobject;
use crate::layout::{Affine, CellBox};
use crate::source::SourceRaster;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes tiled pages to a PDF file.
///
/// The output file is created as soon as the sink is, and stays exclusively
/// owned by it. Pages are assembled in memory and written by [`finalize`].
/// A sink dropped before finalizing closes and removes its file.
///
/// [`finalize`]: OutputSink::finalize
pub struct PdfSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    images: Vec<ObjectId>,
    content_ops: Vec<String>,
    page_width_pt: f32,
    page_height_pt: f32,
}

impl PdfSink {
    /// Create the output file and an empty document with pages of the given size
    pub fn create(
        path: impl AsRef<Path>,
        page_width_pt: f32,
        page_height_pt: f32,
    ) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let file = File::create(&path).map_err(|source| TileError::OutputCreate {
            path: path.clone(),
            source,
        })?;
        log::debug!("Created output {}", path.display());

        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            images: Vec::new(),
            content_ops: Vec::new(),
            page_width_pt,
            page_height_pt,
        })
    }

    /// Path of the file being written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pages committed so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.writer.is_none() {
            return Err(TileError::InvalidState("document already finalized"));
        }
        Ok(())
    }

    /// Matrix placing the PDF unit image square through `transform` onto the page
    fn placement_matrix(&self, image: &ImageHandle, transform: &Affine) -> Affine {
        // Image space: unit square with the first sample row at the top
        let unit_to_pixels = Affine::new(
            image.width as f32,
            0.0,
            0.0,
            -(image.height as f32),
            0.0,
            image.height as f32,
        );
        // Page space is y-down; PDF user space is y-up
        let flip = Affine::new(1.0, 0.0, 0.0, -1.0, 0.0, self.page_height_pt);

        unit_to_pixels.then(*transform).then(flip)
    }

    /// Turn the pending content operations into a page object
    fn write_page(&mut self) {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_width_pt),
                Object::Real(self.page_height_pt),
            ]),
        );

        // Every page can reference every registered image
        let mut xobjects = Dictionary::new();
        for (index, &id) in self.images.iter().enumerate() {
            xobjects.set(image_name(index).as_bytes(), Object::Reference(id));
        }
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = self.content_ops.concat();
        self.content_ops.clear();
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        log::debug!("Committed page {}", self.page_refs.len());
    }

    /// Add the page tree and catalog
    fn write_catalog(&mut self) {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(std::mem::take(&mut self.page_refs))),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));

        self.output.trailer.set("Root", catalog_id);
    }
}

/// Resource name of a registered image
fn image_name(index: usize) -> String {
    format!("Im{}", index)
}

impl OutputSink for PdfSink {
    fn register_image(&mut self, raster: &SourceRaster) -> Result<ImageHandle> {
        self.ensure_open()?;
        let id = create_image_xobject(&mut self.output, raster)?;
        self.images.push(id);

        Ok(ImageHandle {
            index: self.images.len() - 1,
            width: raster.width,
            height: raster.height,
        })
    }

    fn draw_image(&mut self, image: &ImageHandle, transform: &Affine) -> Result<()> {
        self.ensure_open()?;
        if image.index >= self.images.len() {
            return Err(TileError::InvalidState("image was not registered with this sink"));
        }

        let m = self.placement_matrix(image, transform);
        self.content_ops.push(format!(
            "q {} {} {} {} {} {} cm /{} Do Q\n",
            m.a,
            m.b,
            m.c,
            m.d,
            m.e,
            m.f,
            image_name(image.index)
        ));
        Ok(())
    }

    fn stroke_guide(&mut self, cell: &CellBox) -> Result<()> {
        self.ensure_open()?;
        self.content_ops
            .push(cut_guide_ops(cell, self.page_height_pt));
        Ok(())
    }

    fn commit_page(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.write_page();
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.write_page();
        let page_count = self.page_refs.len();
        self.write_catalog();

        let mut bytes = Vec::new();
        self.output.save_to(&mut bytes)?;

        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.write_all(&bytes).and_then(|()| writer.flush()) {
                drop(writer);
                let _ = std::fs::remove_file(&self.path);
                return Err(TileError::OutputWrite(e));
            }
        }

        log::info!("Wrote {} page(s) to {}", page_count, self.path.display());
        Ok(())
    }
}

impl Drop for PdfSink {
    fn drop(&mut self) {
        // Never finalized: close the handle and discard the partial file
        if let Some(writer) = self.writer.take() {
            drop(writer);
            match std::fs::remove_file(&self.path) {
                Ok(()) => log::warn!("Discarded unfinished output {}", self.path.display()),
                Err(e) => log::warn!(
                    "Could not remove unfinished output {}: {}",
                    self.path.display(),
                    e
                ),
            }
        }
    }
}
