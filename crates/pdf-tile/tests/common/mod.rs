#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, Stream};
use pdf_tile::layout::{Affine, CellBox};
use pdf_tile::render::{ImageHandle, OutputSink};
use pdf_tile::{SourceRaster, TileError};
use std::path::Path;

/// One call made on a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    Register,
    Draw(Affine),
    Guide(CellBox),
    Commit,
    Finalize,
}

/// Sink that records every command instead of writing anything
#[derive(Default)]
pub struct RecordingSink {
    pub commands: Vec<SinkCommand>,
    /// Fail the n-th draw (0-based) with an output error
    pub fail_on_draw: Option<usize>,
    draws: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_draw(index: usize) -> Self {
        Self {
            fail_on_draw: Some(index),
            ..Self::default()
        }
    }

    /// Commands grouped by page, split at commit and finalize
    pub fn pages(&self) -> Vec<Vec<SinkCommand>> {
        let mut pages = Vec::new();
        let mut current = Vec::new();
        for command in &self.commands {
            match command {
                SinkCommand::Commit | SinkCommand::Finalize => {
                    pages.push(std::mem::take(&mut current));
                }
                SinkCommand::Register => {}
                other => current.push(other.clone()),
            }
        }
        pages
    }

    pub fn count(&self, wanted: fn(&SinkCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| wanted(c)).count()
    }
}

impl OutputSink for RecordingSink {
    fn register_image(&mut self, raster: &SourceRaster) -> pdf_tile::Result<ImageHandle> {
        self.commands.push(SinkCommand::Register);
        Ok(ImageHandle {
            index: 0,
            width: raster.width,
            height: raster.height,
        })
    }

    fn draw_image(&mut self, _image: &ImageHandle, transform: &Affine) -> pdf_tile::Result<()> {
        if self.fail_on_draw == Some(self.draws) {
            return Err(TileError::OutputWrite(std::io::Error::other("disk full")));
        }
        self.draws += 1;
        self.commands.push(SinkCommand::Draw(*transform));
        Ok(())
    }

    fn stroke_guide(&mut self, cell: &CellBox) -> pdf_tile::Result<()> {
        self.commands.push(SinkCommand::Guide(*cell));
        Ok(())
    }

    fn commit_page(&mut self) -> pdf_tile::Result<()> {
        self.commands.push(SinkCommand::Commit);
        Ok(())
    }

    fn finalize(&mut self) -> pdf_tile::Result<()> {
        self.commands.push(SinkCommand::Finalize);
        Ok(())
    }
}

/// Build a blank PDF with `num_pages` Letter pages
pub fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");

    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a test PDF with `num_pages` pages to `path`
pub fn write_test_pdf(path: &Path, num_pages: usize) {
    let mut doc = create_test_pdf(num_pages);
    doc.save(path).unwrap();
}

/// Write a solid-colour RGB image; the format follows the extension
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    let image = image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 90]));
    image.save(path).unwrap();
}
