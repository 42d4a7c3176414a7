//! PDF-backed page sources using lopdf.
//!
//! `PdfSource` wraps an open document and answers two questions per
//! page index: what text does the page carry (reading order) and which
//! raster images are embedded on it (encounter order). All PDF
//! structure handling lives here; the rest of the crate only sees
//! strings and [`PageImage`]s.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect;
use crate::error::{Error, Result};

use super::PageImage;

/// An open PDF document serving page text and page images.
pub struct PdfSource {
    doc: LopdfDocument,
    page_ids: Vec<lopdf::ObjectId>,
    filename: String,
}

impl PdfSource {
    /// Open a PDF file.
    ///
    /// Fails with [`Error::FileNotFound`] when the path does not
    /// resolve to a file, and [`Error::UnknownFormat`] when the file is
    /// not a PDF.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        detect::detect_pdf_version(path)?;

        let doc = LopdfDocument::load(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::from_document(doc, filename))
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8], filename: impl Into<String>) -> Result<Self> {
        detect::detect_pdf_version_from_bytes(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc, filename.into()))
    }

    fn from_document(doc: LopdfDocument, filename: String) -> Self {
        // get_pages returns a BTreeMap keyed by 1-based page number, so
        // values() is already in page order.
        let page_ids = doc.get_pages().values().copied().collect();
        Self {
            doc,
            page_ids,
            filename,
        }
    }

    /// Base filename of the source document.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Plain text of the page at the given 0-based index.
    pub fn page_text(&self, index: usize) -> Result<String> {
        let page_number = self.page_number(index)?;
        self.doc
            .extract_text(&[page_number])
            .map_err(|e| Error::TextExtract(format!("page {}: {}", page_number, e)))
    }

    /// Embedded raster images of the page at the given 0-based index,
    /// in encounter order.
    ///
    /// Images whose pixel data cannot be decoded (unsupported filter or
    /// bit depth) are skipped with a debug log; they never fault the
    /// page.
    pub fn page_images(&self, index: usize) -> Result<Vec<PageImage>> {
        let page_number = self.page_number(index)?;
        let page_id = self.page_ids[index];

        let mut images = Vec::new();
        for (name, stream) in self.image_xobjects(page_id) {
            match self.decode_image(&stream) {
                Some(img) => images.push(img),
                None => {
                    log::debug!(
                        "skipping undecodable image {} on page {}",
                        String::from_utf8_lossy(&name),
                        page_number
                    );
                }
            }
        }
        Ok(images)
    }

    fn page_number(&self, index: usize) -> Result<u32> {
        if index >= self.page_ids.len() {
            return Err(Error::PageOutOfRange(
                index as u32 + 1,
                self.page_ids.len() as u32,
            ));
        }
        Ok(index as u32 + 1)
    }

    /// Collect the image XObject streams referenced by a page's
    /// resources, in dictionary order.
    fn image_xobjects(&self, page_id: lopdf::ObjectId) -> Vec<(Vec<u8>, lopdf::Stream)> {
        let mut streams = Vec::new();

        let Ok(page_dict) = self.doc.get_dictionary(page_id) else {
            return streams;
        };
        let Ok(res) = page_dict.get(b"Resources") else {
            return streams;
        };
        let res_dict = match res {
            lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            lopdf::Object::Dictionary(d) => Some(d),
            _ => None,
        };
        let Some(res_dict) = res_dict else {
            return streams;
        };
        let Ok(xobjects) = res_dict.get(b"XObject") else {
            return streams;
        };
        let xobj_dict = match xobjects {
            lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            lopdf::Object::Dictionary(d) => Some(d),
            _ => None,
        };
        let Some(xobj_dict) = xobj_dict else {
            return streams;
        };

        for (name, obj) in xobj_dict.iter() {
            let Ok(obj_ref) = obj.as_reference() else {
                continue;
            };
            let Ok(lopdf::Object::Stream(stream)) = self.doc.get_object(obj_ref) else {
                continue;
            };
            let is_image = stream
                .dict
                .get(b"Subtype")
                .ok()
                .and_then(|s| s.as_name_str().ok())
                == Some("Image");
            if is_image {
                streams.push((name.clone(), stream.clone()));
            }
        }

        streams
    }

    /// Decode one image XObject stream into pixel data.
    ///
    /// Supported encodings: DCTDecode (JPEG, kept compressed) and
    /// FlateDecode or unfiltered 8-bit raw samples. Anything else
    /// yields `None`.
    fn decode_image(&self, stream: &lopdf::Stream) -> Option<PageImage> {
        let dict = &stream.dict;

        let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
        let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;
        let channels = self.color_channels(dict.get(b"ColorSpace").ok());

        let filter = primary_filter(dict);
        match filter.as_deref() {
            Some("DCTDecode") => Some(PageImage::from_jpeg(
                width,
                height,
                channels.unwrap_or(3),
                stream.content.clone(),
            )),
            Some("FlateDecode") | None => {
                let bits = dict
                    .get(b"BitsPerComponent")
                    .ok()
                    .and_then(|b| b.as_i64().ok())
                    .unwrap_or(8);
                if bits != 8 {
                    return None;
                }
                let channels = channels?;
                let samples = if filter.is_some() {
                    stream.decompressed_content().ok()?
                } else {
                    stream.content.clone()
                };
                Some(PageImage::from_raw(width, height, channels, samples))
            }
            _ => None,
        }
    }

    /// Number of color components implied by a ColorSpace entry.
    fn color_channels(&self, cs: Option<&lopdf::Object>) -> Option<u8> {
        match cs? {
            lopdf::Object::Name(name) => match name.as_slice() {
                b"DeviceGray" | b"CalGray" => Some(1),
                b"DeviceRGB" | b"CalRGB" => Some(3),
                b"DeviceCMYK" => Some(4),
                _ => None,
            },
            lopdf::Object::Reference(r) => {
                self.color_channels(self.doc.get_object(*r).ok())
            }
            lopdf::Object::Array(arr) => {
                let family = arr.first()?.as_name_str().ok()?;
                match family {
                    "ICCBased" => {
                        // Component count lives in the ICC stream's /N.
                        let stream_ref = arr.get(1)?.as_reference().ok()?;
                        let obj = self.doc.get_object(stream_ref).ok()?;
                        if let lopdf::Object::Stream(s) = obj {
                            let n = s.dict.get(b"N").ok()?.as_i64().ok()?;
                            u8::try_from(n).ok()
                        } else {
                            None
                        }
                    }
                    "CalGray" => Some(1),
                    "CalRGB" | "Lab" => Some(3),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// First filter name applied to a stream, if any.
fn primary_filter(dict: &lopdf::Dictionary) -> Option<String> {
    match dict.get(b"Filter").ok()? {
        lopdf::Object::Name(n) => Some(String::from_utf8_lossy(n).into_owned()),
        lopdf::Object::Array(arr) => arr
            .first()
            .and_then(|o| o.as_name_str().ok())
            .map(String::from),
        _ => None,
    }
}
