//! Page text and image sources backed by the PDF document.

mod image;
mod pdf;

pub use image::PageImage;
pub use pdf::PdfSource;
