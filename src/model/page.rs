//! Page-level types.

use serde::{Deserialize, Serialize};

/// Extraction result for a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// Page number (1-based)
    pub page_number: u32,

    /// Raw page text in reading order
    pub text: String,

    /// Paths of the image files saved from this page
    pub images: Vec<String>,

    /// Number of questions parsed from this page's text
    pub questions_found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_field_names() {
        let page = PageResult {
            page_number: 1,
            text: "1. Q".to_string(),
            images: vec!["extracted_content/images/page1_image1.png".to_string()],
            questions_found: 1,
        };
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["page_number"], 1);
        assert_eq!(json["questions_found"], 1);
        assert_eq!(json["images"].as_array().unwrap().len(), 1);
    }
}
