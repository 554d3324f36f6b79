//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::PdfFile;

// ============================================================================
// Upload
// ============================================================================

/// Upload response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub status: &'static str,
    pub media_link: String,
}

// ============================================================================
// Listing
// ============================================================================

/// Catalog entry as listed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfFileDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub pdf: String,
}

impl From<PdfFile> for PdfFileDto {
    fn from(file: PdfFile) -> Self {
        Self {
            id: file.file_id.to_string(),
            title: file.title,
            pdf: file.pdf.as_str().to_string(),
        }
    }
}

/// File list response
#[derive(Debug, Clone, Serialize)]
pub struct FileListResponse {
    pub status: &'static str,
    pub data: Vec<PdfFileDto>,
}

// ============================================================================
// Signed Reads
// ============================================================================

/// Query string of a signed read URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignedReadQuery {
    pub expires: Option<String>,
    pub signature: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FileName;
    use serde_json::json;

    #[test]
    fn test_upload_response_shape() {
        let response = UploadResponse {
            status: "ok",
            media_link: "http://x/blob/assets/a.pdf".into(),
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"status": "ok", "mediaLink": "http://x/blob/assets/a.pdf"})
        );
    }

    #[test]
    fn test_file_dto_uses_underscore_id() {
        let file = PdfFile::new("Report".into(), FileName::new("a.pdf").unwrap());
        let id = file.file_id.to_string();
        let value = serde_json::to_value(PdfFileDto::from(file)).unwrap();
        assert_eq!(value, json!({"_id": id, "title": "Report", "pdf": "a.pdf"}));
    }
}
