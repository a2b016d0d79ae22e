//! Image upload side-channel. Stores a file under a caller-supplied name
//! in the image directory; it never touches the data model. Uploaded
//! files are served back under /images.

use std::path::PathBuf;

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};

use quill_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};

/// Directory uploads are written to, shared as app data.
#[derive(Debug, Clone)]
pub struct ImageDir(pub PathBuf);

#[derive(Debug, MultipartForm)]
pub struct UploadForm {
    #[multipart(limit = "10MB")]
    pub file: TempFile,
    pub name: Text<String>,
}

/// POST /api/upload
pub async fn upload(
    image_dir: web::Data<ImageDir>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> AppResult<HttpResponse> {
    let name = form.name.0;

    // plain file names only, the target must stay inside the image dir
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(AppError::BadRequest("Invalid file name".to_string()));
    }

    let dest = image_dir.0.join(&name);
    std::fs::copy(form.file.file.path(), &dest)
        .map_err(|e| AppError::Internal(format!("Storing upload failed: {e}")))?;

    tracing::debug!(file = %name, "Image stored");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "File has been uploaded")))
}
