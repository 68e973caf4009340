//! File upload: client-side checks, the per-domain upload state machine and
//! the multipart request itself.
//!
//! ```text
//! Idle -> Uploading -> Succeeded { records_inserted, replaced }
//!                   \-> Failed { message }
//! Succeeded | Failed -> Idle   (next user action)
//! ```

use crate::shared::api_utils::post_multipart;
use crate::shared::error::{ApiError, UPLOAD_FAILED};
use contracts::shared::upload::UploadResponse;
use thiserror::Error;

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];
/// `accept` attribute for the file input
pub const ACCEPT_ATTR: &str = ".csv,.xlsx,.xls";

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Only CSV, XLSX, and XLS files are allowed.")]
    UnsupportedType,
    #[error("File is too large (max {max_mb}MB).")]
    TooLarge { max_mb: u64 },
}

/// Checked before any network call: extension allow-list, then size
pub fn validate_upload(file_name: &str, size_bytes: u64, max_bytes: u64) -> Result<(), UploadRejection> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadRejection::UnsupportedType);
    }
    if size_bytes > max_bytes {
        return Err(UploadRejection::TooLarge {
            max_mb: max_bytes / BYTES_PER_MB,
        });
    }
    Ok(())
}

/// Which dataset an upload feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadDomain {
    Sales,
    Ratings,
}

impl UploadDomain {
    pub fn upload_path(&self) -> &'static str {
        match self {
            UploadDomain::Sales => "/sales/upload",
            UploadDomain::Ratings => "/ratings/upload",
        }
    }

    /// Banner text after a successful upload; wording differs per page
    pub fn success_text(&self, records_inserted: u64, replaced: bool) -> String {
        match (self, replaced) {
            (UploadDomain::Sales, true) => {
                format!("Existing data replaced. {} records inserted.", records_inserted)
            }
            (UploadDomain::Sales, false) => {
                format!("File processed successfully. {} records inserted.", records_inserted)
            }
            (UploadDomain::Ratings, true) => {
                format!("Data replaced. {} records inserted.", records_inserted)
            }
            (UploadDomain::Ratings, false) => format!("{} records imported.", records_inserted),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Succeeded {
        records_inserted: u64,
        replaced: bool,
    },
    Failed {
        message: String,
    },
}

impl UploadState {
    /// Enter `Uploading`. Refused while another upload is in flight.
    pub fn start(&mut self) -> bool {
        if self.is_uploading() {
            return false;
        }
        *self = UploadState::Uploading;
        true
    }

    /// Settle an in-flight upload. Ignored when nothing is uploading.
    pub fn finish(&mut self, result: Result<UploadResponse, ApiError>) -> bool {
        if !self.is_uploading() {
            return false;
        }
        *self = match result {
            Ok(response) => UploadState::Succeeded {
                records_inserted: response.records_inserted,
                replaced: response.replaced,
            },
            Err(err) => UploadState::Failed {
                message: err.user_message(UPLOAD_FAILED),
            },
        };
        true
    }

    /// Back to `Idle` unless an upload is still running
    pub fn reset(&mut self) {
        if !self.is_uploading() {
            *self = UploadState::Idle;
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }

    pub fn success_message(&self, domain: UploadDomain) -> Option<String> {
        match self {
            UploadState::Succeeded {
                records_inserted,
                replaced,
            } => Some(domain.success_text(*records_inserted, *replaced)),
            _ => None,
        }
    }
}

/// Multipart body: `file`, plus `replace=true` only when requested
fn build_form(file: &web_sys::File, replace: bool) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Validation(format!("Failed to create form: {:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Validation(format!("Failed to attach file: {:?}", e)))?;
    if replace {
        form.append_with_str("replace", "true")
            .map_err(|e| ApiError::Validation(format!("Failed to set replace flag: {:?}", e)))?;
    }
    Ok(form)
}

/// Validate and send a file to the domain's upload endpoint
pub async fn upload_file(
    domain: UploadDomain,
    file: web_sys::File,
    replace: bool,
    max_bytes: u64,
) -> Result<UploadResponse, ApiError> {
    validate_upload(&file.name(), file.size() as u64, max_bytes)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let form = build_form(&file, replace)?;
    log::info!(
        "uploading {} ({} bytes) to {}, replace={}",
        file.name(),
        file.size(),
        domain.upload_path(),
        replace
    );
    post_multipart(domain.upload_path(), form).await
}
