use contracts::shared::ActionResponse;
use thiserror::Error;

use crate::shared::error::ApiError;

pub const SUCCESS_BANNER: &str = "✅ Files sent successfully!";
pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Uploading...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please fill in your name, phone number, and select files to upload.")]
    Incomplete,
    #[error("An upload is already in progress")]
    InFlight,
}

/// Trimmed form values handed to the upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was cleared; `banner` identifies the success banner to hide later.
    Sent { banner: u64 },
    Failed(String),
}

/// Upload form state, generic over the file handle so it stays testable
/// without a browser.
#[derive(Debug, Clone)]
pub struct UploadForm<F> {
    files: Vec<F>,
    name: String,
    phone: String,
    submitting: bool,
    banner: Option<u64>,
    banner_seq: u64,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            name: String::new(),
            phone: String::new(),
            submitting: false,
            banner: None,
            banner_seq: 0,
        }
    }
}

impl<F> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Append picked or dropped files after the current selection.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = F>) {
        self.files.extend(files);
    }

    pub fn remove_file(&mut self, position: usize) -> Option<F> {
        (position < self.files.len()).then(|| self.files.remove(position))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Name and phone are non-blank and at least one file is selected.
    pub fn is_complete(&self) -> bool {
        !self.files.is_empty() && !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.is_complete()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    pub fn begin_submit(&mut self) -> Result<UploadRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if !self.is_complete() {
            return Err(SubmitError::Incomplete);
        }
        self.submitting = true;
        Ok(UploadRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }

    /// Apply the upload result. Failures keep the selection for a retry.
    pub fn finish_submit(&mut self, result: Result<ActionResponse, ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(resp) if resp.success => {
                self.files.clear();
                self.name.clear();
                self.phone.clear();
                self.banner_seq += 1;
                self.banner = Some(self.banner_seq);
                SubmitOutcome::Sent {
                    banner: self.banner_seq,
                }
            }
            Ok(resp) => SubmitOutcome::Failed(format!(
                "Upload failed: {}",
                resp.message_or(ActionResponse::UNKNOWN_UPLOAD_ERROR)
            )),
            Err(e) => SubmitOutcome::Failed(format!("Upload failed: {}", e)),
        }
    }

    /// Hide the banner shown by upload `banner`; a newer banner stays visible.
    pub fn hide_banner(&mut self, banner: u64) {
        if self.banner == Some(banner) {
            self.banner = None;
        }
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UploadForm<&'static str> {
        let mut form = UploadForm::new();
        form.add_files(["a.pdf", "b.png"]);
        form.set_name("Alice");
        form.set_phone("555-1000");
        form
    }

    #[test]
    fn test_submit_gate_requires_all_fields() {
        let mut form = filled();
        assert!(form.can_submit());

        form.set_name("   ");
        assert!(!form.can_submit());
        form.set_name("Alice");

        form.set_phone("");
        assert!(!form.can_submit());
        form.set_phone("555-1000");

        form.remove_file(0);
        form.remove_file(0);
        assert!(form.files().is_empty());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitError::Incomplete));
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut form = UploadForm::new();
        form.add_files(["a", "b", "c", "d"]);
        assert_eq!(form.remove_file(1), Some("b"));
        assert_eq!(form.files(), &["a", "c", "d"]);
        assert_eq!(form.remove_file(7), None);
        assert_eq!(form.files().len(), 3);
    }

    #[test]
    fn test_begin_submit_trims_and_locks() {
        let mut form = filled();
        form.set_name("  Alice ");
        let request = form.begin_submit().unwrap();
        assert_eq!(request.name, "Alice");
        assert_eq!(request.phone, "555-1000");
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), SENDING_LABEL);
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
    }

    #[test]
    fn test_success_clears_form_and_shows_banner() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(Ok(ActionResponse {
            success: true,
            message: None,
        }));
        assert_eq!(outcome, SubmitOutcome::Sent { banner: 1 });
        assert!(form.files().is_empty());
        assert_eq!(form.name(), "");
        assert_eq!(form.phone(), "");
        assert!(form.banner_visible());
        assert_eq!(form.submit_label(), SEND_LABEL);
    }

    #[test]
    fn test_failure_keeps_selection() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(Ok(ActionResponse {
            success: false,
            message: Some("too large".to_string()),
        }));
        assert_eq!(outcome, SubmitOutcome::Failed("Upload failed: too large".to_string()));
        assert_eq!(form.files().len(), 2);
        assert!(form.can_submit());

        form.begin_submit().unwrap();
        let outcome = form.finish_submit(Err(ApiError::Network("offline".to_string())));
        assert!(matches!(outcome, SubmitOutcome::Failed(msg) if msg.contains("offline")));
        assert!(!form.banner_visible());
    }

    #[test]
    fn test_failure_without_message_uses_upload_fallback() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(Ok(ActionResponse {
            success: false,
            message: None,
        }));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Upload failed: Unknown error occurred.".to_string())
        );
    }

    #[test]
    fn test_stale_banner_timer_is_ignored() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(ActionResponse { success: true, message: None }));

        form.add_files(["c.doc"]);
        form.set_name("Bob");
        form.set_phone("555-2000");
        form.begin_submit().unwrap();
        form.finish_submit(Ok(ActionResponse { success: true, message: None }));

        form.hide_banner(1);
        assert!(form.banner_visible());
        form.hide_banner(2);
        assert!(!form.banner_visible());
    }
}
