use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};
use nutriplan_model::plan::DietPlan;
use nutriplan_model::profile::UserProfile;
use tokio::fs;
use uuid::Uuid;

use crate::{pdf, ReportStore, StorageError};

/// Filesystem-backed store. Reports are written to a temporary path in
/// the target directory and published with an atomic rename, so a
/// concurrent `load` never observes a partial document.
pub struct PdfReportStore {
    dir: PathBuf,
}

impl PdfReportStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

#[async_trait]
impl ReportStore for PdfReportStore {
    async fn store(&self, profile: &UserProfile, plan: &DietPlan) -> Result<String, StorageError> {
        let bytes = pdf::render(profile, plan)?;

        // Profile-derived prefix for a recognizable name, uuid for
        // collision resistance under concurrent requests.
        let file_name = format!("{}-{}.pdf", slug(&profile.name), Uuid::new_v4());
        let tmp_path = self.dir.join(format!(".{}.tmp", file_name));

        fs::write(&tmp_path, &bytes).await?;
        fs::rename(&tmp_path, self.dir.join(&file_name)).await?;

        info!("Stored report {} ({} bytes)", file_name, bytes.len());
        Ok(file_name)
    }

    async fn load(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        if file_name.contains(['/', '\\']) || file_name.contains("..") {
            debug!("Rejecting report identifier {:?}", file_name);
            return Err(StorageError::NotFound);
        }

        match fs::read(self.dir.join(file_name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

/// Lowercases and collapses anything outside `[a-z0-9]` to single
/// hyphens. Falls back to "report" for names with no usable characters.
fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "report".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_filesystem_safe() {
        let test_data = [
            ("Alex", "alex"),
            ("Mary Jane O'Neill", "mary-jane-o-neill"),
            ("  spaced  out  ", "spaced-out"),
            ("../../etc/passwd", "etc-passwd"),
            ("票", "report"),
            ("", "report"),
        ];

        for (i, (name, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(slug(name), expected, "Test case #{}", i);
        }
    }
}
