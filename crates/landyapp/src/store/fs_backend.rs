use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::PageSpec;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn page_filename(id: Uuid) -> String {
        format!("page-{}.json", id)
    }

    fn document_path(&self, id: Uuid) -> PathBuf {
        self.root.join(Self::page_filename(id))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self, id: Uuid) -> Result<Option<PageSpec>> {
        let path = self.document_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let page: PageSpec = serde_json::from_str(&content)?;
        Ok(Some(page))
    }

    fn write_document(&self, page: &PageSpec) -> Result<()> {
        self.ensure_dir()?;

        let target_path = self.document_path(page.id);
        let content = serde_json::to_string_pretty(page)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".page-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, target_path)?;

        Ok(())
    }

    fn delete_document(&self, id: Uuid) -> Result<bool> {
        let path = self.document_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    fn list_ids(&self) -> Result<Vec<Uuid>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                if name.starts_with("page-") && name.ends_with(".json") {
                    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
                    let uuid_part = stem.strip_prefix("page-").unwrap_or("");
                    if let Ok(id) = Uuid::parse_str(uuid_part) {
                        ids.push(id);
                    }
                }
            }
        }
        Ok(ids)
    }
}
