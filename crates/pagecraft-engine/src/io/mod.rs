use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{self, CodecError};
use crate::document::Document;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
    #[error("Failed to load {path}: {source}")]
    Codec { path: PathBuf, source: CodecError },
}

/// Read and decode a page document
pub fn read_document(relative_path: &RelativePath, root: &Path) -> Result<Document, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let text = fs::read_to_string(&absolute_path)?;
    codec::decode(&text).map_err(|source| IoError::Codec {
        path: absolute_path,
        source,
    })
}

/// Encode and write a page document
pub fn write_document(
    relative_path: &RelativePath,
    root: &Path,
    document: &Document,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);
    let text = codec::encode(document).map_err(|source| IoError::Codec {
        path: absolute_path.clone(),
        source,
    })?;

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, text)?;
    log::debug!("wrote {}", absolute_path.display());
    Ok(())
}

/// Scan for page documents (`*.json`) in the documents directory
pub fn scan_documents(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::InvalidDocumentsDir(
            "documents directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
