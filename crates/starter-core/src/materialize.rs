//! Writing planned files into the generated project

use crate::error::ScaffoldError;
use crate::plan::{FileWrite, WriteMode};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// A file that was written, with its progress label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedFile {
    pub path: PathBuf,
    pub label: Option<&'static str>,
}

/// Write files in plan order, creating parent directories as needed
pub async fn materialize(
    project_dir: &Path,
    files: &[FileWrite],
) -> Result<Vec<MaterializedFile>, ScaffoldError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target_path = project_dir.join(&file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| io_error(parent, source))?;
        }

        match file.mode {
            WriteMode::Overwrite => fs::write(&target_path, &file.contents)
                .await
                .map_err(|source| io_error(&target_path, source))?,
            WriteMode::Append => append(&target_path, &file.contents)
                .await
                .map_err(|source| io_error(&target_path, source))?,
        }

        written.push(MaterializedFile {
            path: target_path,
            label: file.label,
        });
    }

    Ok(written)
}

async fn append(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await
}

fn io_error(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}
