// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! One-YAML-file-per-document storage with atomic replacement.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::store::StoreError;

const DOCUMENT_EXTENSION: &str = "yaml";
const MAX_TEMP_ATTEMPTS: u32 = 100;

pub(super) fn document_path(collection_dir: &Path, id: &str) -> PathBuf {
    collection_dir.join(format!("{}.{}", id, DOCUMENT_EXTENSION))
}

pub(super) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|err| {
        StoreError::new(format!("Failed to read {}: {}", path.display(), err))
    })?;
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|err| StoreError::new(format!("Failed to parse {}: {}", path.display(), err)))
}

/// Writes the document to a sibling temp file, syncs it, then renames it over `path`.
pub(super) fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_yaml::to_string(value)
        .map_err(|err| StoreError::new(format!("Failed to serialize document: {}", err)))?;
    let parent = path
        .parent()
        .ok_or_else(|| StoreError::new("Document path has no parent directory"))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StoreError::new("Document path has no valid file name"))?;
    let (mut file, temp_path) = create_temp_file(parent, file_name)?;

    let written = file
        .write_all(content.as_bytes())
        .and_then(|_| file.sync_all())
        .and_then(|_| fs::rename(&temp_path, path));
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::new(format!(
            "Failed to write {}: {}",
            path.display(),
            err
        )));
    }

    #[cfg(unix)]
    {
        if let Err(err) = fs::File::open(parent).and_then(|dir| dir.sync_all()) {
            log::warn!("Contacts directory sync failed: {}", err);
        }
    }

    Ok(())
}

/// Lists document ids in the collection, skipping temp files.
pub(super) fn list_document_ids(collection_dir: &Path) -> Result<Vec<String>, StoreError> {
    let entries = fs::read_dir(collection_dir).map_err(|err| {
        StoreError::new(format!(
            "Failed to list {}: {}",
            collection_dir.display(),
            err
        ))
    })?;

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| StoreError::new(format!("Failed to list entry: {}", err)))?;
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }
        if let Some(id) = file_name.strip_suffix(&format!(".{}", DOCUMENT_EXTENSION)) {
            ids.push(id.to_string());
        }
    }
    ids.sort();
    Ok(ids)
}

fn create_temp_file(parent: &Path, file_name: &str) -> Result<(fs::File, PathBuf), StoreError> {
    for attempt in 0..MAX_TEMP_ATTEMPTS {
        let temp_path = parent.join(format!(
            ".{}.tmp.{}.{}",
            file_name,
            std::process::id(),
            attempt
        ));
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
        {
            Ok(file) => return Ok((file, temp_path)),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(err) => {
                return Err(StoreError::new(format!(
                    "Failed to create temp file for {}: {}",
                    file_name, err
                )));
            }
        }
    }
    Err(StoreError::new(format!(
        "Failed to create temp file for {} after {} attempts",
        file_name, MAX_TEMP_ATTEMPTS
    )))
}
