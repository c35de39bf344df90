/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/fnspec
 *
 * License:
 * This file is part of the FNSPEC function notation project.
 *
 * FNSPEC is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::ast::FunctionDeclaration;
use crate::error::{FnspecError, Result};
use crate::registry::Registry;

/// Snapshot format version this build writes and accepts.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a [`Registry`]: every registered declaration plus
/// when and under which format version it was exported.
///
/// Declarations are stored sorted by name so exporting the same registry
/// twice produces the same `functions` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub version: u32,

    /// RFC 3339 UTC timestamp of the export.
    pub exported_at: String,

    pub functions: Vec<FunctionDeclaration>,
}

impl Registry {
    /// Serializes the registry to a pretty-printed JSON snapshot.
    ///
    /// # Errors
    /// `E_SNAPSHOT` when serialization fails.
    pub fn export_json(&self) -> Result<String> {
        let mut functions: Vec<FunctionDeclaration> = self.functions.values().cloned().collect();
        functions.sort_by(|a, b| a.name.cmp(&b.name));

        let snapshot = RegistrySnapshot {
            version: SNAPSHOT_VERSION,
            exported_at: Utc::now().to_rfc3339(),
            functions,
        };

        serde_json::to_string_pretty(&snapshot).map_err(|e| {
            FnspecError::snapshot_error(format!("could not serialize registry snapshot: {}", e))
        })
    }

    /// Rebuilds a registry from a JSON snapshot.
    ///
    /// # Errors
    /// `E_SNAPSHOT` when the JSON does not parse as a snapshot or its
    /// version is not [`SNAPSHOT_VERSION`].
    pub fn import_json(json: &str) -> Result<Self> {
        let snapshot: RegistrySnapshot = serde_json::from_str(json).map_err(|e| {
            FnspecError::snapshot_error(format!("could not parse registry snapshot: {}", e))
        })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(FnspecError::snapshot_error(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            ))
            .with_help("re-export the registry with this version of fnspec"));
        }

        let mut registry = Registry::new();
        for declaration in snapshot.functions {
            registry
                .functions
                .insert(declaration.name.clone(), declaration);
        }

        Ok(registry)
    }

    /// Writes the registry snapshot to a file.
    ///
    /// # Errors
    /// `E_SNAPSHOT` when serialization or the write fails.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.export_json()?;

        fs::write(path.as_ref(), json).map_err(|e| {
            FnspecError::snapshot_error(format!(
                "could not write snapshot to '{}': {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Reads a registry snapshot back from a file.
    ///
    /// # Errors
    /// `E_SNAPSHOT` when the read fails or the content is not a valid
    /// snapshot.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref()).map_err(|e| {
            FnspecError::snapshot_error(format!(
                "could not read snapshot from '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::import_json(&json)
    }
}
