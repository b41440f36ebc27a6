/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reading matrices from disk.

use crate::FailResult;
use ::failure::ResultExt;
use ::mathkern_matrix::Matrix;
use ::mathkern_tasks_config::{MatrixFile, YamlRead};
use ::std::io::Read;
use ::std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixFileType {
    Yaml,
    Json,
}

impl MatrixFileType {
    /// JSON for a `.json` extension; YAML for anything else.
    pub fn guess(path: &Path) -> MatrixFileType {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => MatrixFileType::Json,
            Some("yaml") | Some("yml") => MatrixFileType::Yaml,
            _ => MatrixFileType::Yaml,
        }
    }
}

/// Parse `{rows: [...]}` and check that it forms a nonempty rectangle.
pub fn read_matrix(mut r: impl Read, ty: MatrixFileType) -> FailResult<Matrix> {
    let file: MatrixFile = match ty {
        MatrixFileType::Yaml => MatrixFile::from_reader(r)?,
        MatrixFileType::Json => {
            let mut text = String::new();
            r.read_to_string(&mut text)?;
            ::serde_json::from_str(&text)?
        },
    };
    Ok(Matrix::from_rows(file.rows)?)
}

pub fn load_matrix(path: &Path) -> FailResult<Matrix> {
    let ty = MatrixFileType::guess(path);
    let file = ::std::fs::File::open(path)
        .with_context(|e| format!("{}: could not open: {}", path.display(), e))?;
    let matrix = read_matrix(file, ty)
        .with_context(|e| format!("{}: {}", path.display(), e))?;
    debug!("read {}x{} matrix from {}", matrix.num_rows(), matrix.num_cols(), path.display());
    Ok(matrix)
}
