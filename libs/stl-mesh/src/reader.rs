//! # Mesh Reader
//!
//! Parses the text mesh format back into a [`MeshArray`].
//!
//! The reader does not validate the facet structure. Every line ending in
//! three whitespace-separated tokens is a data row, whatever its leading
//! keyword; `solid`, `outer loop`, `endloop`, `endfacet` and `endsolid`
//! carry fewer tokens (or are the header) and are skipped. The resulting
//! array starts with a zero pad row.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use config::constants::GlobalConfig;
use glam::DVec3;
use tracing::{info, warn};

use crate::array::MeshArray;
use crate::error::{MeshError, MeshResult};

/// How to treat a data row whose last three tokens are not all numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Replace the row with `(0, 0, 0)` and keep going.
    #[default]
    Lenient,
    /// Fail with [`MeshError::MalformedRow`].
    Strict,
}

impl From<&GlobalConfig> for ParseMode {
    fn from(config: &GlobalConfig) -> Self {
        if config.strict_parsing {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

/// Reads a mesh file leniently.
///
/// # Errors
///
/// [`MeshError::FileNotFound`] if `path` does not exist.
///
/// # Example
///
/// ```no_run
/// use stl_mesh::read_stl;
///
/// let array = read_stl("circle.stl").unwrap().strip_padding().unwrap();
/// println!("{} facets", array.facet_count());
/// ```
pub fn read_stl(path: impl AsRef<Path>) -> MeshResult<MeshArray> {
    read_stl_with(path, ParseMode::Lenient)
}

/// Reads a mesh file with an explicit [`ParseMode`].
pub fn read_stl_with(path: impl AsRef<Path>, mode: ParseMode) -> MeshResult<MeshArray> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MeshError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MeshError::Io(e)
        }
    })?;

    let array = parse_stl(BufReader::new(file), mode)?;
    info!(
        path = %path.display(),
        rows = array.len(),
        "Read mesh file"
    );
    Ok(array)
}

/// Parses the text format from any buffered reader.
pub fn parse_stl<R: BufRead>(reader: R, mode: ParseMode) -> MeshResult<MeshArray> {
    let mut array = MeshArray::padded();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 || tokens[0] == "solid" {
            continue;
        }

        match parse_tail(&tokens[tokens.len() - 3..]) {
            Some(row) => array.push(row),
            None => match mode {
                ParseMode::Lenient => {
                    warn!(line = index + 1, content = %line, "Replacing malformed row with zeros");
                    array.push(DVec3::ZERO);
                }
                ParseMode::Strict => {
                    return Err(MeshError::MalformedRow {
                        line: index + 1,
                        content: line,
                    });
                }
            },
        }
    }

    Ok(array)
}

fn parse_tail(tokens: &[&str]) -> Option<DVec3> {
    let x = tokens[0].parse().ok()?;
    let y = tokens[1].parse().ok()?;
    let z = tokens[2].parse().ok()?;
    Some(DVec3::new(x, y, z))
}
