//! Text and JSON descriptions of a level layout.
//! This module exists so generators, tools and tests can hand a kind-grid to
//! `TileGrid` without building nested vectors by hand.
//! It does not own tile indexing or any level state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::LevelConfig;
use crate::error::LevelError;
use crate::types::{DesignLabel, TileKind};

/// Rows of tile kinds, `rows[y][x]`.
pub type KindGrid = Vec<Vec<TileKind>>;

/// Returns `(width, height)` of a non-empty rectangular grid.
pub fn grid_dimensions<T>(rows: &[Vec<T>]) -> Result<(usize, usize), LevelError> {
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(LevelError::EmptyLayout);
    }
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(LevelError::RaggedRow { row, expected: width, found: cells.len() });
        }
    }
    Ok((width, rows.len()))
}

/// Parses one glyph per cell, one row per line. Blank lines are skipped and
/// the first non-blank line is row `y = 0`.
pub fn parse_glyphs(text: &str) -> Result<KindGrid, LevelError> {
    let mut rows = Vec::new();
    for line in text.lines().map(str::trim_end).filter(|line| !line.is_empty()) {
        let y = rows.len();
        let row = line
            .chars()
            .enumerate()
            .map(|(x, glyph)| {
                TileKind::from_glyph(glyph).ok_or(LevelError::UnknownGlyph { glyph, x, y })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    grid_dimensions(&rows)?;
    Ok(rows)
}

pub fn render_glyphs(rows: &[Vec<TileKind>]) -> String {
    let mut out = String::new();
    for row in rows {
        out.extend(row.iter().map(|kind| kind.glyph()));
        out.push('\n');
    }
    out
}

/// JSON level description consumed by the tools CLI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<DesignLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub rows: Vec<String>,
}

impl LevelFile {
    pub fn from_json_str(content: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a `.json` level file, or a plain glyph map for any other extension.
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let content = fs::read_to_string(path)
            .map_err(|source| LevelError::Io { path: path.to_path_buf(), source })?;
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            Self::from_json_str(&content)
        } else {
            let rows = content
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect();
            Ok(Self { design: None, seed: None, rows })
        }
    }

    pub fn kinds(&self) -> Result<KindGrid, LevelError> {
        parse_glyphs(&self.rows.join("\n"))
    }

    /// Values present in the file override `base`.
    pub fn config(&self, base: &LevelConfig) -> LevelConfig {
        LevelConfig {
            seed: self.seed.unwrap_or(base.seed),
            design: self.design.unwrap_or(base.design),
        }
    }
}
