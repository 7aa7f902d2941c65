//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
            align: Align::Right,
        }
    }

    fn pad(&self, s: &str) -> String {
        match self.align {
            Align::Left => pad_right(s, self.width),
            Align::Right => pad_left(s, self.width),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    /// Optional second header line (e.g. day names under day numbers).
    pub subheader: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            subheader: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn set_subheader(&mut self, cells: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&cells) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.subheader = cells;
    }

    /// Add a row, widening columns to fit. Missing cells render blank.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        self.render_with(|_, _, padded| padded)
    }

    /// Render with a hook applied to every padded body cell
    /// (row index, column index, padded text), e.g. for ANSI colours.
    pub fn render_with<F>(&self, style: F) -> String
    where
        F: Fn(usize, usize, String) -> String,
    {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&col.pad(&col.header));
            out.push(' ');
        }
        out.push('\n');

        if !self.subheader.is_empty() {
            for (c, col) in self.columns.iter().enumerate() {
                let cell = self.subheader.get(c).map(String::as_str).unwrap_or("");
                out.push_str(&col.pad(cell));
                out.push(' ');
            }
            out.push('\n');
        }

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            for (c, col) in self.columns.iter().enumerate() {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                out.push_str(&style(r, c, col.pad(cell)));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
