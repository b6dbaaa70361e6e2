//! Fixed-width table rendering for CLI listings.

use crate::utils::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render_line(&self, cells: &[String]) -> String {
        self.columns
            .iter()
            .zip(cells)
            .map(|(col, cell)| pad_right(cell, col.width))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render(&self) -> String {
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let underline: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();

        let mut lines = vec![self.render_line(&headers), self.render_line(&underline)];
        lines.extend(self.rows.iter().map(|row| self.render_line(row)));
        lines.push(String::new());

        lines.join("\n")
    }
}
