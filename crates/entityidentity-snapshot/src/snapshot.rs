//! The in-memory columnar table every domain resolver reads from (spec.md
//! §3, §4.3). On disk every column is a string; numeric/enumerated values
//! are parsed by the caller at use-site, matching "on disk, all columns are
//! strings" (spec.md §6).

use std::collections::HashMap;

/// A loaded table: column names in declaration order, plus row-major string
/// data aligned to those columns. Immutable once published (spec.md §5).
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Snapshot {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Snapshot { columns, index, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn col_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Read a cell by column name; `None` if the column doesn't exist or the
    /// row index is out of bounds. An empty string cell means "absent" on
    /// disk (spec.md §6), so callers typically further map `""` to `None`.
    pub fn get<'a>(&'a self, row: &'a [String], column: &str) -> Option<&'a str> {
        self.col_index(column).and_then(|i| row.get(i)).map(String::as_str)
    }

    /// Iterate non-empty alias columns `alias1..alias{max}` for a row,
    /// mirroring `utils/resolver.py::get_aliases`.
    pub fn aliases<'a>(&'a self, row: &'a [String], max_aliases: usize) -> Vec<&'a str> {
        (1..=max_aliases)
            .filter_map(|i| self.get(row, &format!("alias{i}")))
            .filter(|a| !a.is_empty())
            .collect()
    }

    /// Append a computed column if it isn't already present (spec.md §4.3:
    /// "add computed columns if absent"), filling every row via `compute`.
    pub fn ensure_column(&mut self, name: &str, compute: impl Fn(&[String]) -> String) {
        if self.has_column(name) {
            return;
        }
        let values: Vec<String> = self.rows.iter().map(|row| compute(row)).collect();
        self.index.insert(name.to_string(), self.columns.len());
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Pad alias columns up to `width` with empty strings if they are
    /// missing entirely (spec.md §4.3, §6 "fixed-width alias columns").
    pub fn ensure_alias_width(&mut self, width: usize) {
        for i in 1..=width {
            let name = format!("alias{i}");
            self.ensure_column(&name, |_| String::new());
        }
    }
}
