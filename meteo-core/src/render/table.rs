use serde::Serialize;

/// Text shown in place of the table body when a page fails.
pub const ERROR_MESSAGE: &str = "Error fetching weather data.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

impl TableRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Either rows or a single error text, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<TableRow>),
    Error(String),
}

impl Default for TableBody {
    fn default() -> Self {
        Self::Rows(Vec::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: String,
    body: TableBody,
}

impl Table {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: TableBody::default(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn extend_header(&mut self, suffix: &str) {
        self.header.push_str(suffix);
    }

    pub fn body(&self) -> &TableBody {
        &self.body
    }

    pub fn push_row(&mut self, row: TableRow) {
        match &mut self.body {
            TableBody::Rows(rows) => rows.push(row),
            TableBody::Error(_) => self.body = TableBody::Rows(vec![row]),
        }
    }

    /// Rows currently in the body; empty when the body holds an error.
    pub fn rows(&self) -> &[TableRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Error(_) => &[],
        }
    }

    /// Replace the whole body, discarding any rows, with `message`.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.body = TableBody::Error(message.into());
    }

    pub fn error(&self) -> Option<&str> {
        match &self.body {
            TableBody::Error(message) => Some(message),
            TableBody::Rows(_) => None,
        }
    }

    /// Swap in rows rendered elsewhere, keeping this table's header.
    pub fn replace_body(&mut self, other: Table) {
        self.body = other.body;
    }
}
