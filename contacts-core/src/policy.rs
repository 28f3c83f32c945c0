use serde::{Deserialize, Serialize};

/// Header rows plus one turns a 0-based batch index into a file line number.
pub const HEADER_AND_ZERO_INDEX_OFFSET: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportPolicy {
    /// Rows at the top of the source file that carry no person.
    pub header_rows: usize,
}

impl Default for ImportPolicy {
    fn default() -> Self {
        Self {
            header_rows: HEADER_AND_ZERO_INDEX_OFFSET - 1,
        }
    }
}

impl ImportPolicy {
    pub fn row_offset(&self) -> usize {
        self.header_rows.saturating_add(1)
    }

    /// File line number of the batch entry at 0-based `index`, clamped at `usize::MAX`.
    pub fn row_number(&self, index: usize) -> usize {
        index.saturating_add(self.row_offset())
    }
}
