use serde::{Deserialize, Serialize};

/// What a cell holds underneath: either its adjacent-mine count or a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Count(u8),
    Mine,
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub opened: bool,
    pub flagged: bool,
    pub value: CellValue,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.value.is_mine()
    }

    /// Whether the player can still open this cell. Flagged cells are protected.
    pub const fn is_openable(&self) -> bool {
        !self.opened && !self.flagged
    }

    /// Render view of the cell; `opened` wins over `flagged`.
    pub const fn display(&self) -> DisplayValue {
        match (self.opened, self.flagged, self.value) {
            (true, _, CellValue::Mine) => DisplayValue::Mine,
            (true, _, CellValue::Count(0)) => DisplayValue::Blank,
            (true, _, CellValue::Count(count)) => DisplayValue::Digit(count),
            (false, true, _) => DisplayValue::Flagged,
            (false, false, _) => DisplayValue::Hidden,
        }
    }
}

/// Player-visible state of a cell as a presentation layer should draw it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum DisplayValue {
    Hidden,
    Flagged,
    Mine,
    Blank,
    Digit(u8),
}

impl DisplayValue {
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Mine => '*',
            Self::Blank => '.',
            Self::Digit(count) => (b'0' + count) as char,
        }
    }
}
