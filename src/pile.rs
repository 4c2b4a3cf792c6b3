use std::fmt;

/// Number of tableau columns.
pub const NUM_COLUMNS: usize = 7;
/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;

/// Address of one of the thirteen piles on the board.
///
/// Foundation and column indices are 0-based here; their labels are 1-based
/// (`f1..f4`, `c1..c7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(usize),
    Column(usize),
}

impl PileId {
    /// Every pile, in display order.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..NUM_FOUNDATIONS).map(PileId::Foundation))
            .chain((0..NUM_COLUMNS).map(PileId::Column))
    }

    /// Map a label (`stock`, `waste`, `f1`..`f4`, `c1`..`c7`) to a pile.
    /// Anything else, including out-of-range indices, resolves to `None`.
    pub fn resolve(label: &str) -> Option<PileId> {
        match label {
            "stock" => return Some(PileId::Stock),
            "waste" => return Some(PileId::Waste),
            _ => {}
        }

        // Exactly one letter and one digit: no signs, no leading zeros.
        let &[kind, digit] = label.as_bytes() else {
            return None;
        };
        if !digit.is_ascii_digit() {
            return None;
        }
        let idx = usize::from(digit - b'0').checked_sub(1)?;
        match kind {
            b'f' if idx < NUM_FOUNDATIONS => Some(PileId::Foundation(idx)),
            b'c' if idx < NUM_COLUMNS => Some(PileId::Column(idx)),
            _ => None,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
            PileId::Foundation(i) => write!(f, "f{}", i + 1),
            PileId::Column(i) => write!(f, "c{}", i + 1),
        }
    }
}
