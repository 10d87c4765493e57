use grid_2d::Coord;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Frontier,
    Visited,
}

/// A cell whose role changed during the most recent step, so a rendering
/// layer can mirror the search state without being coupled to it.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionEvent {
    pub coord: Coord,
    pub role: CellRole,
}

impl ExpansionEvent {
    pub(crate) fn new(coord: Coord, role: CellRole) -> Self {
        Self { coord, role }
    }
}
