use grid_2d::Coord;

pub trait SolidGrid {
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
}
