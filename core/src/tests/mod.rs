//! Whole-system scenarios that cross module boundaries.


use crate::grid::Grid;

const L: bool = true;
const D: bool = false;

fn glider() -> Grid {
    Grid::from_rows(3, 3, &[[D, L, D], [D, D, L], [L, L, L]]).unwrap()
}

fn grid_with(width: usize, height: usize, pattern: &Grid, x: isize, y: isize) -> Grid {
    let mut ret = Grid::new(width, height).unwrap();
    ret.place(pattern, x, y);
    ret
}
