use itertools::Itertools;
use log::warn;
use std::iter;

use super::*;
use crate::grid::Grid;
use crate::io::SerializablePattern;

impl SerializablePattern for Rle {
    fn from_grid(grid: &Grid) -> Self {
        let mut runs = vec![];
        for row in grid.rows() {
            let groups = row.iter().group_by(|&&cell| cell);
            for (state, group) in &groups {
                runs.push(RleRun {
                    count: group.count(),
                    item: RleItem::Cell(state),
                });
            }
            runs.push(RleItem::NextRow.into());
        }
        runs.push(RleItem::End.into());

        Self {
            header: RleHeader {
                width: grid.width(),
                height: grid.height(),
                rule: None,
            },
            runs,
            comments: String::new(),
        }
    }

    fn to_grid(&self) -> RleResult<Grid> {
        let RleHeader { width, height, .. } = self.header;

        let mut rows: Vec<Vec<bool>> = vec![];
        let mut current_row = vec![];
        // Cells and rows beyond the header size are discarded anyway, so never
        // store more than fits.
        for run in &self.runs {
            match run.item {
                RleItem::Cell(state) => {
                    let room = width.saturating_sub(current_row.len());
                    current_row.extend(iter::repeat(state).take(run.count.min(room)));
                }
                RleItem::NextRow => {
                    rows.push(std::mem::take(&mut current_row));
                    // `n$` also ends `n - 1` blank rows.
                    let room = height.saturating_sub(rows.len());
                    let blank_rows = run.count.saturating_sub(1).min(room);
                    rows.extend(iter::repeat_with(Vec::new).take(blank_rows));
                }
                RleItem::End => break,
            }
        }
        if !self.is_terminated() {
            warn!("RLE pattern ended without '!'; using the rows read so far");
        }
        if !current_row.is_empty() {
            rows.push(current_row);
        }

        Ok(Grid::from_rows(width, height, &rows)?)
    }
}
