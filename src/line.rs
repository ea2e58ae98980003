use super::*;

/// Row and column increments for one step of a scan.
pub type Direction = (isize, isize);

/// The four lines through a cell along which a winning run can form.
///
/// Each line is scanned top-down (increasing row) except [`Line::Horizontal`],
/// which runs left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Vertical,
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    Antidiagonal,
}

impl Line {
    /// All lines, in the order terminal detection checks them.
    pub const fn all() -> [Self; 4] {
        [
            Self::Vertical,
            Self::Horizontal,
            Self::Diagonal,
            Self::Antidiagonal,
        ]
    }
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Vertical => (1, 0),
            Self::Horizontal => (0, 1),
            Self::Diagonal => (1, 1),
            Self::Antidiagonal => (1, -1),
        }
    }
    /// Where a scan through `placement` begins.
    ///
    /// Backs up [`LINE_OFFSET`] cells against the direction, stopping early at
    /// the grid edge. Both coordinates back up by the same number of steps, so
    /// the start always lies on the line through `placement`.
    pub fn start(&self, placement: &Placement, width: usize) -> (usize, usize) {
        let Placement { row, col, .. } = *placement;
        match self {
            Self::Vertical => (row.saturating_sub(LINE_OFFSET), col),
            Self::Horizontal => (row, col.saturating_sub(LINE_OFFSET)),
            Self::Diagonal => {
                let back = LINE_OFFSET.min(row).min(col);
                (row - back, col - back)
            }
            Self::Antidiagonal => {
                let back = LINE_OFFSET.min(row).min(width.saturating_sub(col + 1));
                (row - back, col + back)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Placement {
        Placement::from((row, col, 1))
    }

    #[test]
    fn starts_in_the_middle() {
        let p = at(5, 5);
        assert_eq!(Line::Vertical.start(&p, 10), (2, 5));
        assert_eq!(Line::Horizontal.start(&p, 10), (5, 2));
        assert_eq!(Line::Diagonal.start(&p, 10), (2, 2));
        assert_eq!(Line::Antidiagonal.start(&p, 10), (2, 8));
    }

    #[test]
    fn starts_clamp_at_top_left() {
        let p = at(1, 0);
        assert_eq!(Line::Vertical.start(&p, 10), (0, 0));
        assert_eq!(Line::Horizontal.start(&p, 10), (1, 0));
        assert_eq!(Line::Diagonal.start(&p, 10), (1, 0));
        assert_eq!(Line::Antidiagonal.start(&p, 10), (0, 1));
    }

    #[test]
    fn starts_clamp_at_right_edge() {
        let p = at(9, 9);
        assert_eq!(Line::Horizontal.start(&p, 10), (9, 6));
        assert_eq!(Line::Diagonal.start(&p, 10), (6, 6));
        assert_eq!(Line::Antidiagonal.start(&p, 10), (9, 9));
    }

    #[test]
    fn starts_stay_on_the_line() {
        for row in 0..6 {
            for col in 0..7 {
                let p = at(row, col);
                let (r, c) = Line::Diagonal.start(&p, 7);
                assert_eq!(row - r, col - c);
                let (r, c) = Line::Antidiagonal.start(&p, 7);
                assert_eq!(row - r, c - col);
                assert!(c < 7);
            }
        }
    }

    #[test]
    fn directions() {
        assert_eq!(
            Line::all().map(|line| line.direction()),
            [(1, 0), (0, 1), (1, 1), (1, -1)]
        );
    }
}
