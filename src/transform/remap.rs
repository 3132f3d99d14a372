//! Sector/slice index remapping.
//!
//! A slice row runs over the full radial range. Rows below
//! `inner_row_count` belong to the inner sector whose number equals the
//! slice; the others belong to outer sector `slice + slice_count`, where row
//! numbering restarts at 0.

use super::Transform;

/// Row address in sector numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectorRow {
    pub sector: usize,
    pub row: usize,
}

/// Row address in slice numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SliceRow {
    pub slice: usize,
    pub slice_row: usize,
}

impl Transform {
    /// Slice numbering to sector numbering.
    ///
    /// `None` if the slice or the slice row is out of range.
    pub fn slice_to_sector(&self, slice: usize, slice_row: usize) -> Option<SectorRow> {
        let g = self.geometry();
        if slice >= g.slice_count || slice_row >= g.row_count {
            return None;
        }
        if slice_row < g.inner_row_count {
            Some(SectorRow {
                sector: slice,
                row: slice_row,
            })
        } else {
            Some(SectorRow {
                sector: slice.checked_add(g.slice_count)?,
                row: slice_row - g.inner_row_count,
            })
        }
    }

    /// Slice a sector belongs to.
    pub fn sector_to_slice(&self, sector: usize) -> Option<usize> {
        let g = self.geometry();
        if sector >= g.sector_count {
            None
        } else if sector < g.inner_sector_count {
            Some(sector)
        } else {
            Some(sector - g.inner_sector_count)
        }
    }

    /// Sector numbering to slice numbering.
    ///
    /// `None` if the sector is out of range or the row exceeds the row count
    /// of the sector's region.
    pub fn sector_row_to_slice(&self, sector: usize, row: usize) -> Option<SliceRow> {
        let g = self.geometry();
        if sector >= g.sector_count {
            return None;
        }
        if sector < g.inner_sector_count {
            if row >= g.inner_row_count {
                return None;
            }
            Some(SliceRow {
                slice: sector,
                slice_row: row,
            })
        } else {
            if row >= g.outer_row_count {
                return None;
            }
            Some(SliceRow {
                slice: sector - g.inner_sector_count,
                slice_row: row.checked_add(g.inner_row_count)?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use std::sync::Arc;

    fn transform() -> Transform {
        Transform::new(Arc::new(Geometry::default()))
    }

    #[test]
    fn test_slice_to_sector() {
        let t = transform();
        assert_eq!(t.slice_to_sector(0, 0), Some(SectorRow { sector: 0, row: 0 }));
        assert_eq!(t.slice_to_sector(0, 70), Some(SectorRow { sector: 36, row: 7 }));
        assert_eq!(t.slice_to_sector(35, 62), Some(SectorRow { sector: 35, row: 62 }));
        assert_eq!(t.slice_to_sector(35, 158), Some(SectorRow { sector: 71, row: 95 }));
    }

    #[test]
    fn test_slice_to_sector_bounds() {
        let t = transform();
        assert_eq!(t.slice_to_sector(36, 0), None);
        assert_eq!(t.slice_to_sector(0, 159), None);
    }

    #[test]
    fn test_sector_to_slice() {
        let t = transform();
        assert_eq!(t.sector_to_slice(0), Some(0));
        assert_eq!(t.sector_to_slice(35), Some(35));
        assert_eq!(t.sector_to_slice(36), Some(0));
        assert_eq!(t.sector_to_slice(71), Some(35));
        assert_eq!(t.sector_to_slice(72), None);
    }

    #[test]
    fn test_sector_row_to_slice() {
        let t = transform();
        assert_eq!(
            t.sector_row_to_slice(36, 7),
            Some(SliceRow { slice: 0, slice_row: 70 })
        );
        assert_eq!(
            t.sector_row_to_slice(12, 62),
            Some(SliceRow { slice: 12, slice_row: 62 })
        );
        assert_eq!(t.sector_row_to_slice(12, 63), None);
        assert_eq!(t.sector_row_to_slice(40, 96), None);
        assert_eq!(t.sector_row_to_slice(72, 0), None);
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let mut g = Geometry::default();
        g.slice_count = usize::MAX;
        g.row_count = usize::MAX;
        let t = Transform::new(Arc::new(g));
        assert_eq!(t.slice_to_sector(5, 100), None);

        let mut g = Geometry::default();
        g.inner_row_count = usize::MAX;
        g.outer_row_count = usize::MAX;
        let t = Transform::new(Arc::new(g));
        assert_eq!(t.sector_row_to_slice(40, 1), None);
    }

    #[test]
    fn test_sector_slice_round_trip() {
        let t = transform();
        let g = t.geometry().clone();
        for sector in 0..g.sector_count {
            let rows = if sector < g.inner_sector_count {
                g.inner_row_count
            } else {
                g.outer_row_count
            };
            for row in 0..rows {
                let sr = t.sector_row_to_slice(sector, row).unwrap();
                assert_eq!(
                    t.slice_to_sector(sr.slice, sr.slice_row),
                    Some(SectorRow { sector, row })
                );
            }
        }
    }
}
