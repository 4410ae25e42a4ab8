//! Page geometry for the card sheet.
//!
//! All values are in millimeters on an A4 portrait page, measured from the
//! top-left corner (PDF coordinates are converted at draw time). The grid is
//! fixed: four card rows per page, each row pairing a 65x65 info cell with a
//! 65x65 QR cell.

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Cards per page; also the row count of the grid.
pub const ROWS_PER_PAGE: usize = 4;
pub const ROW_HEIGHT_MM: f32 = 70.0;
/// Cells are square, info and QR alike.
pub const CELL_SIZE_MM: f32 = 65.0;
/// Top offset of the first cell within a row.
pub const CELL_MARGIN_MM: f32 = 5.0;
pub const INFO_X_MM: f32 = 5.0;
pub const CODE_X_MM: f32 = 75.0;

/// Line height of the wrapped artist block at the top of the info cell.
pub const ARTIST_LINE_MM: f32 = 20.0;
/// Top of the year band, relative to the row.
pub const YEAR_TOP_MM: f32 = 30.0;
pub const YEAR_BAND_MM: f32 = 15.0;
/// Top of the title block, relative to the row.
pub const TITLE_TOP_MM: f32 = 55.0;
/// Line height of the wrapped title block.
pub const TITLE_LINE_MM: f32 = 10.0;

pub const TEXT_FONT_PT: f32 = 13.0;
pub const YEAR_FONT_PT: f32 = 32.0;

/// Dark cell background, chosen for contrast on white paper.
pub const BACKGROUND_RGB: (u8, u8, u8) = (52, 49, 45);
/// Light blue accent used for text and QR modules.
pub const ACCENT_RGB: (u8, u8, u8) = (39, 154, 241);

/// Side length in pixels of the QR raster before it is scaled into a cell.
pub const QR_SOURCE_PX: u32 = 256;

/// Grid position of the card at index `i` in the track sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub page: usize,
    pub row: usize,
}

impl CardSlot {
    pub fn for_index(i: usize) -> Self {
        Self {
            page: i / ROWS_PER_PAGE,
            row: i % ROWS_PER_PAGE,
        }
    }

    /// True when this card is the first on its page.
    pub fn starts_page(&self) -> bool {
        self.row == 0
    }

    /// Top of this card's row, from the top of the page.
    pub fn row_top_mm(&self) -> f32 {
        self.row as f32 * ROW_HEIGHT_MM
    }

    /// Top of this card's cells, from the top of the page.
    pub fn cell_top_mm(&self) -> f32 {
        self.row_top_mm() + CELL_MARGIN_MM
    }
}

pub fn page_count(tracks: usize) -> usize {
    tracks.div_ceil(ROWS_PER_PAGE)
}

/// Converts a top-down y coordinate to the bottom-up PDF axis.
pub fn from_top_mm(y: f32) -> f32 {
    PAGE_HEIGHT_MM - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_track_starts_first_page() {
        let slot = CardSlot::for_index(0);

        assert_eq!(slot, CardSlot { page: 0, row: 0 });
        assert!(slot.starts_page());
    }

    #[test]
    fn test_four_tracks_fill_one_page() {
        for i in 0..4 {
            assert_eq!(CardSlot::for_index(i).page, 0);
        }
        assert_eq!(page_count(4), 1);
    }

    #[test]
    fn test_fifth_track_opens_second_page_at_row_zero() {
        let slot = CardSlot::for_index(4);

        assert_eq!(slot, CardSlot { page: 1, row: 0 });
        assert!(slot.starts_page());
        assert_eq!(page_count(5), 2);
    }

    #[test]
    fn test_page_count_boundaries() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(8), 2);
        assert_eq!(page_count(9), 3);
    }

    #[test]
    fn test_row_positions_match_grid() {
        assert_eq!(CardSlot::for_index(0).cell_top_mm(), 5.0);
        assert_eq!(CardSlot::for_index(1).cell_top_mm(), 75.0);
        assert_eq!(CardSlot::for_index(3).cell_top_mm(), 215.0);
        // last row still fits the page
        assert!(CardSlot::for_index(3).cell_top_mm() + CELL_SIZE_MM <= PAGE_HEIGHT_MM);
    }

    #[test]
    fn test_from_top_flips_axis() {
        assert_eq!(from_top_mm(0.0), PAGE_HEIGHT_MM);
        assert_eq!(from_top_mm(PAGE_HEIGHT_MM), 0.0);
    }
}
