/// Page position of a table view. `page` is 0-based in the UI;
/// the ratings API expects it 1-based (see [`Pagination::api_page`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always starts over from the first page
    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows.max(1);
        self.page = 0;
    }

    pub fn api_page(&self) -> u32 {
        self.page as u32 + 1
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.rows_per_page)
    }

    /// Rows of the current page for client-side paging
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.page * self.rows_per_page).min(rows.len());
        let end = (start + self.rows_per_page).min(rows.len());
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(31), 4);
    }

    #[test]
    fn test_slice() {
        let rows: Vec<u32> = (0..23).collect();
        let mut p = Pagination::new(10);
        assert_eq!(p.slice(&rows), &rows[0..10]);
        p.set_page(2);
        assert_eq!(p.slice(&rows), &[20, 21, 22]);
        p.set_page(5);
        assert!(p.slice(&rows).is_empty());
    }

    #[test]
    fn test_rows_per_page_change_resets_page() {
        let mut p = Pagination::new(10);
        p.set_page(3);
        p.set_rows_per_page(25);
        assert_eq!(p.page, 0);
        assert_eq!(p.rows_per_page, 25);
    }

    #[test]
    fn test_api_page_is_one_based() {
        let mut p = Pagination::new(5);
        assert_eq!(p.api_page(), 1);
        p.set_page(4);
        assert_eq!(p.api_page(), 5);
    }
}
