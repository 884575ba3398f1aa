// src/teletext_ui/pagination.rs - Splits page rows over terminal-height pages

use super::core::{TeletextPage, TeletextRow};
use super::formatting::row_height;
use crate::constants::ui::RESERVED_LINES;

impl TeletextPage {
    /// Lines available for content rows once header, subheader, spacer and
    /// footer are accounted for.
    fn available_height(&self) -> u16 {
        self.screen_height.saturating_sub(RESERVED_LINES)
    }

    /// Number of rows on each page, in order. A row taller than the whole
    /// content area still gets a page of its own.
    fn items_per_page(&self) -> Vec<usize> {
        let available_height = self.available_height();
        let mut items_per_page = Vec::new();
        let mut current_height = 0u16;
        let mut current_items = 0usize;

        for row in &self.content_rows {
            let height = row_height(row);
            if current_height + height <= available_height || current_items == 0 {
                current_height += height;
                current_items += 1;
            } else {
                items_per_page.push(current_items);
                current_height = height;
                current_items = 1;
            }
        }
        if current_items > 0 {
            items_per_page.push(current_items);
        }

        items_per_page
    }

    /// Calculates and returns the content that should be displayed on the current page.
    ///
    /// # Returns
    /// A tuple containing:
    /// * Vec<&TeletextRow> - Content rows that should be displayed on the current page
    /// * bool - Whether there are more pages after the current one
    ///
    /// When `ignore_height_limit` is set everything is returned as one page.
    pub(super) fn get_page_content(&self) -> (Vec<&TeletextRow>, bool) {
        if self.ignore_height_limit {
            return (self.content_rows.iter().collect(), false);
        }

        let items_per_page = self.items_per_page();
        let start_idx: usize = items_per_page.iter().take(self.current_page).sum();

        match items_per_page.get(self.current_page) {
            Some(&items) => {
                let end_idx = (start_idx + items).min(self.content_rows.len());
                let has_more = end_idx < self.content_rows.len();
                (self.content_rows[start_idx..end_idx].iter().collect(), has_more)
            }
            None => (Vec::new(), false),
        }
    }

    /// Calculates the total number of pages required to display all content.
    /// An empty page still counts as one page.
    pub fn total_pages(&self) -> usize {
        if self.ignore_height_limit {
            return 1;
        }
        self.items_per_page().len().max(1)
    }

    /// Gets the current page number (0-based index)
    pub fn get_current_page(&self) -> usize {
        self.current_page
    }

    /// Sets the current page number (0-based index), clamped to the last page.
    pub fn set_current_page(&mut self, page: usize) {
        let total_pages = self.total_pages();
        self.current_page = page.min(total_pages.saturating_sub(1));
    }

    /// Moves to the next page of content if available.
    /// Wraps around to the first page when at the end.
    ///
    /// # Example
    /// ```
    /// use ipfl_teletext::TeletextPage;
    /// use crossterm::event::KeyCode;
    ///
    /// let mut page = TeletextPage::new(
    ///     202,
    ///     "IPFL".to_string(),
    ///     "РАСПИСАНИЕ".to_string(),
    ///     true,
    ///     true,
    ///     false,
    /// );
    ///
    /// let event = KeyCode::Right;
    /// if event == KeyCode::Right {
    ///     page.next_page();
    /// }
    /// ```
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if total <= 1 {
            return;
        }
        self.current_page = (self.current_page + 1) % total;
    }

    /// Moves to the previous page of content if available.
    /// Wraps around to the last page when at the beginning.
    ///
    /// # Example
    /// ```
    /// use ipfl_teletext::TeletextPage;
    /// use crossterm::event::KeyCode;
    ///
    /// let mut page = TeletextPage::new(
    ///     202,
    ///     "IPFL".to_string(),
    ///     "РАСПИСАНИЕ".to_string(),
    ///     true,
    ///     true,
    ///     false,
    /// );
    ///
    /// let event = KeyCode::Left;
    /// if event == KeyCode::Left {
    ///     page.previous_page();
    /// }
    /// ```
    pub fn previous_page(&mut self) {
        let total = self.total_pages();
        if total <= 1 {
            return;
        }
        self.current_page = if self.current_page == 0 {
            total - 1
        } else {
            self.current_page - 1
        };
    }
}
