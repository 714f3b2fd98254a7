//! Page indicators for the pager

use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot of the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageIndicator {
    Page(u32),
    Ellipsis,
}

impl fmt::Display for PageIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Pager slots for `current` of `total` pages.
///
/// - up to 4 pages: all of them
/// - near the start: `1 2 3 4 … last`
/// - near the end: `1 … last-3 last-2 last-1 last`
/// - otherwise: `1 … c-1 c c+1 … last`
pub fn visible_pages(current: u32, total: u32) -> Vec<PageIndicator> {
    use PageIndicator::{Ellipsis, Page};

    let total = total.max(1);
    if total <= 4 {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::PageIndicator::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_small_totals_show_all() {
        assert_eq!(visible_pages(1, 1), vec![Page(1)]);
        assert_eq!(visible_pages(2, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(visible_pages(1, 0), vec![Page(1)]);
    }

    #[test]
    fn test_total_ten() {
        assert_eq!(
            visible_pages(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            visible_pages(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_boundaries() {
        // current 3 is still "near start"
        assert_eq!(
            visible_pages(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        // total - 2 is already "near end"
        assert_eq!(
            visible_pages(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        // total 5, current 3: start rule wins
        assert_eq!(
            visible_pages(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(5)]
        );
    }

    #[test]
    fn test_display() {
        let rendered: Vec<String> = visible_pages(5, 10).iter().map(|i| i.to_string()).collect();
        assert_eq!(rendered.join(" "), "1 … 4 5 6 … 10");
    }
}
