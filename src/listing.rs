//! Listing Utilities
//!
//! Search filtering and pagination for the list view.

use todo_api::Todo;

/// One page of the filtered list, with the page number already clamped
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Todo>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl Page {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Case-insensitive substring match on the title
pub fn filter_todos<'a>(todos: &'a [Todo], query: &str) -> Vec<&'a Todo> {
    let needle = query.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.title.to_lowercase().contains(&needle))
        .collect()
}

/// Never less than 1, so an empty list still reads "1 / 1"
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate(todos: &[Todo], query: &str, page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let matches = filter_todos(todos, query);
    let total_pages = total_pages(matches.len(), page_size);
    let page = clamp_page(page, total_pages);

    let items = matches
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|todo| (*todo).clone())
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_matches: matches.len(),
    }
}
