//! Filtered View
//!
//! Lazy search over the task list. Nothing here is stored; the view is
//! recomputed from the current tasks every time it is asked for.

use std::iter::FusedIterator;

use crate::models::Task;

/// Tasks whose text contains the search term, ignoring case, in list order.
/// Clones are independent cursors.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    tasks: std::slice::Iter<'a, Task>,
    needle: String,
}

impl<'a> FilteredView<'a> {
    pub fn new(tasks: &'a [Task], term: &str) -> Self {
        Self {
            tasks: tasks.iter(),
            needle: term.to_lowercase(),
        }
    }
}

impl<'a> Iterator for FilteredView<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.tasks.find(|task| task.matches(needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.tasks.size_hint().1)
    }
}

impl FusedIterator for FilteredView<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_tasks;
    use rstest::rstest;

    fn ids(view: FilteredView<'_>) -> Vec<u32> {
        view.map(|t| t.id).collect()
    }

    #[test]
    fn test_empty_term_keeps_everything_in_order() {
        let tasks = seed_tasks();
        assert_eq!(ids(FilteredView::new(&tasks, "")), vec![1, 2, 3]);
    }

    #[rstest]
    #[case("ADD", vec![1])]
    #[case("add", vec![1])]
    #[case("TaSkS", vec![1, 2, 3])]
    #[case("selected", vec![3])]
    #[case("completed tasks", vec![2])]
    #[case("milk", vec![])]
    fn test_term_is_case_insensitive(#[case] term: &str, #[case] expected: Vec<u32>) {
        let tasks = seed_tasks();
        assert_eq!(ids(FilteredView::new(&tasks, term)), expected);
    }

    #[test]
    fn test_clone_gives_independent_cursor() {
        let tasks = seed_tasks();
        let mut view = FilteredView::new(&tasks, "tasks");
        view.next();
        let rest = view.clone();
        assert_eq!(ids(rest), vec![2, 3]);
        assert_eq!(ids(view), vec![2, 3]);
    }
}
