// File: ./src/tasklist.rs
use crate::error::{DownyError, Result};
use crate::model::Task;
use chrono::NaiveDateTime;

/// Ordered collection of every task in the session.
///
/// Insertion order is display order and file order. Commands address tasks with
/// 1-based numbers, [`TaskList::get`] takes 0-based indices.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        &self.tasks[last]
    }

    pub fn add(&mut self, task: Task) -> &Task {
        self.push(task)
    }

    pub fn add_todo(&mut self, name: &str) -> &Task {
        self.push(Task::todo(name))
    }

    pub fn add_deadline(&mut self, name: &str, due: NaiveDateTime) -> &Task {
        self.push(Task::deadline(name, due))
    }

    pub fn add_event(&mut self, name: &str, start: NaiveDateTime, end: NaiveDateTime) -> &Task {
        self.push(Task::event(name, start, end))
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or(DownyError::IndexOutOfRange {
            index,
            size: self.tasks.len(),
        })
    }

    /// Converts a user-facing task number to an index, rejecting anything
    /// outside `1..=len`.
    fn index_of(&self, number: i64) -> Result<usize> {
        let size = self.tasks.len();
        usize::try_from(number)
            .ok()
            .filter(|n| (1..=size).contains(n))
            .map(|n| n - 1)
            .ok_or(DownyError::InvalidTaskNumber { number, size })
    }

    pub fn mark_done(&mut self, number: i64) -> Result<&Task> {
        let index = self.index_of(number)?;
        self.tasks[index].mark_done();
        Ok(&self.tasks[index])
    }

    pub fn mark_not_done(&mut self, number: i64) -> Result<&Task> {
        let index = self.index_of(number)?;
        self.tasks[index].mark_not_done();
        Ok(&self.tasks[index])
    }

    pub fn delete(&mut self, number: i64) -> Result<Task> {
        let index = self.index_of(number)?;
        Ok(self.tasks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks whose name contains `keyword`, ignoring case, in list order.
    /// Each call starts a fresh search.
    pub fn find_by_keyword<'a>(&'a self, keyword: &str) -> impl Iterator<Item = &'a Task> + use<'a> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(move |t| t.name().to_lowercase().contains(&needle))
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
