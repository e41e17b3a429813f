//! Todo list: an ordered list of tasks with add, toggle and delete.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable id, monotonic within one list.
    pub id: u64,
    /// Task text, whitespace-trimmed.
    pub text: String,
    /// Completion flag.
    pub done: bool,
}

/// Ordered todo list. Insertion order is preserved; ids are never
/// reused after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// The demo starter list.
    pub fn starter() -> Self {
        let mut list = Self::new();
        let first = list.add("Learn Flutter").expect("non-empty");
        list.toggle(first);
        list.add("Build a portfolio");
        list.add("Apply for jobs");
        list
    }

    /// Adds a task, returning its id. Blank input is rejected.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, text, "adding todo");
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            done: false,
        });
        Some(id)
    }

    /// Flips a task's completion flag. Returns false for unknown ids.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = !item.done;
                true
            }
            None => false,
        }
    }

    /// Deletes a task. Returns false for unknown ids.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Tasks in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::starter()
    }
}
