//! Local Mirror Cache
//!
//! Normalized copy of the remote list: an entity table keyed by id plus the
//! id order the last list query returned. Every write is a whole replace or a
//! single-entry patch, so readers never see a half-applied update.

use std::collections::HashMap;

use crate::models::{Todo, TodoId};

#[derive(Debug, Clone, Default)]
pub struct TodoCache {
    /// Ids in list-query order, unique
    list: Vec<TodoId>,
    /// Entity table; holds exactly the ids in `list`
    entities: HashMap<TodoId, Todo>,
}

impl TodoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refetch strategy: replace everything with a fresh list result.
    /// A duplicated id keeps its first position and its last row.
    pub fn replace_list(&mut self, todos: Vec<Todo>) {
        let mut list = Vec::with_capacity(todos.len());
        let mut entities = HashMap::with_capacity(todos.len());
        for todo in todos {
            if entities.insert(todo.id.clone(), todo.clone()).is_none() {
                list.push(todo.id);
            }
        }
        self.list = list;
        self.entities = entities;
    }

    /// Direct patch strategy: drop one id, leave the rest untouched
    pub fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        let removed = self.entities.remove(id)?;
        self.list.retain(|listed| listed != id);
        Some(removed)
    }

    /// Write a server-returned row over a known entity.
    /// Unknown ids are ignored; list membership never changes here.
    pub fn merge_entity(&mut self, todo: Todo) -> bool {
        match self.entities.get_mut(&todo.id) {
            Some(existing) => {
                *existing = todo;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Current list in query order
    pub fn snapshot(&self) -> Vec<Todo> {
        self.list
            .iter()
            .filter_map(|id| self.entities.get(id))
            .cloned()
            .collect()
    }
}
