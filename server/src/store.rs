//! In-memory todo collection.
//!
//! `TodoStore` keeps todos in insertion order and hands out ids from a
//! counter that only moves forward, so an id is never reused after its todo
//! is deleted. Lookups are a linear scan by id. The store itself is not
//! synchronized; the router wraps it in a lock (see `SharedStore`).

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::error::TodoError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Payload for creating a todo. Any other key, including `completed`, is
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    /// `None` when the key is absent, `null`, or not a string.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// Payload for updating a todo. Absent fields leave the todo unchanged.
/// Each field is decoded on its own, so a mistyped `completed` does not
/// discard a valid `title`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub completed: Option<bool>,
}

/// Decode a field that is present, yielding `None` when its value has the
/// wrong type instead of failing the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All todos, oldest first.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: u64) -> Result<&Todo, TodoError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::NotFound)
    }

    /// Append a new incomplete todo. Fails before touching the counter when
    /// the title is absent; an empty title is accepted.
    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, TodoError> {
        let title = input.title.ok_or(TodoError::MissingTitle)?;
        let todo = Todo {
            id: self.next_id,
            title,
            completed: false,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    pub fn update(&mut self, id: u64, input: UpdateTodo) -> Result<Todo, TodoError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::NotFound)?;
        if let Some(title) = input.title {
            todo.title = title;
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    /// Remove the todo with `id` and return it.
    pub fn delete(&mut self, id: u64) -> Result<Todo, TodoError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(TodoError::NotFound)?;
        Ok(self.todos.remove(index))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// The id the next successful `create` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
