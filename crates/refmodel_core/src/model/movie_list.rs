//! Shareable movie lists and the users holding them.
//!
//! # Responsibility
//! - Let several users hold handles to one list.
//! - Keep list contents unique.
//!
//! # Invariants
//! - `User::add_list` stores a handle, never a copy.
//! - A list holds each title at most once.

use crate::model::error::{require_text, ModelResult};
use crate::model::shared::Shared;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieListState {
    list_name: String,
    movies: BTreeSet<String>,
}

/// Shared handle to a named set of movie titles.
#[derive(Debug, Clone)]
pub struct MovieList(Rc<RefCell<MovieListState>>);

impl MovieList {
    pub fn new(list_name: &str) -> ModelResult<Self> {
        let state = MovieListState {
            list_name: require_text(list_name, "list_name")?,
            movies: BTreeSet::new(),
        };
        Ok(Self(Rc::new(RefCell::new(state))))
    }

    pub fn list_name(&self) -> String {
        self.0.borrow().list_name.clone()
    }

    /// Inserts `movie`; duplicates are absorbed.
    ///
    /// Returns `true` when the title was not present before.
    pub fn add_movie_to_list(&self, movie: &str) -> ModelResult<bool> {
        let movie = require_text(movie, "movie")?;
        let mut state = self.0.borrow_mut();
        let inserted = state.movies.insert(movie);
        log::debug!(
            "event=movie_added module=movie_list inserted={} size={}",
            inserted,
            state.movies.len()
        );
        Ok(inserted)
    }

    pub fn contains(&self, movie: &str) -> bool {
        self.0.borrow().movies.contains(movie.trim())
    }

    /// Sorted copy of the titles.
    pub fn movies(&self) -> Vec<String> {
        self.0.borrow().movies.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().movies.is_empty()
    }

    /// Printable form: a header line, one line per title, then a blank line.
    pub fn render(&self) -> Vec<String> {
        let state = self.0.borrow();
        let mut lines = Vec::with_capacity(state.movies.len() + 2);
        lines.push(format!("Movie list: {}", state.list_name));
        lines.extend(state.movies.iter().cloned());
        lines.push(String::new());
        lines
    }

    pub fn snapshot(&self) -> MovieListSnapshot {
        let state = self.0.borrow();
        MovieListSnapshot {
            list_name: state.list_name.clone(),
            movies: state.movies.iter().cloned().collect(),
        }
    }
}

impl Shared for MovieList {
    type State = MovieListState;

    fn cell(&self) -> &Rc<RefCell<MovieListState>> {
        &self.0
    }
}

/// Serializable value copy of a `MovieList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieListSnapshot {
    pub list_name: String,
    pub movies: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UserState {
    lists: BTreeMap<String, MovieList>,
}

/// Shared handle to a user and the lists they hold.
#[derive(Debug, Clone, Default)]
pub struct User(Rc<RefCell<UserState>>);

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a handle to `list` under its current name.
    ///
    /// A list already stored under that name is replaced. Renaming is not
    /// supported, so the key stays in sync with the list.
    pub fn add_list(&self, list: &MovieList) {
        let name = list.list_name();
        let replaced = self
            .0
            .borrow_mut()
            .lists
            .insert(name, list.clone())
            .is_some();
        log::debug!("event=list_shared module=movie_list replaced={replaced}");
    }

    /// Handle to the list stored under `list_name`.
    pub fn list(&self, list_name: &str) -> Option<MovieList> {
        self.0.borrow().lists.get(list_name).cloned()
    }

    pub fn list_names(&self) -> Vec<String> {
        self.0.borrow().lists.keys().cloned().collect()
    }
}

impl Shared for User {
    type State = UserState;

    fn cell(&self) -> &Rc<RefCell<UserState>> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{MovieList, User};
    use crate::model::shared::identity;

    #[test]
    fn add_list_replaces_same_name() {
        let user = User::new();
        let first = MovieList::new("SurfMovies").unwrap();
        let second = MovieList::new("SurfMovies").unwrap();

        user.add_list(&first);
        user.add_list(&second);

        assert_eq!(user.list_names(), vec!["SurfMovies"]);
        let stored = user.list("SurfMovies").unwrap();
        assert!(identity(&stored, &second));
        assert!(!identity(&stored, &first));
    }

    #[test]
    fn render_lists_header_titles_and_trailing_blank() {
        let list = MovieList::new("SurfMovies").unwrap();
        list.add_movie_to_list("Point Break").unwrap();
        assert_eq!(
            list.render(),
            vec!["Movie list: SurfMovies", "Point Break", ""]
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let list = MovieList::new("SurfMovies").unwrap();
        assert!(list.add_movie_to_list("  ").is_err());
        assert!(list.is_empty());
    }
}
