//! Append-only in-memory collections for festival entities.

use parking_lot::RwLock;

use crate::models::{Artist, News, Rating, ScheduleEntry, Stage, Ticket, User};

#[derive(Debug)]
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    // Append and echo back the stored item
    pub fn push(&self, item: T) -> T {
        self.items.write().push(item.clone());
        item
    }

    pub fn all(&self) -> Vec<T> {
        self.items.read().clone()
    }

    pub fn filtered(&self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        self.items.read().iter().filter(|item| keep(item)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct Store {
    pub artists: Collection<Artist>,
    pub stages: Collection<Stage>,
    pub schedule: Collection<ScheduleEntry>,
    pub tickets: Collection<Ticket>,
    pub users: Collection<User>,
    pub ratings: Collection<Rating>,
    pub news: Collection<News>,
}
