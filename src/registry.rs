//! Mounted cards, keyed by the id handed out to JavaScript.

use crate::card::SharedCard;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};

thread_local! {
    static CARDS: RefCell<FnvHashMap<u32, SharedCard>> = RefCell::new(FnvHashMap::default());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

pub fn insert(card: SharedCard) -> u32 {
    let id = NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id.wrapping_add(1).max(1));
        id
    });
    CARDS.with(|c| c.borrow_mut().insert(id, card));
    id
}

pub fn get(id: u32) -> Option<SharedCard> {
    CARDS.with(|c| c.borrow().get(&id).cloned())
}

pub fn remove(id: u32) -> Option<SharedCard> {
    CARDS.with(|c| c.borrow_mut().remove(&id))
}

/// Cloned handles, so callers can render without holding the map borrowed.
pub fn snapshot() -> Vec<SharedCard> {
    CARDS.with(|c| c.borrow().values().cloned().collect())
}

pub fn len() -> usize {
    CARDS.with(|c| c.borrow().len())
}
