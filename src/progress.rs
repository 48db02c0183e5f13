use serde::{Deserialize, Serialize};

use crate::content::TodoItem;
use crate::kv::KvStore;

/// One persisted completion flag. Text is deliberately excluded so an
/// admin text edit is never clobbered by stale user-local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoMark {
    pub id: u32,
    pub done: bool,
}

fn progress_key(day: u8) -> String {
    format!("day_{day:02}")
}

/// Per-day, per-user todo completion. Reads and writes are best-effort:
/// failures are logged and callers keep their in-memory state.
pub struct ProgressStore {
    kv: Box<dyn KvStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(kv: Box<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Merges the persisted completion record into `base`: a left join on
    /// id where the base list drives cardinality and order. Ids that only
    /// exist in the record are dropped; base items with no record keep
    /// their baked-in flag.
    #[must_use]
    pub fn load(&self, day: u8, base: &[TodoItem]) -> Vec<TodoItem> {
        let marks: Vec<TodoMark> = match self.kv.get(&progress_key(day)) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(marks) => marks,
                Err(e) => {
                    log::warn!("discarding corrupt todo progress for day {day}: {e}");
                    return base.to_vec();
                }
            },
            None => return base.to_vec(),
        };

        base.iter()
            .map(|item| {
                let done = marks
                    .iter()
                    .find(|mark| mark.id == item.id)
                    .map_or(item.done, |mark| mark.done);
                TodoItem {
                    done,
                    ..item.clone()
                }
            })
            .collect()
    }

    /// Persists `{id, done}` pairs only. A failed write is logged and
    /// otherwise ignored; the toggle the user just made stays visible.
    pub fn save(&mut self, day: u8, todos: &[TodoItem]) {
        let marks: Vec<TodoMark> = todos
            .iter()
            .map(|t| TodoMark {
                id: t.id,
                done: t.done,
            })
            .collect();

        let raw = match serde_json::to_string(&marks) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("failed to encode todo progress for day {day}: {e}");
                return;
            }
        };
        if let Err(e) = self.kv.set(&progress_key(day), &raw) {
            log::error!("failed to save todo progress for day {day}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemStore;

    fn item(id: u32, text: &str, done: bool) -> TodoItem {
        TodoItem {
            id,
            text: text.to_string(),
            done,
        }
    }

    #[test]
    fn load_without_record_returns_base() {
        let store = ProgressStore::new(Box::new(MemStore::new()));
        let base = vec![item(1, "a", false), item(2, "b", true)];
        assert_eq!(store.load(3, &base), base);
    }

    #[test]
    fn merge_is_left_join_on_id() {
        let mut store = ProgressStore::new(Box::new(MemStore::new()));
        let base = vec![item(1, "a", false), item(2, "b", false)];
        store.save(
            6,
            &[item(1, "stale text", true), item(3, "removed", true)],
        );

        let merged = store.load(6, &base);
        assert_eq!(
            merged,
            vec![item(1, "a", true), item(2, "b", false)],
            "id 3 dropped, id 2 keeps base default, text comes from base"
        );
    }

    #[test]
    fn corrupt_record_falls_back_to_base() {
        let mut store = ProgressStore::new(Box::new(MemStore::new()));
        store.kv.set("day_09", "[[nope").unwrap();
        let base = vec![item(1, "a", false)];
        assert_eq!(store.load(9, &base), base);
    }

    #[test]
    fn save_discards_text() {
        let mut store = ProgressStore::new(Box::new(MemStore::new()));
        store.save(4, &[item(7, "secret text", true)]);
        let raw = store.kv.get("day_04").unwrap();
        assert!(!raw.contains("secret text"));
        assert!(raw.contains("\"id\":7"));
    }
}
