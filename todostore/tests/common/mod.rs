#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use todostore::{
    memory::InMemoryStore,
    prelude::*,
    serde_json::Value,
};

/// Clock the test controls; clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn at(millis: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(millis)),
        }
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

pub fn fields(value: Value) -> Fields {
    fields_from_json(value).expect("test fields must be a JSON object")
}

/// A store over a fresh backend whose ids come from `clock`.
pub fn store_with_clock(clock: &ManualClock) -> Store<InMemoryStore> {
    Store::builder(InMemoryStore::new())
        .collection("todos")
        .id_generator(TimestampIds::new(clock.clone()))
        .build()
        .expect("in-memory store always opens")
}

pub fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().map(|record| record.id.value()).collect()
}

pub fn titles(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            record
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
