//! The async adapter drives the same operations through `TodoRepository`.

mod common;

use futures::{executor::block_on, future::join_all};
use todostore::{
    memory::InMemoryStore,
    prelude::*,
    serde_json::json,
};

use common::{ManualClock, fields, store_with_clock, titles};

#[test]
fn repository_round_trip() {
    block_on(async {
        let clock = ManualClock::at(100);
        let repo = SharedStore::new(store_with_clock(&clock));

        let created = repo.save(fields(json!({ "title": "a" })), None).await.unwrap();
        let id = created[0].id;
        repo.save(fields(json!({ "title": "b" })), None).await.unwrap();

        let all = repo.save(fields(json!({ "completed": true })), Some(id)).await.unwrap();
        assert_eq!(all.len(), 2);

        let done = repo
            .find(Query::builder().eq("completed", true).build())
            .await
            .unwrap();
        assert_eq!(titles(&done), vec!["a"]);

        let remaining = repo.remove(id).await.unwrap();
        assert_eq!(titles(&remaining), vec!["b"]);

        assert!(repo.drop_all().await.unwrap().is_empty());
        assert!(repo.find_all().await.unwrap().is_empty());
    });
}

#[test]
fn clones_serialise_onto_one_store() {
    block_on(async {
        let repo = SharedStore::from(Store::open(InMemoryStore::new(), "todos").unwrap());

        let saves = (0..20).map(|n| {
            let repo = repo.clone();
            async move { repo.save(fields(json!({ "n": n })), None).await }
        });
        for result in join_all(saves).await {
            assert_eq!(result.unwrap().len(), 1);
        }

        let mut ids = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.id)
            .collect::<Vec<_>>();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(repo.name().await, "todos");
    });
}

#[test]
fn repository_is_object_safe() {
    block_on(async {
        let repo: Box<dyn TodoRepository> =
            Box::new(SharedStore::new(Store::open(InMemoryStore::new(), "todos").unwrap()));

        repo.save(fields(json!({ "title": "a" })), None).await.unwrap();

        assert_eq!(repo.find(Query::all()).await.unwrap().len(), 1);
    });
}
