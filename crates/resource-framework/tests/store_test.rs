mod common;

use common::{Task, TaskStatus};
use resource_framework::{
    ActorStore, Resource, ResourceError, ResourceId, ResourceStore, StoreError,
};

#[tokio::test]
async fn test_store_lifecycle() {
    let (store, handles) = ActorStore::<Task>::spawn(3, 8);
    assert_eq!(store.shard_count(), 3);

    // 1. Create
    let first = store
        .create(Task::new("write docs"), TaskStatus::InProgress)
        .await
        .expect("Create failed");
    assert_eq!(first.id, ResourceId(1));
    assert_eq!(first.version, 1);

    // 2. Get
    let fetched = store.get(first.id).await.expect("Get failed");
    assert_eq!(fetched, first);

    // 3. Update
    let updated = store
        .update(
            first.id,
            Box::new(|record: &mut Resource<Task>| {
                record.attributes.name = "write better docs".into();
                Ok(())
            }),
        )
        .await
        .expect("Update failed");
    assert_eq!(updated.attributes.name, "write better docs");
    assert_eq!(updated.version, 2);
    assert_eq!(updated.status, TaskStatus::InProgress);

    // 4. Delete
    store.delete(first.id).await.expect("Delete failed");
    assert!(matches!(
        store.get(first.id).await,
        Err(StoreError::NotFound(id)) if id == first.id
    ));

    drop(store);
    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn ids_increase_across_shards_and_are_never_reused() {
    let (store, _handles) = ActorStore::<Task>::spawn(4, 8);

    let mut ids = Vec::new();
    for n in 0..6 {
        let record = store
            .create(Task::new(format!("task {n}")), TaskStatus::InProgress)
            .await
            .unwrap();
        ids.push(record.id);
    }
    assert_eq!(ids, (1..=6).map(ResourceId).collect::<Vec<_>>());

    store.delete(ResourceId(6)).await.unwrap();
    let next = store
        .create(Task::new("after delete"), TaskStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(next.id, ResourceId(7));
}

#[tokio::test]
async fn list_all_gathers_every_shard_in_id_order() {
    let (store, _handles) = ActorStore::<Task>::spawn(3, 8);
    for name in ["a", "b", "c", "d", "e"] {
        store
            .create(Task::new(name), TaskStatus::InProgress)
            .await
            .unwrap();
    }
    store.delete(ResourceId(2)).await.unwrap();

    let names: Vec<_> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|record| (record.id.0, record.attributes.name))
        .collect();
    assert_eq!(
        names,
        vec![
            (1, "a".to_string()),
            (3, "c".to_string()),
            (4, "d".to_string()),
            (5, "e".to_string())
        ]
    );
}

#[tokio::test]
async fn rejected_mutation_leaves_record_untouched() {
    let (store, _handles) = ActorStore::<Task>::spawn(2, 8);
    let record = store
        .create(Task::new("stable"), TaskStatus::Completed)
        .await
        .unwrap();

    let result = store
        .update(
            record.id,
            Box::new(|record: &mut Resource<Task>| {
                record.attributes.name = "half-written".into();
                record.status = TaskStatus::Cancelled;
                Err(ResourceError::Unavailable("refused".into()))
            }),
        )
        .await;
    assert!(matches!(
        result,
        Err(StoreError::Rejected(ResourceError::Unavailable(_)))
    ));

    assert_eq!(store.get(record.id).await.unwrap(), record);
}

#[tokio::test]
async fn missing_ids_are_not_found_for_every_operation() {
    let (store, _handles) = ActorStore::<Task>::spawn(2, 8);
    let missing = ResourceId(99);

    assert!(matches!(store.get(missing).await, Err(StoreError::NotFound(_))));
    assert!(matches!(store.delete(missing).await, Err(StoreError::NotFound(_))));
    assert!(matches!(
        store.update(missing, Box::new(|_: &mut Resource<Task>| Ok(()))).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn store_closed_after_shards_stop() {
    let (store, shards) = ActorStore::<Task>::new(1, 4);
    drop(shards);

    let result = store.get(ResourceId(1)).await;
    assert!(matches!(result, Err(StoreError::ActorClosed)));
}

#[tokio::test]
async fn concurrent_updates_on_one_id_are_serialized() {
    let (store, _handles) = ActorStore::<Task>::spawn(2, 64);
    let record = store
        .create(Task::new("counter"), TaskStatus::InProgress)
        .await
        .unwrap();
    let id = record.id;

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .update(
                    id,
                    Box::new(|record: &mut Resource<Task>| {
                        record.attributes.name.push('+');
                        Ok(())
                    }),
                )
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let final_record = store.get(id).await.unwrap();
    assert_eq!(final_record.version, 33);
    assert_eq!(final_record.attributes.name, format!("counter{}", "+".repeat(32)));
}
