//! Resolver tests: dispatch, completeness, ordering and progress accounting.

mod common;

use beatlist_core::{
    CanonicalMap, MapHash, MapRef, MapResolution, Progress, ProgressStatus, UnresolvableReason,
};
use beatlist_playlist::resolve_maps;
use chrono::{TimeZone, Utc};
use common::{entry, init_tracing, FakeCatalog};
use proptest::prelude::*;

fn map_at(millis: i64, reference: MapRef) -> CanonicalMap {
    CanonicalMap::new(Utc.timestamp_millis_opt(millis).unwrap(), reference)
}

fn hash(hex: &str) -> MapRef {
    MapRef::Hash(MapHash::from_hex(hex).unwrap())
}

#[tokio::test]
async fn test_dispatch_by_reference_kind() {
    init_tracing();
    let catalog = FakeCatalog::new(vec![
        entry("1a2b", "aaaa", "By Key"),
        entry("ffff", "bbbb", "By Hash"),
    ]);
    let progress = Progress::new();

    let maps = vec![
        map_at(1, MapRef::Key(0x1a2b)),
        map_at(2, hash("BBBB")),
        map_at(3, MapRef::Zip(vec![0x50, 0x4b])),
        map_at(4, MapRef::LevelId("custom_level_ABC".into())),
        map_at(5, MapRef::Unknown(99)),
        map_at(6, MapRef::Key(0xdead)),
    ];

    let loaded = resolve_maps(maps, &catalog, &progress).await;

    assert_eq!(loaded.len(), 6);
    assert!(matches!(&loaded[0].resolution, MapResolution::Found(e) if e.name == "By Key"));
    assert!(matches!(&loaded[1].resolution, MapResolution::Found(e) if e.name == "By Hash"));
    assert_eq!(loaded[2].error(), Some(UnresolvableReason::ZipUnsupported));
    assert_eq!(loaded[3].error(), Some(UnresolvableReason::LevelIdUnsupported));
    assert_eq!(loaded[4].error(), Some(UnresolvableReason::UnknownType));
    assert_eq!(loaded[5].online(), Some(None));

    // Only key and hash references reach the catalog, rendered lowercase
    assert_eq!(
        *catalog.key_lookups.lock().unwrap(),
        vec!["1a2b".to_string(), "dead".to_string()]
    );
    assert_eq!(*catalog.hash_lookups.lock().unwrap(), vec!["bbbb".to_string()]);
}

#[tokio::test]
async fn test_lookup_failure_is_treated_as_not_found() {
    init_tracing();
    let catalog = FakeCatalog::new(vec![entry("1", "abcd", "Unreachable")]).failing_on("abcd");
    let progress = Progress::new();

    let loaded = resolve_maps(vec![map_at(0, hash("abcd"))], &catalog, &progress).await;

    assert_eq!(loaded[0].resolution, MapResolution::NotFound);
    assert_eq!(loaded[0].error(), None);
    assert_eq!(progress.done(), 1);
}

#[tokio::test]
async fn test_output_order_is_input_order() {
    let entries: Vec<_> = (0..10u32)
        .map(|i| entry(&format!("{:x}", i + 1), &format!("{:04x}", i), &format!("Map {i}")))
        .collect();
    let catalog = FakeCatalog::new(entries).with_reverse_delay();
    let progress = Progress::new();

    let maps: Vec<_> = (0..10u32)
        .map(|i| map_at(i64::from(i), MapRef::Key(i + 1)))
        .collect();

    let loaded = resolve_maps(maps, &catalog, &progress).await;

    for (i, map) in loaded.iter().enumerate() {
        assert_eq!(map.date_added.timestamp_millis(), i as i64);
        match &map.resolution {
            MapResolution::Found(e) => assert_eq!(e.name, format!("Map {i}")),
            other => panic!("map {i} not resolved: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_progress_accounting() {
    let catalog = FakeCatalog::new(vec![]).with_reverse_delay();
    let progress = Progress::new();
    assert_eq!(progress.status(), ProgressStatus::NotStarted);

    let maps = vec![
        map_at(0, MapRef::Key(1)),
        map_at(0, MapRef::Zip(vec![])),
        map_at(0, hash("00ff")),
        map_at(0, MapRef::Unknown(3)),
    ];

    let loaded = resolve_maps(maps, &catalog, &progress).await;

    let snapshot = progress.snapshot();
    assert_eq!(snapshot.status, ProgressStatus::Completed);
    assert_eq!(snapshot.total, 4);
    assert_eq!(snapshot.done, 4);
    assert_eq!(loaded.len(), 4);
}

#[tokio::test]
async fn test_progress_is_running_during_resolution() {
    let catalog = std::sync::Arc::new(FakeCatalog::new(vec![]).with_reverse_delay());
    let progress = std::sync::Arc::new(Progress::new());

    let task = {
        let catalog = std::sync::Arc::clone(&catalog);
        let progress = std::sync::Arc::clone(&progress);
        tokio::spawn(async move {
            let maps = vec![map_at(0, MapRef::Key(1)), map_at(0, MapRef::Key(2))];
            resolve_maps(maps, catalog.as_ref(), progress.as_ref()).await
        })
    };

    // Wait until the resolver has dispatched
    while progress.status() == ProgressStatus::NotStarted {
        tokio::task::yield_now().await;
    }
    let during = progress.snapshot();
    assert_eq!(during.total, 2);
    assert!(during.done <= 2);

    let loaded = task.await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(progress.status(), ProgressStatus::Completed);
    assert_eq!(progress.done(), 2);
}

fn reference_strategy() -> impl Strategy<Value = MapRef> {
    prop_oneof![
        (0u32..64).prop_map(MapRef::Key),
        proptest::collection::vec(any::<u8>(), 1..4).prop_map(|b| MapRef::Hash(MapHash::from_bytes(b))),
        proptest::collection::vec(any::<u8>(), 0..8).prop_map(MapRef::Zip),
        "[a-zA-Z0-9_]{0,12}".prop_map(MapRef::LevelId),
        (4u8..=255).prop_map(MapRef::Unknown),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_map_gets_exactly_one_outcome(
        refs in proptest::collection::vec(reference_strategy(), 0..24),
        known_keys in proptest::collection::hash_set(0u32..64, 0..16),
    ) {
        let entries = known_keys
            .iter()
            .map(|k| entry(&format!("{k:x}"), &format!("{:02x}", k), "Known"))
            .collect();
        let catalog = FakeCatalog::new(entries);
        let progress = Progress::new();

        let maps: Vec<_> = refs
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, r)| map_at(i as i64, r))
            .collect();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let loaded = runtime.block_on(resolve_maps(maps, &catalog, &progress));

        prop_assert_eq!(loaded.len(), refs.len());
        prop_assert_eq!(progress.total(), refs.len());
        prop_assert_eq!(progress.done(), refs.len());
        prop_assert_eq!(progress.status(), ProgressStatus::Completed);

        for (i, (map, reference)) in loaded.iter().zip(&refs).enumerate() {
            prop_assert_eq!(&map.source, reference);
            prop_assert_eq!(map.date_added.timestamp_millis(), i as i64);
            // online and error are mutually exclusive and one of them is set
            prop_assert!(map.online().is_some() != map.error().is_some());

            match reference {
                MapRef::Key(_) | MapRef::Hash(_) => prop_assert!(map.online().is_some()),
                MapRef::Zip(_) => prop_assert_eq!(map.error(), Some(UnresolvableReason::ZipUnsupported)),
                MapRef::LevelId(_) => prop_assert_eq!(map.error(), Some(UnresolvableReason::LevelIdUnsupported)),
                MapRef::Unknown(_) => prop_assert_eq!(map.error(), Some(UnresolvableReason::UnknownType)),
            }
        }
    }
}
