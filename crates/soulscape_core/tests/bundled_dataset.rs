use soulscape_core::{bundled_catalog, place_route, parse_place_route, QueryEngine};

#[test]
fn bundled_dataset_is_valid_and_non_empty() {
    let catalog = bundled_catalog();
    assert!(!catalog.is_empty());
    assert!(catalog.place_count() > catalog.state_count());
}

#[test]
fn bundled_dataset_keeps_the_identity_contract() {
    let catalog = bundled_catalog();
    let engine = QueryEngine::new(catalog);

    for (state, places) in catalog.iter() {
        assert_eq!(engine.state_places(state), Some(places));
        for expected in places {
            assert_eq!(engine.get_place(state, &expected.name), Some(expected));
        }
    }
}

#[test]
fn bundled_places_survive_the_route_round_trip() {
    let catalog = bundled_catalog();
    let engine = QueryEngine::new(catalog);

    for (state, places) in catalog.iter() {
        for expected in places {
            let route = place_route(state, &expected.name);
            let (decoded_state, decoded_name) = parse_place_route(&route).unwrap();
            assert_eq!(
                engine.get_place(&decoded_state, &decoded_name),
                Some(expected),
                "route `{route}` must resolve back to the listed place"
            );
        }
    }
}

#[test]
fn known_landmarks_are_present() {
    let catalog = bundled_catalog();
    let engine = QueryEngine::new(catalog);

    assert!(engine.get_place("Rajasthan", "Hawa Mahal").is_some());
    assert!(engine.get_place("Uttar Pradesh", "Taj Mahal").is_some());
    assert_eq!(engine.search("taj").len(), 1);
}
