use soulscape_core::{Catalog, Place, QueryEngine, SUGGESTION_LIMIT};

fn place(name: &str) -> Place {
    Place {
        name: name.to_string(),
        description: format!("about {name}"),
        image_url: format!("/images/{name}.jpg"),
        timings: "Open all day".to_string(),
        ticket_price: "Free".to_string(),
    }
}

/// The worked example from the product notes: two Rajasthan places, one in
/// Kerala.
fn example_catalog() -> Catalog {
    Catalog::from_entries(vec![
        (
            "Rajasthan".to_string(),
            vec![place("Hawa Mahal"), place("Amber Fort")],
        ),
        ("Kerala".to_string(), vec![place("Alleppey")]),
    ])
    .unwrap()
}

fn wide_catalog() -> Catalog {
    Catalog::from_entries(vec![
        (
            "Rajasthan".to_string(),
            vec![place("Hawa Mahal"), place("Amber Fort"), place("City Palace")],
        ),
        (
            "Kerala".to_string(),
            vec![place("Alleppey"), place("Munnar"), place("Fort Kochi")],
        ),
        (
            "Goa".to_string(),
            vec![place("Baga Beach"), place("Old Goa Fort")],
        ),
    ])
    .unwrap()
}

#[test]
fn suggest_matches_state_names_case_insensitively() {
    let catalog = example_catalog();
    let engine = QueryEngine::new(&catalog);

    let suggestions = engine.suggest("ker");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].place.name, "Alleppey");
    assert_eq!(suggestions[0].state, "Kerala");
}

#[test]
fn suggest_matches_place_names_anywhere_in_the_string() {
    let catalog = example_catalog();
    let engine = QueryEngine::new(&catalog);

    let suggestions = engine.suggest("MAHA");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].place.name, "Hawa Mahal");
}

#[test]
fn suggest_returns_empty_for_empty_query() {
    let catalog = example_catalog();
    assert!(QueryEngine::new(&catalog).suggest("").is_empty());
}

#[test]
fn suggest_is_capped_and_keeps_catalog_order() {
    let catalog = wide_catalog();
    let engine = QueryEngine::new(&catalog);

    // Every place's owning state or name contains the letter "a".
    let suggestions = engine.suggest("a");
    assert_eq!(suggestions.len(), SUGGESTION_LIMIT);

    let names: Vec<&str> = suggestions
        .iter()
        .map(|hit| hit.place.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Hawa Mahal", "Amber Fort", "City Palace", "Alleppey", "Munnar"]
    );
}

#[test]
fn every_suggestion_contains_the_query_in_place_or_state_name() {
    let catalog = wide_catalog();
    let engine = QueryEngine::new(&catalog);

    for query in ["fort", "goa", "mun", "e"] {
        for hit in engine.suggest(query) {
            let in_place = hit.place.name.to_lowercase().contains(query);
            let in_state = hit.state.to_lowercase().contains(query);
            assert!(
                in_place || in_state,
                "suggestion `{}` of `{}` does not contain `{query}`",
                hit.place.name,
                hit.state
            );
        }
    }
}

#[test]
fn search_by_state_name_returns_the_full_place_list() {
    let catalog = example_catalog();
    let engine = QueryEngine::new(&catalog);

    let results = engine.search("raj");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].state, "Rajasthan");

    let names: Vec<&str> = results[0]
        .places
        .iter()
        .map(|place| place.name.as_str())
        .collect();
    assert_eq!(names, vec!["Hawa Mahal", "Amber Fort"]);
}

#[test]
fn search_by_place_name_returns_the_whole_state_entry() {
    let catalog = example_catalog();
    let engine = QueryEngine::new(&catalog);

    // Matching one place keeps the sibling places in the entry; filtering
    // happens at state granularity, not per place.
    let results = engine.search("hawa");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].state, "Rajasthan");
    assert_eq!(results[0].places.len(), 2);
}

#[test]
fn search_results_are_a_subset_of_catalog_entries_in_order() {
    let catalog = wide_catalog();
    let engine = QueryEngine::new(&catalog);

    let results = engine.search("fort");
    let states: Vec<&str> = results.iter().map(|hit| hit.state).collect();
    // "Fort" appears in a Rajasthan place ("Amber Fort"), a Kerala place
    // ("Fort Kochi") and a Goa place ("Old Goa Fort").
    assert_eq!(states, vec!["Rajasthan", "Kerala", "Goa"]);

    for hit in &results {
        assert_eq!(catalog.get(hit.state), Some(hit.places));
    }
}

#[test]
fn search_without_matches_is_empty() {
    let catalog = wide_catalog();
    assert!(QueryEngine::new(&catalog).search("himalaya").is_empty());
}

#[test]
fn blank_search_query_returns_empty() {
    let catalog = wide_catalog();
    let engine = QueryEngine::new(&catalog);

    assert!(engine.search("").is_empty());
    assert!(engine.search("   ").is_empty());
}

#[test]
fn entries_and_featured_follow_catalog_order() {
    let catalog = wide_catalog();
    let engine = QueryEngine::new(&catalog);

    let all: Vec<&str> = engine.entries().map(|entry| entry.state).collect();
    assert_eq!(all, vec!["Rajasthan", "Kerala", "Goa"]);

    let featured: Vec<&str> = engine
        .featured(2)
        .into_iter()
        .map(|entry| entry.state)
        .collect();
    assert_eq!(featured, vec!["Rajasthan", "Kerala"]);

    assert_eq!(engine.state_count(), 3);
    assert_eq!(engine.place_count(), 8);
}
