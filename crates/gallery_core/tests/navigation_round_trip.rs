use gallery_core::{update, AppState, Effect, HistoryState, Manifest, Msg};
use serde_json::json;
use url::Url;

fn init_logging() {
    gallery_logging::initialize_for_tests();
}

fn manifest() -> Manifest {
    serde_json::from_value(json!({
        "baseUrl": "assets",
        "categories": [
            { "slug": "a", "name": "A", "path": "a", "items": [] },
            { "slug": "b", "name": "B", "path": "b", "items": [] }
        ]
    }))
    .unwrap()
}

/// Returns the url carried by a single history effect.
fn history_url(effects: &[Effect]) -> Url {
    match effects {
        [Effect::ReplaceHistory { url, .. }] | [Effect::PushHistory { url, .. }] => url.clone(),
        other => panic!("expected one history effect, got {other:?}"),
    }
}

#[test]
fn back_restores_previous_category_without_new_entry() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::ManifestLoaded {
            manifest: manifest(),
            location: Url::parse("https://lab.test/index.html").unwrap(),
        },
    );
    let first_url = history_url(&effects);

    let (state, effects) = update(state, Msg::CategoryClicked("b".to_string()));
    assert!(matches!(effects.as_slice(), [Effect::PushHistory { .. }]));
    let second_url = history_url(&effects);
    assert_eq!(second_url.as_str(), "https://lab.test/index.html?category=b");

    // Back to the initial entry.
    let (mut state, effects) = update(
        state,
        Msg::HistoryPopped {
            state: Some(HistoryState::new("a")),
            location: first_url,
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let gallery = state.gallery().unwrap();
    assert_eq!(gallery.current_category().slug, "a");
    assert_eq!(gallery.navigation().location().as_str(), "https://lab.test/index.html?category=a");

    // Forward again, this time with no state object: the URL decides.
    let (state, effects) = update(
        state,
        Msg::HistoryPopped {
            state: None,
            location: second_url,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.gallery().unwrap().current_category().slug, "b");
}

#[test]
fn pop_to_current_category_changes_nothing() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::ManifestLoaded {
            manifest: manifest(),
            location: Url::parse("https://lab.test/?category=b").unwrap(),
        },
    );
    let (state, _) = update(state, Msg::NextPageClicked);
    let (mut state, _) = update(state, Msg::NoOp);
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::HistoryPopped {
            state: None,
            location: Url::parse("https://lab.test/").unwrap(),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.gallery().unwrap().current_category().slug, "b");
}
