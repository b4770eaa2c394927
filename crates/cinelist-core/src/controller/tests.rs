use super::*;
use crate::directory::SEARCH_ERROR_MESSAGE;
use crate::render::{CardAction, DETAILS_UNAVAILABLE_MESSAGE, EMPTY_WATCHLIST_MESSAGE};
use crate::store::{MemBackend, WATCHLIST_KEY};
use crate::test_utils::{detail, summary, FakeCatalog};
use cinelist_catalog::StatusCode;

const PLACEHOLDER: &str = "https://via.placeholder.com/150x220?text=No+Image";

fn batman_catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_search(
            "batman",
            vec![
                summary("tt1", "Batman Begins", "2005", "https://example.com/bb.jpg"),
                summary("tt2", "Batman", "1989", "N/A"),
            ],
        )
        .with_detail(detail("tt1", "Batman Begins"))
}

fn controller(catalog: FakeCatalog, backend: MemBackend) -> Controller<FakeCatalog, MemBackend> {
    let store = WatchlistStore::load(backend).unwrap();
    Controller::new(Directory::new(catalog), store, PLACEHOLDER)
}

fn watchlist_ids(c: &Controller<FakeCatalog, MemBackend>) -> Vec<String> {
    c.store().snapshot().iter().map(|m| m.id.clone()).collect()
}

#[test]
fn test_starts_idle_with_saved_watchlist_rendered() {
    let raw = r#"[{"imdbID":"tt9","Title":"Saved","Year":"1999","Poster":"N/A"}]"#;
    let c = controller(FakeCatalog::new(), MemBackend::with_item(WATCHLIST_KEY, raw));

    assert_eq!(c.state(), SearchState::Idle);
    assert_eq!(c.view().results, Region::Blank);
    assert_eq!(c.view().watchlist.cards().len(), 1);
    assert_eq!(c.view().watchlist.cards()[0].poster_url, PLACEHOLDER);
    assert!(!c.is_modal_open());
}

#[tokio::test]
async fn test_batman_scenario() {
    let mut c = controller(batman_catalog(), MemBackend::new());

    assert!(c.submit_search("batman").await);
    assert_eq!(c.state(), SearchState::ResultsShown);
    let cards = c.view().results.cards();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| card.actions.contains(&CardAction::AddToWatchlist)));

    assert!(c.add_to_watchlist("tt1").unwrap());
    assert_eq!(watchlist_ids(&c), vec!["tt1"]);

    assert!(!c.add_to_watchlist("tt1").unwrap());
    assert_eq!(watchlist_ids(&c), vec!["tt1"]);
    assert_eq!(c.store().backend().write_count(), 1);

    assert!(c.remove_from_watchlist("tt1").unwrap());
    assert!(c.store().is_empty());
    assert_eq!(
        c.view().watchlist,
        Region::Placeholder(EMPTY_WATCHLIST_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_added_record_comes_from_results_not_rendered_card() {
    let mut c = controller(batman_catalog(), MemBackend::new());
    c.submit_search("batman").await;

    c.add_to_watchlist("tt2").unwrap();

    // The card shows the placeholder image but the saved record keeps the sentinel
    assert_eq!(c.view().watchlist.cards()[0].poster_url, PLACEHOLDER);
    assert_eq!(c.store().snapshot()[0], summary("tt2", "Batman", "1989", "N/A"));
}

#[tokio::test]
async fn test_add_unknown_result_is_rejected() {
    let mut c = controller(batman_catalog(), MemBackend::new());
    c.submit_search("batman").await;

    let err = c.add_to_watchlist("tt404").unwrap_err();
    assert!(matches!(err, ControllerError::UnknownResult(id) if id == "tt404"));
    assert!(c.store().is_empty());
}

#[tokio::test]
async fn test_failed_search_shows_error_and_no_cards() {
    let mut c = controller(batman_catalog(), MemBackend::new());

    c.submit_search("batman").await;
    assert_eq!(c.results().len(), 2);

    c.submit_search("qwertyuiop").await;
    assert_eq!(c.view().results.error_message(), Some(SEARCH_ERROR_MESSAGE));
    assert!(c.view().results.cards().is_empty());
    assert!(c.results().is_empty());

    // Previous results are no longer addable
    assert!(c.add_to_watchlist("tt1").is_err());
}

#[tokio::test]
async fn test_transport_failure_shows_error() {
    let catalog = batman_catalog().failing_with(StatusCode::INTERNAL_SERVER_ERROR);
    let mut c = controller(catalog, MemBackend::new());

    assert!(c.submit_search("batman").await);
    // An error message still counts as shown results
    assert_eq!(c.state(), SearchState::ResultsShown);
    assert_eq!(c.view().results.error_message(), Some(SEARCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_blank_search_is_ignored() {
    let mut c = controller(batman_catalog(), MemBackend::new());

    assert!(!c.submit_search("   ").await);
    assert_eq!(c.state(), SearchState::Idle);
    assert_eq!(c.directory.catalog().calls(), 0);
}

#[tokio::test]
async fn test_later_search_replaces_results() {
    let catalog = batman_catalog().with_search("alien", vec![summary("tt3", "Alien", "1979", "N/A")]);
    let mut c = controller(catalog, MemBackend::new());

    c.submit_search("batman").await;
    c.submit_search("alien").await;

    let ids: Vec<&str> = c.view().results.cards().iter().map(|card| card.id.as_str()).collect();
    assert_eq!(ids, vec!["tt3"]);
}

#[tokio::test]
async fn test_details_modal_and_fallback() {
    let mut c = controller(batman_catalog(), MemBackend::new());

    c.show_details("tt1").await;
    match c.view().modal.as_ref() {
        Some(Modal::Detail(view)) => assert_eq!(view.title, "Batman Begins"),
        other => panic!("expected detail modal, got {:?}", other),
    }

    c.show_details("tt404").await;
    assert_eq!(
        c.view().modal,
        Some(Modal::Unavailable(DETAILS_UNAVAILABLE_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_details_work_from_watchlist_cards() {
    let raw = r#"[{"imdbID":"tt1","Title":"Batman Begins","Year":"2005","Poster":"N/A"}]"#;
    let mut c = controller(batman_catalog(), MemBackend::with_item(WATCHLIST_KEY, raw));

    // No search has run; details only need the id
    c.show_details("tt1").await;
    assert!(matches!(c.view().modal, Some(Modal::Detail(_))));
}

#[tokio::test]
async fn test_modal_closing() {
    let mut c = controller(batman_catalog(), MemBackend::new());

    c.show_details("tt1").await;
    c.click_modal(ModalClick::Content);
    assert!(c.is_modal_open());

    c.click_modal(ModalClick::Backdrop);
    assert!(!c.is_modal_open());

    c.show_details("tt1").await;
    c.close_modal();
    assert!(!c.is_modal_open());
}

#[tokio::test]
async fn test_store_failure_surfaces_and_view_matches_store() {
    let mut c = controller(batman_catalog(), MemBackend::new());
    c.submit_search("batman").await;
    c.add_to_watchlist("tt1").unwrap();

    c.store().backend().set_simulate_write_error(true);
    let err = c.add_to_watchlist("tt2").unwrap_err();
    assert!(matches!(err, ControllerError::Store(_)));

    assert_eq!(watchlist_ids(&c), vec!["tt1"]);
    assert_eq!(c.view().watchlist.cards().len(), 1);
}

#[tokio::test]
async fn test_clear_watchlist() {
    let mut c = controller(batman_catalog(), MemBackend::new());
    c.submit_search("batman").await;
    c.add_to_watchlist("tt1").unwrap();
    c.add_to_watchlist("tt2").unwrap();

    assert_eq!(c.clear_watchlist().unwrap(), 2);
    assert_eq!(
        c.view().watchlist,
        Region::Placeholder(EMPTY_WATCHLIST_MESSAGE.to_string())
    );
}
