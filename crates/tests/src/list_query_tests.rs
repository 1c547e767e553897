use pretty_assertions::assert_eq;
use shared_types::{debounce_ms, FetchGuard, ListQuery, SEARCH_DEBOUNCE_MS};

// ── Paging window ───────────────────────────────────────

#[test]
fn request_params_map_zero_based_page_to_backend() {
    // Requesting page p with size s must reach the backend as page=p+1&limit=s.
    for (page, per_page) in [(0u32, 5u32), (1, 10), (3, 25)] {
        let mut q = ListQuery::new();
        q.set_per_page(per_page);
        q.set_page(page);
        let (backend_page, limit, search) = q.request_params();
        assert_eq!(backend_page, page + 1);
        assert_eq!(limit, per_page);
        assert_eq!(search, "");
    }
}

#[test]
fn search_is_trimmed_before_it_reaches_the_backend() {
    let mut q = ListQuery::new();
    q.set_search("  jane doe  ");
    let (_, _, search) = q.request_params();
    assert_eq!(search, "jane doe");
}

// ── Reset rules ─────────────────────────────────────────

#[test]
fn changing_search_always_resets_page_index() {
    let mut q = ListQuery::new();
    q.set_page(7);
    q.set_search("khan");
    assert_eq!(q.page, 0);

    q.set_page(2);
    q.set_search("");
    assert_eq!(q.page, 0);
}

#[test]
fn changing_page_size_always_resets_page_index() {
    let mut q = ListQuery::new();
    q.set_page(7);
    q.set_per_page(5);
    assert_eq!(q.page, 0);
    assert_eq!(q.per_page, 5);
}

#[test]
fn changing_only_the_page_preserves_everything_else() {
    let mut q = ListQuery::new();
    q.set_per_page(25);
    q.set_search("doe");
    q.set_page(4);
    assert_eq!((q.page, q.per_page, q.search.as_str()), (4, 25, "doe"));
}

// ── Debounce & stale-fetch guard ────────────────────────

#[test]
fn empty_search_fetches_immediately_others_wait() {
    assert_eq!(debounce_ms(""), 0);
    assert_eq!(debounce_ms("j"), SEARCH_DEBOUNCE_MS);
    assert_eq!(debounce_ms("jane doe"), SEARCH_DEBOUNCE_MS);
}

#[test]
fn superseded_fetch_generations_are_never_current() {
    let mut guard = FetchGuard::new();

    // Fetch scheduled at T, then inputs change again before it completes.
    let stale = guard.begin();
    let fresh = guard.begin();

    // The stale completion must be discarded; only the fresh one applies.
    assert!(!guard.is_current(stale));
    assert!(guard.is_current(fresh));

    // And a third supersedes the second the same way.
    let newest = guard.begin();
    assert!(!guard.is_current(fresh));
    assert!(guard.is_current(newest));
}
