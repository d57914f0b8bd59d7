//! Integration tests for the hot-reload coordinator.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use wordshield::{BoxError, FilterConfig, FilterError, StaticWordSource, WordFilter};

/// A switchable word source: the word list can be swapped and the source can
/// be forced to fail, both from the test body while the filter holds it.
#[derive(Debug, Default)]
struct SwitchState {
    words: Mutex<Vec<String>>,
    fail: AtomicBool,
    loads: AtomicUsize,
}

impl SwitchState {
    fn new(words: &[&str]) -> Arc<Self> {
        let state = Arc::new(Self::default());
        state.set_words(words);
        state
    }

    fn set_words(&self, words: &[&str]) {
        *self.words.lock().unwrap() = words.iter().map(|w| (*w).to_string()).collect();
    }

    fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

fn switch_source(
    state: &Arc<SwitchState>,
) -> impl Fn() -> futures::future::BoxFuture<'static, Result<Vec<String>, BoxError>> + Send + Sync + use<>
{
    let state = Arc::clone(state);
    move || {
        let state = Arc::clone(&state);
        Box::pin(async move {
            state.loads.fetch_add(1, Ordering::SeqCst);
            if state.fail.load(Ordering::SeqCst) {
                return Err::<Vec<String>, BoxError>("word list unavailable".into());
            }
            Ok(state.words.lock().unwrap().clone())
        })
    }
}

#[tokio::test]
async fn initial_build_failure_is_fatal() {
    let state = SwitchState::new(&["傻逼"]);
    state.set_fail(true);
    let result = WordFilter::new(switch_source(&state), FilterConfig::new()).await;
    assert!(matches!(result, Err(FilterError::WordSource { .. })));
}

#[tokio::test]
async fn hit_returns_first_hit_word() {
    let filter = WordFilter::new(
        StaticWordSource::new(["傻子", "傻逼", "司马南|美国", "方舟子|死了"]),
        FilterConfig::new(),
    )
    .await
    .unwrap();

    assert_eq!(filter.hit(""), None);
    assert_eq!(filter.hit("傻子"), Some("傻子".to_string()));
    assert_eq!(filter.hit("大傻逼"), Some("傻逼".to_string()));
    assert_eq!(filter.hit("你这个傻瓜"), None);
    assert_eq!(
        filter.hit("司马南否认在美国买房子"),
        Some("司马南|美国".to_string())
    );
}

#[tokio::test]
async fn detect_with_minimum_hits() {
    let filter = WordFilter::new(
        StaticWordSource::new(["垃圾", "傻逼"]),
        FilterConfig::new(),
    )
    .await
    .unwrap();

    let (satisfied, hit_words) = filter.detect("我觉得你是个垃圾傻逼", 2);
    assert!(satisfied);
    assert_eq!(hit_words, vec!["垃圾".to_string(), "傻逼".to_string()]);

    let (satisfied, hit_words) = filter.detect("我觉得你是个垃圾", 2);
    assert!(!satisfied);
    assert_eq!(hit_words, vec!["垃圾".to_string()]);
}

#[tokio::test]
async fn replace_uses_configured_mask_char() {
    let filter = WordFilter::new(
        StaticWordSource::new(["丑八怪", "色情", "司马南|美国"]),
        FilterConfig::new().mask_char('#'),
    )
    .await
    .unwrap();

    let (hit, masked) = filter.replace("你这个丑八怪");
    assert!(hit);
    assert_eq!(masked, "你这个###");

    let (hit, masked) = filter.replace("色--。。。//情直播");
    assert!(hit);
    assert_eq!(masked, "#--。。。//#直播");

    let (hit, masked) = filter.replace("你这个小美女");
    assert!(!hit);
    assert_eq!(masked, "你这个小美女");
}

#[tokio::test]
async fn manual_rebuild_swaps_word_set() {
    let state = SwitchState::new(&["垃圾"]);
    let filter = WordFilter::new(switch_source(&state), FilterConfig::new())
        .await
        .unwrap();
    assert_eq!(filter.hit("垃圾"), Some("垃圾".to_string()));
    assert_eq!(filter.hit("傻逼"), None);

    state.set_words(&["傻逼"]);
    filter.rebuild().await.unwrap();

    assert_eq!(filter.hit("垃圾"), None);
    assert_eq!(filter.hit("傻逼"), Some("傻逼".to_string()));
}

#[tokio::test]
async fn failed_rebuild_keeps_previous_snapshot() {
    let state = SwitchState::new(&["垃圾", "司马南|美国"]);
    let filter = WordFilter::new(switch_source(&state), FilterConfig::new().statistics(true))
        .await
        .unwrap();

    assert!(filter.hit("你真垃圾").is_some());
    assert!(filter.hit("你真垃圾").is_some());

    state.set_fail(true);
    let result = filter.rebuild().await;
    assert!(matches!(result, Err(FilterError::WordSource { .. })));

    // Same word set, same counters, all four operations unaffected.
    assert_eq!(filter.hit("你真垃圾"), Some("垃圾".to_string()));
    let (satisfied, _) = filter.detect("司马南在美国买房子", 1);
    assert!(satisfied);
    let (hit, masked) = filter.replace("你真垃圾");
    assert!(hit);
    assert_eq!(masked, "你真**");

    let stats = filter.debug_infos();
    let garbage = stats.iter().find(|s| s.word == "垃圾").unwrap();
    assert_eq!(garbage.hit_count, 4); // two hits before, one hit and one replace after
}

#[tokio::test(start_paused = true)]
async fn periodic_rebuild_publishes_new_snapshots() {
    let state = SwitchState::new(&["垃圾"]);
    let filter = WordFilter::new(
        switch_source(&state),
        FilterConfig::new().rebuild_interval(Duration::from_secs(10)),
    )
    .await
    .unwrap();
    assert_eq!(filter.hit("傻逼"), None);

    state.set_words(&["傻逼"]);
    tokio::time::sleep(Duration::from_secs(25)).await;

    assert_eq!(filter.hit("傻逼"), Some("傻逼".to_string()));
    assert_eq!(filter.hit("垃圾"), None);
}

#[tokio::test(start_paused = true)]
async fn periodic_rebuild_failure_is_not_fatal() {
    let state = SwitchState::new(&["垃圾"]);
    let filter = WordFilter::new(
        switch_source(&state),
        FilterConfig::new().rebuild_interval(Duration::from_secs(10)),
    )
    .await
    .unwrap();

    state.set_fail(true);
    tokio::time::sleep(Duration::from_secs(25)).await;
    assert_eq!(filter.hit("垃圾"), Some("垃圾".to_string()));

    // Once the source recovers, the next tick publishes again.
    state.set_fail(false);
    state.set_words(&["傻逼"]);
    tokio::time::sleep(Duration::from_secs(15)).await;
    assert_eq!(filter.hit("傻逼"), Some("傻逼".to_string()));
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_periodic_rebuild() {
    let state = SwitchState::new(&["垃圾"]);
    let filter = WordFilter::new(
        switch_source(&state),
        FilterConfig::new().rebuild_interval(Duration::from_secs(10)),
    )
    .await
    .unwrap();

    filter.shutdown();
    state.set_words(&["傻逼"]);
    tokio::time::sleep(Duration::from_secs(60)).await;

    // No rebuild happened after shutdown.
    assert_eq!(filter.hit("傻逼"), None);
    assert_eq!(filter.hit("垃圾"), Some("垃圾".to_string()));
}

#[tokio::test(start_paused = true)]
async fn dropped_filter_stops_periodic_rebuild() {
    let state = SwitchState::new(&["垃圾"]);
    let filter = WordFilter::new(
        switch_source(&state),
        FilterConfig::new().rebuild_interval(Duration::from_secs(10)),
    )
    .await
    .unwrap();

    let loads_before = state.loads();
    drop(filter);
    tokio::time::sleep(Duration::from_secs(60)).await;

    // The background task exited with the filter; no further loads.
    assert_eq!(state.loads(), loads_before);
}

#[tokio::test]
async fn phonetic_mode_adds_transliterated_variants() {
    let filter = WordFilter::new(
        StaticWordSource::new(["傻子", "司马南|美国"]),
        FilterConfig::new()
            .phonetic(true)
            .expander(|word| if word == "傻子" { "shazi" } else { "" }.to_string()),
    )
    .await
    .unwrap();

    assert_eq!(filter.hit("傻子"), Some("傻子".to_string()));
    assert_eq!(filter.hit("shazi"), Some("shazi".to_string()));
    // Combo specifications are not phonetic-expanded.
    assert_eq!(filter.hit("simanan"), None);
}

#[tokio::test]
async fn debug_infos_reports_combo_annotations() {
    let filter = WordFilter::new(
        StaticWordSource::new(["垃圾", "司马南|美国"]),
        FilterConfig::new(),
    )
    .await
    .unwrap();

    let mut words: Vec<String> = filter.debug_infos().into_iter().map(|s| s.word).collect();
    words.sort();
    assert_eq!(words, vec!["司马南|美国".to_string(), "垃圾".to_string()]);
}
