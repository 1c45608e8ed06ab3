use std::time::Duration;

use gallery_carousel::controller::{Carousel, CarouselOptions};
use gallery_carousel::events::{Input, Target};
use gallery_carousel::headless::HeadlessSurface;
use gallery_carousel::item::ItemSequence;
use gallery_carousel::nav::Phase;
use gallery_carousel::runtime;
use gallery_carousel::timer::AutoAdvance;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn carousel(count: usize, width: u32) -> Carousel<HeadlessSurface> {
    let items = ItemSequence::from_sources((0..count).map(|i| (format!("{i}.jpg"), format!("{i}"))));
    let options = CarouselOptions {
        viewport_width: width,
        ..CarouselOptions::default()
    };
    Carousel::new(HeadlessSurface::new(), items, options).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn runtime_completes_wrap_after_transition() {
    let (tx, rx) = mpsc::channel::<Input>(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(runtime::run(
        carousel(2, 300),
        rx,
        Duration::from_millis(50),
        cancel.clone(),
    ));

    tx.send(Input::Tick).await.unwrap();
    tx.send(Input::Tick).await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    cancel.cancel();

    let carousel = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("runtime should stop after cancel")
        .expect("runtime task panicked")
        .unwrap();
    let snap = carousel.snapshot();
    assert_eq!(snap.real_index, 0);
    assert_eq!(snap.current, 1, "wrapped back onto the first real slot");
    assert_eq!(snap.phase, Phase::Settled);
    assert!(carousel.surface().transition_enabled);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn runtime_stops_when_inputs_close() {
    let (tx, rx) = mpsc::channel::<Input>(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(runtime::run(
        carousel(5, 1600),
        rx,
        Duration::from_millis(20),
        cancel,
    ));

    tx.send(Input::Click(Target::Item(3))).await.unwrap();
    drop(tx);

    let carousel = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("runtime should stop once the channel closes")
        .expect("runtime task panicked")
        .unwrap();
    assert!(carousel.snapshot().modal.is_open());
    assert_eq!(carousel.surface().modal_counter, "4 / 5");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn auto_advance_ticks_and_start_is_idempotent() {
    let (tx, mut rx) = mpsc::channel::<Input>(8);
    let cancel = CancellationToken::new();
    let mut timer = AutoAdvance::new(Duration::from_millis(100));

    assert!(timer.start(tx.clone(), cancel.clone()));
    assert!(!timer.start(tx.clone(), cancel.clone()), "second start is a no-op");
    assert!(timer.is_running());

    let early = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(early.is_err(), "first tick arrives after one full period");

    let tick = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("expected a tick")
        .expect("timer channel closed");
    assert_eq!(tick, Input::Tick);

    cancel.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!timer.is_running());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn paused_carousel_ignores_timer_ticks() {
    let (tx, rx) = mpsc::channel::<Input>(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(runtime::run(
        carousel(6, 1000),
        rx,
        Duration::from_millis(10),
        cancel.clone(),
    ));

    tx.send(Input::PointerEnter).await.unwrap();
    let mut timer = AutoAdvance::new(Duration::from_millis(20));
    timer.start(tx.clone(), cancel.clone());
    tokio::time::sleep(Duration::from_millis(150)).await;
    cancel.cancel();

    let carousel = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("runtime should stop after cancel")
        .expect("runtime task panicked")
        .unwrap();
    assert_eq!(carousel.snapshot().real_index, 0);
    assert!(carousel.snapshot().paused);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn runtime_restores_transition_before_first_input() {
    let (_tx, rx) = mpsc::channel::<Input>(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(runtime::run(
        carousel(4, 1000),
        rx,
        Duration::from_millis(50),
        cancel.clone(),
    ));

    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    let carousel = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("runtime should stop after cancel")
        .expect("runtime task panicked")
        .unwrap();
    assert!(carousel.surface().transition_enabled);
    assert!(!carousel.has_deferred());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rapid_modal_navigation_completes_once_after_last_move() {
    let (tx, rx) = mpsc::channel::<Input>(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(runtime::run(
        carousel(3, 300),
        rx,
        Duration::from_millis(150),
        cancel.clone(),
    ));

    tx.send(Input::Click(Target::Item(2))).await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;

    // Each move lands before the previous slide would have completed.
    for _ in 0..3 {
        tx.send(Input::Click(Target::ModalNext)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    tokio::time::sleep(Duration::from_millis(400)).await;
    cancel.cancel();

    let carousel = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("runtime should stop after cancel")
        .expect("runtime task panicked")
        .unwrap();
    let snap = carousel.snapshot();
    assert_eq!(snap.current, 1, "overshoot past the clones drops extra steps");
    assert_eq!(snap.real_index, 0);
    assert_eq!(snap.phase, Phase::Settled);
    assert!(snap.modal.is_open());
}
