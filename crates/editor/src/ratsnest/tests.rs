use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;
use crate::board::Item;

/// Connectivity that takes a fixed wall-clock time per query.
struct Sluggish<'a> {
	board: &'a Board,
	cost: Duration,
}

impl Connectivity for Sluggish<'_> {
	fn ratsnest_lines(&self, moving: &[ItemId]) -> Vec<RatsnestLine> {
		std::thread::sleep(self.cost);
		self.board.ratsnest_lines(moving)
	}
}

fn config(threshold_ms: u64) -> RatsnestConfig {
	RatsnestConfig {
		debounce_ms: 20,
		slow_threshold_ms: threshold_ms,
	}
}

fn board_with_pair() -> (Board, ItemId) {
	let mut board = Board::new();
	board.add(Item::via(Point::new(0, 0)).in_net(1));
	board.add(Item::via(Point::new(50, 0)).in_net(1));
	board.add(Item::via(Point::new(2, 2)).in_net(2));
	let moving = board.add(Item::footprint("U1", Point::new(40, 0)).in_net(1));
	(board, moving)
}

#[test]
fn lines_join_the_nearest_item_of_the_same_net() {
	let (board, moving) = board_with_pair();
	assert_eq!(
		board.ratsnest_lines(&[moving]),
		vec![RatsnestLine {
			from: Point::new(40, 0),
			to: Point::new(50, 0),
		}]
	);
}

#[tokio::test(start_paused = true)]
async fn fast_updates_are_eager() {
	let (board, moving) = board_with_pair();
	let (tx, _rx) = mpsc::unbounded_channel();
	let mut ratsnest = RatsnestController::new(&config(10_000), tx);

	ratsnest.update(&board, &[moving]);
	assert!(ratsnest.is_visible());
	assert!(!ratsnest.is_pending());
	assert_eq!(ratsnest.lines().len(), 1);
	assert_eq!(ratsnest.refreshes(), 1);
}

#[tokio::test(start_paused = true)]
async fn empty_selection_clears_and_cancels() {
	let (board, moving) = board_with_pair();
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut ratsnest = RatsnestController::new(&config(0), tx);
	let slow = Sluggish {
		board: &board,
		cost: Duration::from_millis(2),
	};

	ratsnest.update(&slow, &[moving]);
	ratsnest.update(&slow, &[moving]);
	assert!(ratsnest.is_pending());

	ratsnest.update(&board, &[]);
	assert!(!ratsnest.is_pending());
	assert!(ratsnest.lines().is_empty());
	assert!(!ratsnest.is_visible());

	tokio::time::sleep(Duration::from_millis(100)).await;
	assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn slow_update_switches_to_debounced_refresh() {
	let (board, moving) = board_with_pair();
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut ratsnest = RatsnestController::new(&config(0), tx);
	let slow = Sluggish {
		board: &board,
		cost: Duration::from_millis(2),
	};

	ratsnest.update(&slow, &[moving]);
	assert!(ratsnest.is_slow());
	assert_eq!(ratsnest.refreshes(), 1);

	ratsnest.update(&slow, &[moving]);
	ratsnest.update(&slow, &[moving]);
	assert!(!ratsnest.is_visible(), "hidden while deferred");
	assert_eq!(ratsnest.refreshes(), 1);

	let tick = rx.recv().await.expect("timer fires");
	assert!(ratsnest.on_timer(tick, &board, &[moving]));
	assert!(ratsnest.is_visible());
	assert_eq!(ratsnest.refreshes(), 2);
	assert!(rx.try_recv().is_err(), "restarted timer fired once");
}

#[tokio::test(start_paused = true)]
async fn hide_returns_to_eager_mode() {
	let (board, moving) = board_with_pair();
	let (tx, _rx) = mpsc::unbounded_channel();
	let mut ratsnest = RatsnestController::new(&config(0), tx);
	let slow = Sluggish {
		board: &board,
		cost: Duration::from_millis(2),
	};

	ratsnest.update(&slow, &[moving]);
	ratsnest.update(&slow, &[moving]);
	assert!(ratsnest.is_slow() && ratsnest.is_pending());

	ratsnest.hide();
	assert!(!ratsnest.is_slow());
	assert!(!ratsnest.is_pending());
	assert!(!ratsnest.is_visible());
}
