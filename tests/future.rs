use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cancelable_future::error::CanceledError;
use cancelable_future::future::CancelableFuture;
use tokio::time::{Duration, sleep};

#[derive (Debug, PartialEq, Eq)]
enum TestError
{
	Canceled,
	Broken
}

impl From <CanceledError> for TestError
{
	fn from (_: CanceledError) -> Self
	{
		Self::Canceled
	}
}

#[tokio::main]
#[test]
async fn settles_through_then ()
{
	let future: CancelableFuture <u32, TestError, _> =
		CancelableFuture::new (|_cancel| async move { Ok (41) });

	let outcome = future
		. then (|value| Ok (value + 1))
		. catch (|reason| panic! ("catch fired on fulfillment: {reason:?}"))
		. await;

	assert_eq! (outcome, Ok (42));
}

#[tokio::main]
#[test]
async fn cancel_trips_the_checkpoint ()
{
	let future: CancelableFuture <u32, TestError, _> = CancelableFuture::new
	(
		|cancel| async move
		{
			sleep (Duration::from_millis (10)) . await;
			cancel . check () ?;
			Ok (42)
		}
	);

	future . cancel ();

	assert_eq! (future . await, Err (TestError::Canceled));
}

#[tokio::main]
#[test]
async fn cancel_without_checkpoint_still_settles ()
{
	let future: CancelableFuture <u32, TestError, _> =
		CancelableFuture::new (|_cancel| async move { Ok (42) });

	future . cancel ();

	assert_eq! (future . await, Ok (42));
}

#[tokio::main]
#[test]
async fn cancel_is_idempotent ()
{
	let future: CancelableFuture <u32, TestError, _> = CancelableFuture::new
		(|cancel| async move { cancel . check () ?; Ok (3) });

	future . cancel ();
	future . cancel ();

	assert! (future . is_canceled ());
	assert_eq! (future . await, Err (TestError::Canceled));
}

#[tokio::main]
#[test]
async fn settlement_is_first_write_wins ()
{
	let future: CancelableFuture <u32, TestError, _> =
		CancelableFuture::new (|_cancel| futures::future::pending ());

	let settler = future . settler ();
	let handle = future . cancel_handle ();

	settler . resolve (7);
	settler . resolve (8);
	settler . reject (TestError::Broken);

	assert_eq! (future . await, Ok (7));

	// Settling or canceling after settlement is a no-op.
	settler . resolve (9);
	handle . cancel ();
}

#[tokio::main]
#[test]
async fn cancel_handle_cancels_mid_await ()
{
	let future: CancelableFuture <u32, TestError, _> = CancelableFuture::new
	(
		|cancel| async move
		{
			loop
			{
				cancel . check () ?;
				sleep (Duration::from_millis (5)) . await;
			}
		}
	);

	let handle = future . cancel_handle ();

	let (outcome, _) = tokio::join!
	(
		future,
		async
		{
			sleep (Duration::from_millis (25)) . await;
			handle . cancel ();
		}
	);

	assert_eq! (outcome, Err (TestError::Canceled));
}

#[tokio::main]
#[test]
async fn finally_runs_on_both_paths ()
{
	let settled = Arc::new (AtomicUsize::new (0));

	let future: CancelableFuture <u32, TestError, _> =
		CancelableFuture::new (|_cancel| async move { Ok (5) });

	let settled_on_fulfillment = settled . clone ();

	let outcome = future
		. finally
		(
			move ||
			{
				settled_on_fulfillment . fetch_add (1, Ordering::SeqCst);
				Ok (())
			}
		)
		. await;

	assert_eq! (outcome, Ok (5));

	let future: CancelableFuture <u32, TestError, _> = CancelableFuture::new
		(|cancel| async move { cancel . check () ?; Ok (5) });

	future . cancel ();

	let settled_on_rejection = settled . clone ();

	let outcome = future
		. finally
		(
			move ||
			{
				settled_on_rejection . fetch_add (1, Ordering::SeqCst);
				Ok (())
			}
		)
		. await;

	assert_eq! (outcome, Err (TestError::Canceled));
	assert_eq! (settled . load (Ordering::SeqCst), 2);
}

#[tokio::main]
#[test]
async fn failing_finalizer_turns_fulfillment_into_rejection ()
{
	let future: CancelableFuture <u32, TestError, _> =
		CancelableFuture::new (|_cancel| async move { Ok (5) });

	let outcome = future . finally (|| Err (TestError::Broken)) . await;

	assert_eq! (outcome, Err (TestError::Broken));
}

#[tokio::main]
#[test]
async fn rejection_routes_to_catch ()
{
	let future: CancelableFuture <u32, TestError, _> = CancelableFuture::new
		(|cancel| async move { cancel . check () ?; Ok (1) });

	future . cancel ();

	let outcome = future
		. then (|value| Ok (value + 1))
		. catch
		(
			|reason|
			{
				assert_eq! (reason, TestError::Canceled);
				Err (reason)
			}
		)
		. await;

	assert_eq! (outcome, Err (TestError::Canceled));
}

#[tokio::main]
#[test]
async fn catch_recovers_from_rejection ()
{
	let future: CancelableFuture <u32, TestError, _> =
		CancelableFuture::new (|_cancel| async move { Err (TestError::Broken) });

	let outcome = future . catch (|_reason| Ok (0)) . await;

	assert_eq! (outcome, Ok (0));
}
