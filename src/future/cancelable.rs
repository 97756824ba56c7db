use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::FusedFuture;
use pin_project::pin_project;
use tokio::sync::oneshot::Receiver;

use super::flag::{CancelCheck, CancelFlag, CancelHandle};
use super::settle::{self, Settler};

#[pin_project (project = CancelableFutureProjection)]
pub enum CancelableFuture <T, E, F>
{
	Future
	{
		#[pin] future: F,
		receiver: Option <Receiver <Result <T, E>>>,
		settler: Settler <T, E>,
		flag: Arc <CancelFlag>
	},
	Finished
}

impl <T, E, F> CancelableFuture <T, E, F>
where F: Future <Output = Result <T, E>>
{
	pub fn new <X> (executor: X) -> Self
	where X: FnOnce (CancelCheck) -> F
	{
		let flag = Arc::new (CancelFlag::default ());
		let future = executor (CancelCheck::new (flag . clone ()));

		Self::wrap (future, flag)
	}

	pub (crate) fn wrap (future: F, flag: Arc <CancelFlag>) -> Self
	{
		let (settler, receiver) = settle::settlement ();

		Self::Future {future, receiver: Some (receiver), settler, flag}
	}

	pub fn then <U, G> (self, on_fulfilled: G)
	-> CancelableFuture <U, E, impl Future <Output = Result <U, E>>>
	where G: FnOnce (T) -> Result <U, E>
	{
		let flag = self . flag ();

		CancelableFuture::wrap
		(
			async move { self . await . and_then (on_fulfilled) },
			flag
		)
	}

	pub fn catch <G> (self, on_rejected: G)
	-> CancelableFuture <T, E, impl Future <Output = Result <T, E>>>
	where G: FnOnce (E) -> Result <T, E>
	{
		let flag = self . flag ();

		CancelableFuture::wrap
		(
			async move { self . await . or_else (on_rejected) },
			flag
		)
	}

	pub fn finally <G> (self, on_settled: G)
	-> CancelableFuture <T, E, impl Future <Output = Result <T, E>>>
	where G: FnOnce () -> Result <(), E>
	{
		let flag = self . flag ();

		CancelableFuture::wrap
		(
			async move
			{
				let outcome = self . await;

				on_settled () ?;

				outcome
			},
			flag
		)
	}

	pub fn cancel (&self)
	{
		if let Self::Future {flag, ..} = self
		{
			flag . cancel ();
		}
	}

	pub fn is_canceled (&self) -> bool
	{
		match self
		{
			Self::Future {flag, ..} => flag . is_canceled (),
			Self::Finished => false
		}
	}

	pub fn cancel_handle (&self) -> CancelHandle
	{
		CancelHandle::new (self . flag ())
	}

	pub fn resolve (&self, value: T)
	{
		if let Self::Future {settler, ..} = self
		{
			settler . resolve (value);
		}
	}

	pub fn reject (&self, reason: E)
	{
		if let Self::Future {settler, ..} = self
		{
			settler . reject (reason);
		}
	}

	pub fn settler (&self) -> Settler <T, E>
	{
		match self
		{
			Self::Future {settler, ..} => settler . clone (),
			// A settled future can no longer be settled, so hand out a
			// settler whose channel is already closed.
			Self::Finished => settle::settlement () . 0
		}
	}

	fn flag (&self) -> Arc <CancelFlag>
	{
		match self
		{
			Self::Future {flag, ..} => flag . clone (),
			Self::Finished => Arc::new (CancelFlag::default ())
		}
	}
}

impl <T, E, F> Future for CancelableFuture <T, E, F>
where F: Future <Output = Result <T, E>>
{
	type Output = Result <T, E>;

	fn poll (mut self: Pin <&mut Self>, cx: &mut Context) -> Poll <Self::Output>
	{
		match self . as_mut () . project ()
		{
			CancelableFutureProjection::Future {future, receiver, ..} =>
			{
				if let Some (settlement) = receiver
				{
					match Pin::new (settlement) . poll (cx)
					{
						Poll::Ready (Ok (outcome)) =>
						{
							self . set (Self::Finished);
							return Poll::Ready (outcome);
						},
						// Every settler was dropped without settling, so
						// the outcome can only come from the future itself.
						Poll::Ready (Err (_)) => *receiver = None,
						Poll::Pending => {}
					}
				}

				match future . poll (cx)
				{
					Poll::Ready (outcome) =>
					{
						self . set (Self::Finished);
						Poll::Ready (outcome)
					},
					Poll::Pending => Poll::Pending
				}
			},
			CancelableFutureProjection::Finished =>
				panic! ("cancelable future was polled after settlement")
		}
	}
}

impl <T, E, F> FusedFuture for CancelableFuture <T, E, F>
where Self: Future
{
	fn is_terminated (&self) -> bool
	{
		match self
		{
			Self::Future {..} => false,
			Self::Finished => true
		}
	}
}
