use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{BoxFuture, FusedFuture};
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::future::{CancelableFuture, Settler};
use crate::transport::{Response, TransportClient};

use super::config::RequestConfig;

type ResponseFuture =
	CancelableFuture <Response, Error, BoxFuture <'static, Result <Response, Error>>>;

pub struct CancelableRequestFuture
{
	future: ResponseFuture,
	abort: CancellationToken
}

impl CancelableRequestFuture
{
	pub fn new (config: &mut RequestConfig) -> Self
	{
		Self::with_client (config, TransportClient::default ())
	}

	// The caller's configuration is mutated: the derived abort token is
	// stored in it before dispatch, and callers may rely on it being there.
	pub fn with_client (config: &mut RequestConfig, client: TransportClient)
	-> Self
	{
		let abort = CancellationToken::new ();

		config . cancel = Some (abort . clone ());

		let config = config . clone ();

		let future = CancelableFuture::new
		(
			|_cancel| async move { client . request (&config) . await } . boxed ()
		);

		Self {future, abort}
	}

	pub fn cancel (&self)
	{
		self . abort . cancel ();
	}

	pub fn abort_handle (&self) -> CancellationToken
	{
		self . abort . clone ()
	}

	pub fn then <U, G> (self, on_fulfilled: G)
	-> CancelableFuture <U, Error, impl Future <Output = Result <U, Error>>>
	where G: FnOnce (Response) -> Result <U, Error>
	{
		self . future . then (on_fulfilled)
	}

	pub fn catch <G> (self, on_rejected: G)
	-> CancelableFuture <Response, Error, impl Future <Output = Result <Response, Error>>>
	where G: FnOnce (Error) -> Result <Response, Error>
	{
		self . future . catch (on_rejected)
	}

	pub fn finally <G> (self, on_settled: G)
	-> CancelableFuture <Response, Error, impl Future <Output = Result <Response, Error>>>
	where G: FnOnce () -> Result <(), Error>
	{
		self . future . finally (on_settled)
	}

	pub fn resolve (&self, response: Response)
	{
		self . future . resolve (response);
	}

	pub fn reject (&self, reason: Error)
	{
		self . future . reject (reason);
	}

	pub fn settler (&self) -> Settler <Response, Error>
	{
		self . future . settler ()
	}
}

impl Future for CancelableRequestFuture
{
	type Output = Result <Response, Error>;

	fn poll (self: Pin <&mut Self>, cx: &mut Context) -> Poll <Self::Output>
	{
		let mut_self = self . get_mut ();

		Pin::new (&mut mut_self . future) . poll (cx)
	}
}

impl FusedFuture for CancelableRequestFuture
{
	fn is_terminated (&self) -> bool
	{
		self . future . is_terminated ()
	}
}
