use tokio::select;
use tracing::{Level, event};

use crate::error::{CanceledError, Error};
use crate::request::RequestConfig;

pub type Response = reqwest::Response;

#[derive (Clone, Debug, Default)]
pub struct TransportClient
{
	client: reqwest::Client
}

impl TransportClient
{
	pub fn new (client: reqwest::Client) -> Self
	{
		Self {client}
	}

	pub async fn request (&self, config: &RequestConfig) -> Result <Response, Error>
	{
		let request = config . build_request (&self . client) ?;

		// The token is checked at dispatch time, so a token canceled before
		// the call begins is still honored.
		match &config . cancel
		{
			Some (abort) => select!
			{
				biased;
				_ = abort . cancelled () =>
				{
					event!
					(
						Level::DEBUG,
						url = %config . url,
						"in-flight request aborted"
					);

					Err (CanceledError . into ())
				},
				outcome = self . client . execute (request) =>
					Self::into_response (outcome, &config . url)
			},
			None => Self::into_response
			(
				self . client . execute (request) . await,
				&config . url
			)
		}
	}

	fn into_response
	(
		outcome: Result <Response, reqwest::Error>,
		url: &str
	)
	-> Result <Response, Error>
	{
		match outcome
		{
			Ok (response) => Ok (response),
			Err (transport_error) =>
			{
				event!
				(
					Level::ERROR,
					url = %url,
					error = %transport_error,
					"transport request failed"
				);

				Err (Error::Transport (transport_error))
			}
		}
	}
}
