use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;
use tokio_util::sync::CancellationToken;

use crate::error::Error;

#[derive (Clone, Debug, Default)]
pub struct RequestConfig
{
	pub method: Method,
	pub url: String,
	pub headers: HeaderMap,
	pub body: Option <Bytes>,
	pub cancel: Option <CancellationToken>
}

impl RequestConfig
{
	pub fn new (method: Method, url: impl Into <String>) -> Self
	{
		Self {method, url: url . into (), ..Self::default ()}
	}

	pub fn get (url: impl Into <String>) -> Self
	{
		Self::new (Method::GET, url)
	}

	pub fn post (url: impl Into <String>, body: impl Into <Bytes>) -> Self
	{
		let mut config = Self::new (Method::POST, url);
		config . body = Some (body . into ());
		config
	}

	pub (crate) fn build_request (&self, client: &reqwest::Client)
	-> Result <reqwest::Request, Error>
	{
		let mut builder = client
			. request (self . method . clone (), self . url . as_str ())
			. headers (self . headers . clone ());

		if let Some (body) = &self . body
		{
			builder = builder . body (body . clone ());
		}

		builder . build () . map_err (Error::Transport)
	}
}
