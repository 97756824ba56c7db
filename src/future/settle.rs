use std::sync::{Arc, Mutex};

use tokio::sync::oneshot::{Receiver, Sender, channel};

pub (crate) fn settlement <T, E> () -> (Settler <T, E>, Receiver <Result <T, E>>)
{
	let (sender, receiver) = channel ();

	(Settler {sender: Arc::new (Mutex::new (Some (sender)))}, receiver)
}

pub struct Settler <T, E>
{
	sender: Arc <Mutex <Option <Sender <Result <T, E>>>>>
}

impl <T, E> Clone for Settler <T, E>
{
	fn clone (&self) -> Self
	{
		Self {sender: self . sender . clone ()}
	}
}

impl <T, E> Settler <T, E>
{
	pub fn resolve (&self, value: T)
	{
		self . settle (Ok (value));
	}

	pub fn reject (&self, reason: E)
	{
		self . settle (Err (reason));
	}

	// First write wins.  Settling an already-settled future is a no-op.
	fn settle (&self, outcome: Result <T, E>)
	{
		if let Ok (mut slot) = self . sender . lock ()
		{
			if let Some (sender) = slot . take ()
			{
				let _ = sender . send (outcome);
			}
		}
	}
}
