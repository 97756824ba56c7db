use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::CanceledError;

#[derive (Debug, Default)]
pub struct CancelFlag
{
	canceled: AtomicBool
}

impl CancelFlag
{
	pub (crate) fn cancel (&self)
	{
		self . canceled . store (true, Ordering::Relaxed);
	}

	pub (crate) fn is_canceled (&self) -> bool
	{
		self . canceled . load (Ordering::Relaxed)
	}
}

#[derive (Clone, Debug)]
pub struct CancelHandle
{
	flag: Arc <CancelFlag>
}

impl CancelHandle
{
	pub (crate) fn new (flag: Arc <CancelFlag>) -> Self
	{
		Self {flag}
	}

	pub fn cancel (&self)
	{
		self . flag . cancel ();
	}

	pub fn is_canceled (&self) -> bool
	{
		self . flag . is_canceled ()
	}
}

#[derive (Clone, Debug)]
pub struct CancelCheck
{
	flag: Arc <CancelFlag>
}

impl CancelCheck
{
	pub (crate) fn new (flag: Arc <CancelFlag>) -> Self
	{
		Self {flag}
	}

	pub fn check (&self) -> Result <(), CanceledError>
	{
		if self . flag . is_canceled ()
		{
			Err (CanceledError)
		}
		else
		{
			Ok (())
		}
	}

	pub fn is_canceled (&self) -> bool
	{
		self . flag . is_canceled ()
	}
}
