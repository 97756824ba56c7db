use thiserror::Error as ThisError;

#[derive (Copy, Clone, Debug, Default, Hash, PartialEq, Eq, ThisError)]
#[error ("operation was canceled")]
pub struct CanceledError;

#[derive (Debug, ThisError)]
pub enum Error
{
	#[error (transparent)]
	Canceled (#[from] CanceledError),

	#[error ("transport request failed: {0}")]
	Transport (#[from] reqwest::Error)
}

impl Error
{
	pub fn is_canceled (&self) -> bool
	{
		match self
		{
			Self::Canceled (_) => true,
			Self::Transport (_) => false
		}
	}
}
