mod cancelable;
pub use cancelable::CancelableFuture;

mod settle;
pub use settle::Settler;

mod flag;
pub use flag::{CancelCheck, CancelHandle};
