pub mod count;
mod dispatch;

pub use dispatch::dispatch;
