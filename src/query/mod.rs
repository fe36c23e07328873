//! Query lifecycle: one question at a time, Idle → Loading → settled.
//!
//! The controller owns the single source of truth for the active screen.
//! Each submission spawns a worker thread that does the HTTP call and
//! reports back over an mpsc channel; the UI thread drains the channel and
//! applies events. Every submission carries a monotonically increasing
//! sequence number, and an event whose number no longer matches the latest
//! issued one is discarded — a late settlement from a superseded request
//! can never overwrite a newer result or a cleared screen.

pub mod controller;
pub mod events;
pub mod thread;

pub use controller::{QueryController, QueryState};
pub use events::{AskEvent, AskReceiver, AskSender};
pub use thread::{spawn_ask_thread, AskThreadHandle};
