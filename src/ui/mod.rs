//! Terminal UI.
//!
//! The UI is a deterministic surface only:
//! - NO async
//! - NO network I/O (workers live in `crate::query`)
//! - Every frame is re-rendered from `App` state
//!
//! Four tabs: Query (home), Analytics, Archive, Settings. Only the Query
//! tab participates in the ask lifecycle; the others render fixed
//! illustrative data.

pub mod answer;
pub mod handlers;
pub mod input;
pub mod state;
pub mod view;

pub use answer::{split_answer, AnswerSections};
pub use handlers::handle_key_event;
pub use input::InputState;
pub use state::{App, Tab};
pub use view::render;
