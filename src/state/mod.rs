//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only process-wide state: one `RwSignal<SessionState>`
//! provided via context from `App`. Pages read it through the route guard
//! and mutate it only through the transitions in `session`.

pub mod session;
