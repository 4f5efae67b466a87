//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> State
//!
//! Form logic itself lives in `libformflow`; the reducer forwards form
//! actions to the controller held in the state.

pub mod actions;
pub mod fields;
pub mod state;
pub mod reducer;
pub mod event;

// Re-export commonly used types
pub use actions::Action;
pub use fields::FieldEditors;
pub use state::{AppState, Focus, Toast, UiConfig};
pub use reducer::reduce;
