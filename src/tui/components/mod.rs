//! # TUI Components
//!
//! Components follow two patterns.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they show as props and keep nothing between frames:
//! - `TitleBar`: app name, mode and vault path
//! - `StatusBar`: key hints and the last status message
//! - `LandingPage`: welcome screen while idle
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep local state and emit high-level events the main loop turns into
//! session actions:
//! - `InputBox`: filename prompt and note editor
//! - `NoteList`: note browser (state in `NoteListState`)
//!
//! Components receive external data as props, never by reaching into the
//! session. This keeps their dependencies explicit and testable.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── status_bar.rs
//! ├── landing.rs
//! ├── note_list.rs
//! └── input_box/     (wrapping, cursor, scrolling)
//! ```

pub mod input_box;
pub mod landing;
pub mod note_list;
pub mod status_bar;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use note_list::{ListEvent, NoteList, NoteListState};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
