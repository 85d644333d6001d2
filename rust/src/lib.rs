pub mod point;
pub mod layout;
pub mod fixture;
pub mod report;

// Re-export main types and functions
pub use point::{initialize, move_by, store_both, Point};
pub use layout::{FieldLayout, RecordLayout};
pub use fixture::{exit_code, run, run_with, Action, Scenario, Step, Trace};
pub use report::{render_layout, render_text, write_json};
