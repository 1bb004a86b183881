#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_profiles_to_png, ProfileStyle, RenderConfig};
