pub mod xy_text;

pub use xy_text::{load_file, ParsedSamples, XyText};
