// Translation module - request handling core, independent of HTTP
// Author: kelexine (https://github.com/kelexine)

pub mod flair;
pub mod pipeline;

pub use flair::apply_flair;
pub use pipeline::translate_text;
