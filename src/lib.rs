//! Generate a TypeScript `IconName` union type from the `*.svg` files in a directory.

pub mod collector;
pub mod emitter;
mod error;

pub use collector::{collect_icon_names, stem_of, IconNames};
pub use emitter::{emit, render_declaration, write_declaration, OUTPUT_FILE_NAME};
pub use error::Error;
