pub mod error;
pub mod openai;
pub mod traits;
pub mod util;

pub use error::{AiError, Result};
pub use openai::{ImageSize, OpenAi};
pub use traits::{ImageGenerator, TextGenerator};
pub use util::truncate_to_char_boundary;
