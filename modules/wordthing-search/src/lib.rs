//! Front-end for word lookups: fans a search out to the lexical providers,
//! renders the results into a view model, and fills three AI panels from the
//! augmentation proxy as their calls resolve.

pub mod error;
pub mod providers;
pub mod proxy;
pub mod render;
pub mod session;
pub mod terminal;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;


pub use error::{AugmentError, LookupError, SearchError};
pub use providers::{DictionaryProvider, ThesaurusProvider};
pub use proxy::{AugmentationSource, ProxyClient};
pub use render::{Screen, SearchView};
pub use session::{Generation, PanelUpdate, Session};
