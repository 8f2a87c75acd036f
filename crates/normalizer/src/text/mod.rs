//! Text utilities around the normalizer.
//!
//! Word and sentence splitting, stopword filtering and light stemming:
//! table-driven helpers that consume normalized text.

pub mod pipeline;
pub mod split;
pub mod stem;
pub mod stopwords;

pub use pipeline::Pipeline;
pub use split::{SplitPattern, Splitter, Tokenize};
pub use stem::{stem, stem_tokens};
pub use stopwords::{StopwordFilter, HINDI_STOPWORDS};
