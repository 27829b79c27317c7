//! Assessment data model.
//!
//! The catalogue of sections and questions is loaded once and never
//! mutated. The [`AnswerStore`] is the only mutable entity; everything the
//! assessment engine derives from the pair is recomputed on demand.
//!
//! ```ignore
//! let catalogue = Catalogue::builtin();
//! let mut answers = AnswerStore::new();
//! answers.set_answer(catalogue, "gov-1", AnswerValue::Partial)?;
//! ```

mod answers;
mod builtin;
mod catalogue;
mod taxonomy;

pub use answers::*;
pub use builtin::{BUILTIN_CATALOGUE_NAME, BUILTIN_CATALOGUE_VERSION};
pub use catalogue::*;
pub use taxonomy::*;
