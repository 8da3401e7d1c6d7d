//! Pure grid-to-grid transforms.
//!
//! Every transform allocates and returns a brand-new grid with the same
//! dimensions as its input; inputs are never mutated. All channel arithmetic
//! uses integer floor division. Transforms assume the rectangular grid the
//! decoder guarantees and do not re-validate it.
pub mod blur;
pub mod grayscale;
pub mod negative;
pub mod op;

pub use self::blur::blur;
pub use self::grayscale::grayscale;
pub use self::negative::negative;
pub use self::op::{run_pipeline, Op, PipelineResult, StageTiming};
