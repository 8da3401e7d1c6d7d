pub mod grid;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::grid::PixelGrid;
pub use self::rgb::Rgb8;
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
