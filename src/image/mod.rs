pub mod buffer;
pub mod io;
pub mod traits;

pub use self::buffer::PixelBuffer;
pub use self::io::{read, try_read, try_write, write};
pub use self::traits::{ImageView, ImageViewMut, Rows};
