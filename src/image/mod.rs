pub mod gray;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::gray::{grayscale_mean, EdgeMask, GrayBuffer};
pub use self::rgba::RgbaBuffer;
pub use self::traits::{ImageView, ImageViewMut};
