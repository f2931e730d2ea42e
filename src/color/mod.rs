mod intensity;
mod order;
mod pixel;
mod velocity;

use smart_leds::RGB8;

pub use intensity::Intensity;
pub use order::{ChannelOrder, DEFAULT_CHANNEL_ORDER};
pub use pixel::{Channel, DIM_BLUE, DIM_GREEN, DIM_RED, DIM_WHITE, Pixel};
pub use velocity::{MAX_STEP, Velocity};

pub type Rgb = RGB8;
