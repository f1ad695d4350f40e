//! WASM bridge for cheer-engine: celebration effects on an HTML canvas.
//!
//! ```ignore
//! // TypeScript
//! const fx = new CelebrationCanvas(canvasEl);
//! fx.celebrate("confetti");
//! fx.celebrate_preset("badge", "legendary");
//! // on unmount
//! fx.destroy();
//! ```

pub mod canvas;
pub mod platform;
pub mod timers;
pub mod overlay;

pub use canvas::CanvasSurface;
pub use overlay::{init_logging, CelebrationCanvas};
pub use platform::WebPlatform;
