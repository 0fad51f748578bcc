//! CSS generator tool family.
//!
//! String-assembly tools for gradients, shadows, filters and background
//! patterns. Colors are validated through the color model before they reach
//! any output.

pub mod box_shadow;
pub mod common;
pub mod filter;
pub mod gradient;
pub mod pattern;

pub use box_shadow::CssBoxShadowTool;
pub use filter::CssFilterTool;
pub use gradient::CssGradientTool;
pub use pattern::CssPatternTool;
