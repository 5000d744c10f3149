mod built_with_badge;
mod glyphs;

pub use built_with_badge::BuiltWithBadge;
pub use glyphs::{ArrowRight, FoundryLogo};
