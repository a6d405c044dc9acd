//! View state of the landing page.

pub mod landing_view;

pub use landing_view::{LandingView, LoginInput, PiggyState};
