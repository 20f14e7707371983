//! # Primitives
//!
//! Fixed constants of the submission wizard and the profile view.
//!
//! These are compiled into the binary and immutable at runtime.

/// Number of wizard steps. Step numbers run from 1 to `STEP_COUNT` inclusive.
pub const STEP_COUNT: u8 = 6;

/// Minimum trimmed character count a short text field must EXCEED.
///
/// Applies to collection name, designer name and location.
pub const SHORT_TEXT_MIN_EXCLUSIVE: usize = 2;

/// Minimum trimmed character count a prose field must EXCEED.
///
/// Applies to the collection description and the designer bio.
pub const PROSE_MIN_EXCLUSIVE: usize = 10;

/// Marker an email address must contain to pass the designer step.
pub const EMAIL_MARKER: char = '@';

/// Delay of the simulated submission, in milliseconds.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Specialty shown for a handoff profile that carries no style tags.
pub const FALLBACK_SPECIALTY: &str = "Emerging Talent";

/// Portrait shown for a handoff profile (the wizard collects no portrait).
pub const PLACEHOLDER_PORTRAIT_URL: &str = "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&q=80&w=800";

/// Designer shown when the profile route is opened without an id.
pub const FEATURED_DESIGNER_ID: &str = "d1";
