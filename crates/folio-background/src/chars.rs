//! Character constants for background layers.

/// Characters used for the starfield layer.
pub const STAR_CHARS: &[char] = &['.', '*', '+', '·', '✦', '✧'];

/// Characters used for the dust layer drifting in front of the stars.
pub const DUST_CHARS: &[char] = &['·', '˙', '∙'];

/// Floating particle.
pub const PARTICLE_CHAR: char = '•';

/// Cursor follower at rest and at the top of its pulse.
pub const CURSOR_CHARS: [char; 2] = ['•', '●'];
