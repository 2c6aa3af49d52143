// PARTICLES
/// Number of placement attempts when seeding the swarm.
pub const PARTICLE_COUNT: usize = 300;
/// Smallest particle radius, inclusive.
pub const RADIUS_MIN: f64 = 3.0;
/// Largest particle radius, exclusive.
pub const RADIUS_MAX: f64 = 5.0;
/// Velocity components are drawn from [-MAX_SPEED, MAX_SPEED), in pixels per frame.
pub const MAX_SPEED: f64 = 2.0;

// INTERACTION
/// Pairs closer than this are connected by a line, in pixels.
pub const LINK_DISTANCE: f64 = 60.0;
/// Fraction of the overlap correction applied to velocities each frame.
pub const REPULSION: f64 = 0.05;

// RENDERING
/// Width of the line between two linked particles.
pub const LINK_WIDTH: f64 = 3.0;
/// Width of the outline drawn around each particle.
pub const OUTLINE_WIDTH: f64 = 2.0;
/// Fill hue per pixel of horizontal position. The outline uses a factor of 1.
pub const FILL_HUE_SCALE: f64 = 0.5;
/// Number of frames the frame rate is averaged over in the info overlay.
pub const FRAME_RATE_WINDOW: usize = 30;

// WINDOW
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;
