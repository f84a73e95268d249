//! Pointer- and resize-driven visual effects.
//!
//! Every function here maps an event to style values and keeps no state;
//! the UI applies the result to the element that received the event.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Layout class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    /// Up to 768 px wide.
    Mobile,
    /// Up to 1024 px wide.
    Tablet,
    Desktop,
}

impl Breakpoint {
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width <= 768.0 {
            Self::Mobile
        } else if width <= 1024.0 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Background particles to draw at this size.
    #[must_use]
    pub const fn particle_count(self) -> usize {
        match self {
            Self::Mobile => 20,
            Self::Tablet => 35,
            Self::Desktop => 50,
        }
    }

    /// Tilt follows the pointer only where there is room for it.
    #[must_use]
    pub const fn allows_tilt(self) -> bool {
        !matches!(self, Self::Mobile)
    }
}

/// Element box relative to the viewport, as from `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub const TILT_ENTER_TRANSITION: &str = "transform 0.1s ease";
pub const TILT_LEAVE_TRANSITION: &str = "transform 0.5s ease";
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

/// Rotation for a pointer at (`client_x`, `client_y`) over `rect`.
///
/// Returns `(rotate_x, rotate_y)` in degrees; the card leans toward the
/// pointer, one degree per ten pixels from centre.
#[must_use]
pub fn tilt_angles(rect: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    ((y - center_y) / 10.0, (center_x - x) / 10.0)
}

/// CSS transform for a tilted card, or `None` when the viewport is too
/// narrow for tilting.
#[must_use]
pub fn tilt_transform(rect: Rect, client_x: f64, client_y: f64, viewport_width: f64) -> Option<String> {
    if !Breakpoint::from_width(viewport_width).allows_tilt() {
        return None;
    }
    let (rx, ry) = tilt_angles(rect, client_x, client_y);
    Some(format!(
        "perspective(1000px) rotateX({rx}deg) rotateY({ry}deg) scale3d(1.02, 1.02, 1.02)"
    ))
}

/// Lifetime of a ripple span before it is removed.
pub const RIPPLE_DURATION_MS: u32 = 600;

/// Square ripple placed so its centre sits under the click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    #[must_use]
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

pub const DEFAULT_PALETTE: [&str; 3] = ["#64ffda", "#00bcd4", "#3f51b5"];

/// One floating background particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container.
    pub left_pct: f64,
    pub size_px: f64,
    pub color: String,
    pub opacity: f64,
    pub duration_s: f64,
    /// Negative delay starts the particle part-way through its flight.
    pub delay_s: f64,
}

impl Particle {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {left:.2}%; width: {size:.2}px; height: {size:.2}px; background: {color}; \
             opacity: {opacity:.2}; animation-duration: {duration:.2}s; animation-delay: -{delay:.2}s; \
             box-shadow: 0 0 {glow:.2}px {color};",
            left = self.left_pct,
            size = self.size_px,
            color = self.color,
            opacity = self.opacity,
            duration = self.duration_s,
            delay = self.delay_s,
            glow = self.size_px * 3.0,
        )
    }
}

/// Bounds for the particle speed multiplier.
pub const PARTICLE_SPEED_RANGE: (f64, f64) = (0.1, 10.0);

/// Speed multiplier actually used for `speed`: non-finite or non-positive
/// values become 1, others are clamped to [`PARTICLE_SPEED_RANGE`].
#[must_use]
pub fn particle_speed(speed: f64) -> f64 {
    if speed.is_finite() && speed > 0.0 {
        speed.clamp(PARTICLE_SPEED_RANGE.0, PARTICLE_SPEED_RANGE.1)
    } else {
        1.0
    }
}

/// Generate `count` particles. `speed` scales animation speed, see
/// [`particle_speed`].
pub fn particle_field<R: Rng + ?Sized>(rng: &mut R, count: usize, palette: &[&str], speed: f64) -> Vec<Particle> {
    let speed = particle_speed(speed);
    (0..count)
        .map(|_| {
            let duration_s = rng.gen_range(15.0..35.0) / speed;
            let color = if palette.is_empty() {
                DEFAULT_PALETTE[0]
            } else {
                palette
                    .get(rng.gen_range(0..palette.len()))
                    .copied()
                    .unwrap_or(DEFAULT_PALETTE[0])
            };
            Particle {
                left_pct: rng.gen_range(0.0..100.0),
                size_px: rng.gen_range(1.0..4.0),
                color: color.to_string(),
                opacity: rng.gen_range(0.2..0.8),
                duration_s,
                delay_s: rng.gen_range(0.0..duration_s),
            }
        })
        .collect()
}

/// Duration of the stat counter animation.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Value shown by a count-up animation `elapsed_ms` after it started.
#[must_use]
pub fn counter_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let eased = ease_out_quart(elapsed_ms / duration_ms);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = (f64::from(target) * eased).floor() as u32;
    value.min(target)
}

/// Parse a stat label such as `"25+"` into its target and whether the `+`
/// suffix must be kept.
#[must_use]
pub fn parse_stat(label: &str) -> Option<(u32, bool)> {
    let trimmed = label.trim();
    let (digits, plus) = trimmed
        .strip_suffix('+')
        .map_or((trimmed, false), |d| (d, true));
    digits.trim().parse().ok().map(|n| (n, plus))
}

#[must_use]
pub fn format_stat(value: u32, plus: bool) -> String {
    if plus { format!("{value}+") } else { value.to_string() }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::from_width(375.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(900.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1440.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::Tablet.particle_count(), 35);
    }

    #[test]
    fn test_tilt_centre_is_flat() {
        assert_eq!(tilt_angles(CARD, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn test_tilt_corner_leans_toward_pointer() {
        let (rx, ry) = tilt_angles(CARD, 100.0, 50.0);
        assert_eq!(rx, -5.0);
        assert_eq!(ry, 10.0);
    }

    #[test]
    fn test_tilt_disabled_on_mobile() {
        assert!(tilt_transform(CARD, 120.0, 60.0, 500.0).is_none());
        let css = tilt_transform(CARD, 200.0, 100.0, 1280.0);
        assert_eq!(
            css.as_deref(),
            Some("perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.02, 1.02, 1.02)")
        );
    }

    #[test]
    fn test_ripple_centres_on_click() {
        let ripple = Ripple::at(CARD, 150.0, 70.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -50.0);
        assert_eq!(ripple.top, -80.0);
    }

    #[test]
    fn test_particle_field_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = particle_field(&mut rng, 40, &DEFAULT_PALETTE, 2.0);
        assert_eq!(field.len(), 40);
        for p in &field {
            assert!((1.0..4.0).contains(&p.size_px));
            assert!((0.2..0.8).contains(&p.opacity));
            assert!((7.5..17.5).contains(&p.duration_s));
            assert!(p.delay_s < p.duration_s);
            assert!(DEFAULT_PALETTE.contains(&p.color.as_str()));
        }
    }

    #[test]
    fn test_particle_field_tolerates_bad_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = particle_field(&mut rng, 3, &[], 0.0);
        assert!(field.iter().all(|p| p.color == DEFAULT_PALETTE[0]));
        assert!(field.iter().all(|p| p.duration_s >= 15.0));
    }

    #[test]
    fn test_extreme_speeds_keep_durations_finite() {
        let mut rng = StdRng::seed_from_u64(3);
        for speed in [f64::INFINITY, f64::NAN, 1e-320, 1e300, -2.0] {
            let field = particle_field(&mut rng, 3, &DEFAULT_PALETTE, speed);
            assert!(
                field.iter().all(|p| p.duration_s.is_finite() && p.duration_s > 0.0),
                "speed {speed}"
            );
        }
        assert_eq!(particle_speed(f64::INFINITY), 1.0);
        assert_eq!(particle_speed(1e-320), PARTICLE_SPEED_RANGE.0);
        assert_eq!(particle_speed(1e300), PARTICLE_SPEED_RANGE.1);
    }

    #[test]
    fn test_counter_eases_to_target() {
        assert_eq!(counter_value(100, 0.0, COUNTER_DURATION_MS), 0);
        assert_eq!(counter_value(100, 1000.0, COUNTER_DURATION_MS), 93);
        assert_eq!(counter_value(100, 2000.0, COUNTER_DURATION_MS), 100);
        assert_eq!(counter_value(100, 9000.0, COUNTER_DURATION_MS), 100);
        assert_eq!(counter_value(7, 10.0, 0.0), 7);
    }

    #[test]
    fn test_stat_labels() {
        assert_eq!(parse_stat("25+"), Some((25, true)));
        assert_eq!(parse_stat(" 8 "), Some((8, false)));
        assert_eq!(parse_stat("many"), None);
        assert_eq!(format_stat(25, true), "25+");
    }
}
