//! Angle and distance value types.
//!
//! `Angle` stores radians. The display preference (hours or degrees) and the
//! `signed` flag only affect formatting; arithmetic and comparison use radians.
//!
//! | Quantity | Preference | Signed | Rendered as |
//! |----------|------------|--------|-------------|
//! | Right ascension | Hours | no | `03h08m10.13s` |
//! | Declination | Degrees | yes | `+40°57'20.3"` |

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const AU_KM: f64 = 149_597_870.700;

const HOURS_PER_RADIAN: f64 = 12.0 / std::f64::consts::PI;

/// Unit used when rendering an [`Angle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Hours,
    #[default]
    Degrees,
}

/// Immutable angle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
    #[serde(default)]
    preference: Preference,
    #[serde(default)]
    signed: bool,
}

impl Angle {
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            preference: Preference::Degrees,
            signed: false,
        }
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Hour angle measure (24h = 2π), rendered in hours.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_radians(hours / HOURS_PER_RADIAN).with_preference(Preference::Hours)
    }

    /// Sexagesimal hours. The sign of `h` applies to the whole value.
    pub fn from_hms(h: f64, m: f64, s: f64) -> Self {
        Self::from_hours(sexagesimal(h, m, s))
    }

    /// Sexagesimal degrees, rendered signed. The sign of `d` applies to the whole value.
    pub fn from_dms(d: f64, m: f64, s: f64) -> Self {
        Self::from_degrees(sexagesimal(d, m, s)).signed()
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    #[inline]
    pub fn hours(&self) -> f64 {
        self.radians * HOURS_PER_RADIAN
    }

    #[inline]
    pub fn preference(&self) -> Preference {
        self.preference
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    #[inline]
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    /// Render with an explicit sign (declinations).
    #[inline]
    pub fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.radians.is_finite()
    }

    /// Great-circle separation between `(ra1, dec1)` and `(ra2, dec2)` (haversine).
    pub fn separation(ra1: Angle, dec1: Angle, ra2: Angle, dec2: Angle) -> Angle {
        let dra = ra2.radians - ra1.radians;
        let ddec = dec2.radians - dec1.radians;
        let h = (ddec * 0.5).sin().powi(2)
            + dec1.radians.cos() * dec2.radians.cos() * (dra * 0.5).sin().powi(2);
        Angle::from_radians(2.0 * h.sqrt().min(1.0).asin())
    }
}

fn sexagesimal(a: f64, m: f64, s: f64) -> f64 {
    let mag = a.abs() + m.abs() / 60.0 + s.abs() / 3600.0;
    if a.is_sign_negative() {
        -mag
    } else {
        mag
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.radians == other.radians
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.radians.partial_cmp(&other.radians)
    }
}

/// Split `|value|` into whole units, minutes, and seconds rounded to `decimals`.
fn split_sexagesimal(value: f64, decimals: usize) -> (u64, u64, f64) {
    let scale = 10f64.powi(decimals as i32);
    let total = (value.abs() * 3600.0 * scale).round() / scale;
    let whole = (total / 3600.0).floor();
    let rest = total - whole * 3600.0;
    let minutes = (rest / 60.0).floor();
    let seconds = rest - minutes * 60.0;
    (whole as u64, minutes as u64, seconds)
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, decimals) = match self.preference {
            Preference::Hours => (self.hours(), 2),
            Preference::Degrees => (self.degrees(), 1),
        };
        let sign = if value < 0.0 {
            "-"
        } else if self.signed {
            "+"
        } else {
            ""
        };
        let (a, m, s) = split_sexagesimal(value, decimals);
        let width = decimals + 3;
        match self.preference {
            Preference::Hours => write!(f, "{sign}{a:02}h{m:02}m{s:0width$.decimals$}s"),
            Preference::Degrees => write!(f, "{sign}{a}°{m:02}'{s:0width$.decimals$}\""),
        }
    }
}

/// Immutable distance, stored in astronomical units.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance {
    au: f64,
}

impl Distance {
    #[inline]
    pub const fn from_au(au: f64) -> Self {
        Self { au }
    }

    #[inline]
    pub fn from_km(km: f64) -> Self {
        Self { au: km / AU_KM }
    }

    #[inline]
    pub fn au(&self) -> f64 {
        self.au
    }

    #[inline]
    pub fn km(&self) -> f64 {
        self.au * AU_KM
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} au", self.au)
    }
}
