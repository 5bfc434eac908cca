//! Sky positions and the `RaDec` capability.
//!
//! Anything that can hand out a right ascension and a declination can be
//! centered or enclosed: coordinate tuples (`Position`, `(Angle, Angle)`) and
//! catalog entries (`Star`) alike.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::angle::{Angle, Distance, Preference};
use crate::error::{AsterismError, AsterismResult};

/// Right ascension / declination accessors.
pub trait RaDec {
    fn ra(&self) -> Angle;
    fn dec(&self) -> Angle;
}

impl<T: RaDec + ?Sized> RaDec for &T {
    fn ra(&self) -> Angle {
        (**self).ra()
    }
    fn dec(&self) -> Angle {
        (**self).dec()
    }
}

impl RaDec for (Angle, Angle) {
    fn ra(&self) -> Angle {
        self.0
    }
    fn dec(&self) -> Angle {
        self.1
    }
}

/// `(ra, dec)` or `(ra, dec, dist)` coordinate tuple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub ra: Angle,
    pub dec: Angle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist: Option<Distance>,
}

impl Position {
    /// Unchecked constructor; RA is rendered in hours, Dec signed.
    pub fn new(ra: Angle, dec: Angle) -> Self {
        Self {
            ra: ra.with_preference(Preference::Hours),
            dec: dec.signed(),
            dist: None,
        }
    }

    /// Checked constructor: finite angles, `|dec| <= 90°`.
    pub fn try_new(ra: Angle, dec: Angle) -> AsterismResult<Self> {
        if !ra.is_finite() || !dec.is_finite() {
            return Err(AsterismError::invalid(format!(
                "non-finite coordinate (ra={} rad, dec={} rad)",
                ra.radians(),
                dec.radians()
            )));
        }
        if dec.radians().abs() > std::f64::consts::FRAC_PI_2 {
            return Err(AsterismError::invalid(format!(
                "declination {:.4}° outside [-90°, +90°]",
                dec.degrees()
            )));
        }
        Ok(Self::new(ra, dec))
    }

    pub fn from_hours_degrees(ra_hours: f64, dec_degrees: f64) -> AsterismResult<Self> {
        Self::try_new(Angle::from_hours(ra_hours), Angle::from_degrees(dec_degrees))
    }

    pub fn with_distance(mut self, dist: Distance) -> Self {
        self.dist = Some(dist);
        self
    }

    /// Number of components: 2 for `(ra, dec)`, 3 with a distance.
    pub fn arity(&self) -> usize {
        if self.dist.is_some() {
            3
        } else {
            2
        }
    }
}

impl RaDec for Position {
    fn ra(&self) -> Angle {
        self.ra
    }
    fn dec(&self) -> Angle {
        self.dec
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dist {
            Some(d) => write!(f, "({}, {}, {})", self.ra, self.dec, d),
            None => write!(f, "({}, {})", self.ra, self.dec),
        }
    }
}

/// Catalog entry adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub name: String,
    pub ra: Angle,
    pub dec: Angle,
}

impl Star {
    pub fn new(name: impl Into<String>, ra: Angle, dec: Angle) -> Self {
        Self {
            name: name.into(),
            ra: ra.with_preference(Preference::Hours),
            dec: dec.signed(),
        }
    }

    /// Catalog-style construction from sexagesimal `(h, m, s)` and `(d, m, s)`.
    pub fn from_sexagesimal(
        name: impl Into<String>,
        ra_hms: (f64, f64, f64),
        dec_dms: (f64, f64, f64),
    ) -> Self {
        Self::new(
            name,
            Angle::from_hms(ra_hms.0, ra_hms.1, ra_hms.2),
            Angle::from_dms(dec_dms.0, dec_dms.1, dec_dms.2),
        )
    }

    pub fn position(&self) -> Position {
        Position::new(self.ra, self.dec)
    }
}

impl RaDec for Star {
    fn ra(&self) -> Angle {
        self.ra
    }
    fn dec(&self) -> Angle {
        self.dec
    }
}
