//! Plain coordinate records.
//!
//! The only place untyped numbers cross into or out of the tagged geometry
//! types. Each vector and point type has `from_record`/`to_record` and
//! `from_tuple`/`to_tuple` taking a caller-supplied unit conversion, e.g.
//! `Point2d::from_record(Length::inches, record)`.

use serde::{Deserialize, Serialize};

/// Field-named 2D coordinates in caller-chosen units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record2d {
    pub x: f64,
    pub y: f64,
}

/// Field-named 3D coordinates in caller-chosen units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<(f64, f64)> for Record2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Record2d> for (f64, f64) {
    fn from(record: Record2d) -> Self {
        (record.x, record.y)
    }
}

impl From<(f64, f64, f64)> for Record3d {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<Record3d> for (f64, f64, f64) {
    fn from(record: Record3d) -> Self {
        (record.x, record.y, record.z)
    }
}
