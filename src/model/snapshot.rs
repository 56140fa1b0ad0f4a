//! Serializable board snapshot and its content hash.
//!
//! A snapshot is rebuilt from scratch on every poll tick. Records keep the
//! order the host handed them out in, and JSON fields are emitted in
//! declaration order, so identical boards always serialize to identical
//! bytes.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::PollerError;
use crate::model::board::{Board, PcbFootprint, PcbTrack, PcbZone, Vector2Nm};

const NM_PER_MM: f64 = 1_000_000.0;

fn nm_to_mm(value_nm: i64) -> f64 {
    value_nm as f64 / NM_PER_MM
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointMm {
    pub x: f64,
    pub y: f64,
}

impl From<Vector2Nm> for PointMm {
    fn from(value: Vector2Nm) -> Self {
        Self {
            x: nm_to_mm(value.x_nm),
            y: nm_to_mm(value.y_nm),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSide {
    Front,
    Back,
}

impl BoardSide {
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped {
            Self::Back
        } else {
            Self::Front
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FootprintRecord {
    pub reference: String,
    pub value: String,
    pub footprint: String,
    pub position: PointMm,
    pub orientation: f64,
    pub layer: BoardSide,
}

impl From<&PcbFootprint> for FootprintRecord {
    fn from(footprint: &PcbFootprint) -> Self {
        Self {
            reference: footprint.reference.clone(),
            value: footprint.value.clone(),
            footprint: footprint.library_item_name.clone(),
            position: footprint.position.into(),
            orientation: footprint.orientation_degrees,
            layer: BoardSide::from_flipped(footprint.flipped),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackRecord {
    pub net: String,
    pub start: PointMm,
    pub end: PointMm,
    pub width: f64,
    pub layer: String,
}

impl From<&PcbTrack> for TrackRecord {
    fn from(track: &PcbTrack) -> Self {
        Self {
            net: track.net.name.clone(),
            start: track.start.into(),
            end: track.end.into(),
            width: nm_to_mm(track.width_nm),
            layer: track.layer.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ZoneRecord {
    pub net: String,
    pub layer: String,
}

impl From<&PcbZone> for ZoneRecord {
    fn from(zone: &PcbZone) -> Self {
        Self {
            net: zone.net.name.clone(),
            layer: zone.layer.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub footprints: Vec<FootprintRecord>,
    pub tracks: Vec<TrackRecord>,
    pub zones: Vec<ZoneRecord>,
}

impl BoardSnapshot {
    /// Full re-read of `board`. Nothing is filtered: locked, hidden and
    /// unselected items are all included.
    pub fn capture(board: &Board) -> Self {
        Self {
            footprints: board.footprints.iter().map(FootprintRecord::from).collect(),
            tracks: board.tracks.iter().map(TrackRecord::from).collect(),
            zones: board.zones.iter().map(ZoneRecord::from).collect(),
        }
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, PollerError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn content_hash(&self) -> Result<SnapshotHash, PollerError> {
        let mut hasher = Sha256::new();
        hasher.update(self.to_json_bytes()?);
        Ok(SnapshotHash(format!("{:x}", hasher.finalize())))
    }
}

/// SHA-256 of a snapshot's JSON form, as lowercase hex.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SnapshotHash(String);

impl SnapshotHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SnapshotHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
