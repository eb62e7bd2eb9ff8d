//! Label slot addressing and the alignment-dependent reorder table.
//!
//! Serialized KLE data stores legends in the order the format grew up with: top/bottom
//! left legends first, then right-aligned ones, then front text, then the remaining
//! positions added when the editor switched to twelve independent legend editors. The
//! decoded model stores them in visual order (top → bottom, left → right, then front).
//! The alignment flags (`a`, a 3-bit mask: 1 = center x, 2 = center y, 4 = center front)
//! decide which serialized entries survive and where they land.

use serde::{Deserialize, Serialize};

/// Number of legend slots on a key.
pub const SLOT_COUNT: usize = 12;

/// Alignment mode used when a document never sets `a`.
pub const DEFAULT_ALIGNMENT: u8 = 4;

/// One of the twelve canonical legend positions, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    FrontLeft,
    FrontCenter,
    FrontRight,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::TopLeft,
        Slot::TopCenter,
        Slot::TopRight,
        Slot::CenterLeft,
        Slot::Center,
        Slot::CenterRight,
        Slot::BottomLeft,
        Slot::BottomCenter,
        Slot::BottomRight,
        Slot::FrontLeft,
        Slot::FrontCenter,
        Slot::FrontRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Slot> {
        Slot::ALL.get(index).copied()
    }

    pub fn is_front(self) -> bool {
        matches!(self, Slot::FrontLeft | Slot::FrontCenter | Slot::FrontRight)
    }
}

const __: Option<Slot> = None;
const TL: Option<Slot> = Some(Slot::TopLeft);
const TC: Option<Slot> = Some(Slot::TopCenter);
const TR: Option<Slot> = Some(Slot::TopRight);
const CL: Option<Slot> = Some(Slot::CenterLeft);
const CC: Option<Slot> = Some(Slot::Center);
const CR: Option<Slot> = Some(Slot::CenterRight);
const BL: Option<Slot> = Some(Slot::BottomLeft);
const BC: Option<Slot> = Some(Slot::BottomCenter);
const BR: Option<Slot> = Some(Slot::BottomRight);
const FL: Option<Slot> = Some(Slot::FrontLeft);
const FC: Option<Slot> = Some(Slot::FrontCenter);
const FR: Option<Slot> = Some(Slot::FrontRight);

/// Serialized index → canonical slot, one row per alignment mode.
#[rustfmt::skip]
const REORDER_TABLE: [[Option<Slot>; SLOT_COUNT]; 8] = [
    //  0   1   2   3   4   5   6   7   8   9  10  11
    [  TL, BL, TR, BR, FL, FR, CL, CR, TC, CC, BC, FC ], // 0: no centering
    [  TC, BC, __, __, FL, FR, CC, __, __, __, __, FC ], // 1: center x
    [  CL, __, CR, __, FL, FR, __, __, CC, __, __, FC ], // 2: center y
    [  CC, __, __, __, FL, FR, __, __, __, __, __, FC ], // 3: center x & y
    [  TL, BL, TR, BR, FC, __, CL, CR, TC, CC, BC, __ ], // 4: center front (default)
    [  TC, BC, __, __, FC, __, CC, __, __, __, __, __ ], // 5: center front & x
    [  CL, __, CR, __, FC, __, __, __, CC, __, __, __ ], // 6: center front & y
    [  CC, __, __, __, FC, __, __, __, __, __, __, __ ], // 7: center front & x & y
];

/// Canonical slot for serialized position `serialized` under alignment `align`.
///
/// Only the low three bits of `align` are meaningful; `None` means the serialized entry is
/// not displayed in that mode.
pub fn canonical_slot(align: u8, serialized: usize) -> Option<Slot> {
    REORDER_TABLE[usize::from(align & 7)]
        .get(serialized)
        .copied()
        .flatten()
}

/// Remaps a serialized, sparse list into canonical slot order.
///
/// Absent entries stay absent; entries whose column is unused for `align`, or that lie past
/// the last slot, are dropped.
pub fn reorder<T, I>(entries: I, align: u8) -> [Option<T>; SLOT_COUNT]
where
    I: IntoIterator<Item = Option<T>>,
{
    let mut out: [Option<T>; SLOT_COUNT] = Default::default();
    for (i, entry) in entries.into_iter().enumerate() {
        let Some(value) = entry else {
            continue;
        };
        if let Some(slot) = canonical_slot(align, i) {
            out[slot.index()] = Some(value);
        }
    }
    out
}
