//! Crew teams and shift slot codes.

use std::fmt;

use serde::Serialize;

/// One of the four rotating crews.
///
/// The international scheme rotates all four; the domestic scheme alternates
/// `A` and `B` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    A,
    B,
    C,
    D,
}

impl Team {
    /// All teams, in rotation order.
    pub const ALL: [Team; 4] = [Team::A, Team::B, Team::C, Team::D];

    /// Starting offset of this team into the 8-state international cycle.
    ///
    /// Offsets are spaced two states apart, so on every row exactly one
    /// team lands in each of the four shift slots.
    pub(crate) fn cycle_offset(self) -> u32 {
        match self {
            Team::A => 0,
            Team::B => 2,
            Team::C => 4,
            Team::D => 6,
        }
    }

    /// Single-letter crew label.
    pub fn label(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
            Team::C => "C",
            Team::D => "D",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shift slot codes in roster column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShiftCode {
    /// Morning shift, 06:00-14:00.
    Morning,
    /// Evening shift, 14:00-22:00.
    Evening,
    /// Night shift, 22:00-06:00.
    Night,
    /// Off day.
    Off,
}

impl ShiftCode {
    /// All slot codes, in roster column order.
    pub const ALL: [ShiftCode; 4] = [
        ShiftCode::Morning,
        ShiftCode::Evening,
        ShiftCode::Night,
        ShiftCode::Off,
    ];

    /// Single-letter column header.
    pub fn letter(self) -> char {
        match self {
            ShiftCode::Morning => 'M',
            ShiftCode::Evening => 'E',
            ShiftCode::Night => 'N',
            ShiftCode::Off => 'O',
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
