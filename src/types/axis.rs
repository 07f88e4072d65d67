use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four independent bipolar dimensions measured by the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Energy,
    Action,
    Cognition,
    Control,
}

impl Axis {
    /// Canonical authoring order of the bank.
    pub const ALL: [Axis; 4] = [Axis::Energy, Axis::Action, Axis::Cognition, Axis::Control];

    /// The two poles of this axis, first-listed pole first.
    ///
    /// | axis      | letters |
    /// |-----------|---------|
    /// | energy    | I, E    |
    /// | action    | S, T    |
    /// | cognition | R, X    |
    /// | control   | D, C    |
    pub const fn letters(self) -> (Letter, Letter) {
        match self {
            Axis::Energy => (Letter::I, Letter::E),
            Axis::Action => (Letter::S, Letter::T),
            Axis::Cognition => (Letter::R, Letter::X),
            Axis::Control => (Letter::D, Letter::C),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Energy => "energy",
            Axis::Action => "action",
            Axis::Cognition => "cognition",
            Axis::Control => "control",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single pole of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    I,
    E,
    S,
    T,
    R,
    X,
    D,
    C,
}

impl Letter {
    pub const fn axis(self) -> Axis {
        match self {
            Letter::I | Letter::E => Axis::Energy,
            Letter::S | Letter::T => Axis::Action,
            Letter::R | Letter::X => Axis::Cognition,
            Letter::D | Letter::C => Axis::Control,
        }
    }

    /// The partner pole on the same axis. Total and involutive.
    pub const fn opposite(self) -> Letter {
        match self {
            Letter::I => Letter::E,
            Letter::E => Letter::I,
            Letter::S => Letter::T,
            Letter::T => Letter::S,
            Letter::R => Letter::X,
            Letter::X => Letter::R,
            Letter::D => Letter::C,
            Letter::C => Letter::D,
        }
    }

    /// Whether this is the first-listed pole of its axis (I, S, R, D).
    pub const fn is_first(self) -> bool {
        matches!(self, Letter::I | Letter::S | Letter::R | Letter::D)
    }

    pub const fn as_char(self) -> char {
        match self {
            Letter::I => 'I',
            Letter::E => 'E',
            Letter::S => 'S',
            Letter::T => 'T',
            Letter::R => 'R',
            Letter::X => 'X',
            Letter::D => 'D',
            Letter::C => 'C',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
