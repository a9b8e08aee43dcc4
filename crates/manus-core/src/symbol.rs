//! Symbol alphabet and classification results
//!
//! The recognizable repertoire is the letters A-Z plus SPACE and DELETE.
//! The static rule engine only ever produces a subset of the letters (the
//! motion letters J, K and Z have no static pose); DELETE exists for the
//! text layer, which treats it as backspace.

use std::fmt;

use crate::ManusError;

/// One output symbol of the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Space,
    Delete,
}

impl Symbol {
    /// String label, matching the emitted event vocabulary
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
            Symbol::E => "E",
            Symbol::F => "F",
            Symbol::G => "G",
            Symbol::H => "H",
            Symbol::I => "I",
            Symbol::J => "J",
            Symbol::K => "K",
            Symbol::L => "L",
            Symbol::M => "M",
            Symbol::N => "N",
            Symbol::O => "O",
            Symbol::P => "P",
            Symbol::Q => "Q",
            Symbol::R => "R",
            Symbol::S => "S",
            Symbol::T => "T",
            Symbol::U => "U",
            Symbol::V => "V",
            Symbol::W => "W",
            Symbol::X => "X",
            Symbol::Y => "Y",
            Symbol::Z => "Z",
            Symbol::Space => "SPACE",
            Symbol::Delete => "DELETE",
        }
    }

    /// Is this a letter (vs a control symbol)?
    pub fn is_letter(&self) -> bool {
        !matches!(self, Symbol::Space | Symbol::Delete)
    }

    /// The character this symbol contributes to composed text.
    /// DELETE has no character of its own; it removes one.
    pub fn to_char(&self) -> Option<char> {
        match self {
            Symbol::Space => Some(' '),
            Symbol::Delete => None,
            letter => letter.as_str().chars().next(),
        }
    }

    /// Parse a letter from its uppercase character
    pub fn from_char(c: char) -> Result<Self, ManusError> {
        match c {
            'A' => Ok(Symbol::A),
            'B' => Ok(Symbol::B),
            'C' => Ok(Symbol::C),
            'D' => Ok(Symbol::D),
            'E' => Ok(Symbol::E),
            'F' => Ok(Symbol::F),
            'G' => Ok(Symbol::G),
            'H' => Ok(Symbol::H),
            'I' => Ok(Symbol::I),
            'J' => Ok(Symbol::J),
            'K' => Ok(Symbol::K),
            'L' => Ok(Symbol::L),
            'M' => Ok(Symbol::M),
            'N' => Ok(Symbol::N),
            'O' => Ok(Symbol::O),
            'P' => Ok(Symbol::P),
            'Q' => Ok(Symbol::Q),
            'R' => Ok(Symbol::R),
            'S' => Ok(Symbol::S),
            'T' => Ok(Symbol::T),
            'U' => Ok(Symbol::U),
            'V' => Ok(Symbol::V),
            'W' => Ok(Symbol::W),
            'X' => Ok(Symbol::X),
            'Y' => Ok(Symbol::Y),
            'Z' => Ok(Symbol::Z),
            ' ' => Ok(Symbol::Space),
            _ => Err(ManusError::InvalidSymbol(c)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single frame
///
/// `symbol == None` means the pose is outside the repertoire (UNKNOWN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub symbol: Option<Symbol>,
    pub confidence: f32,
}

impl Classification {
    /// Confidence reported for unrecognized poses
    pub const UNKNOWN_CONFIDENCE: f32 = 0.3;

    pub fn new(symbol: Symbol, confidence: f32) -> Self {
        Self {
            symbol: Some(symbol),
            confidence,
        }
    }

    /// The UNKNOWN result
    pub fn unknown() -> Self {
        Self {
            symbol: None,
            confidence: Self::UNKNOWN_CONFIDENCE,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.symbol.is_none()
    }
}

/// A confirmed, debounced recognition event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolEvent {
    pub symbol: Symbol,
    /// Mean confidence of the winning symbol's window occurrences
    pub confidence: f32,
}

impl SymbolEvent {
    pub fn new(symbol: Symbol, confidence: f32) -> Self {
        Self { symbol, confidence }
    }
}
