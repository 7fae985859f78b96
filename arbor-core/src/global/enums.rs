/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Global enums shared across the Arbor class API.

/// Error codes returned by many Arbor functions.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Error {
    ord: i32,
}

impl Error {
    /// Successful result, no error.
    pub const OK: Error = Error { ord: 0 };

    /// Generic failure.
    pub const FAILED: Error = Error { ord: 1 };

    /// The requested operation is unsupported or unavailable.
    pub const ERR_UNAVAILABLE: Error = Error { ord: 2 };

    /// The object hasn't been set up properly.
    pub const ERR_UNCONFIGURED: Error = Error { ord: 3 };

    /// Missing credentials for the requested resource.
    pub const ERR_UNAUTHORIZED: Error = Error { ord: 4 };

    /// Parameter out of the allowed range.
    pub const ERR_PARAMETER_RANGE_ERROR: Error = Error { ord: 5 };

    /// The engine ran out of memory.
    pub const ERR_OUT_OF_MEMORY: Error = Error { ord: 6 };

    pub const ERR_FILE_NOT_FOUND: Error = Error { ord: 7 };

    pub const ERR_FILE_CANT_OPEN: Error = Error { ord: 8 };

    pub const ERR_FILE_CANT_READ: Error = Error { ord: 9 };

    /// The file is of an unrecognized format.
    pub const ERR_FILE_UNRECOGNIZED: Error = Error { ord: 10 };

    pub const ERR_INVALID_DATA: Error = Error { ord: 11 };

    pub const ERR_INVALID_PARAMETER: Error = Error { ord: 12 };

    pub const ERR_DOES_NOT_EXIST: Error = Error { ord: 13 };

    /// The requested method doesn't exist on the object.
    pub const ERR_METHOD_NOT_FOUND: Error = Error { ord: 14 };

    /// Bug in the engine; should never be returned by a correct build.
    pub const ERR_BUG: Error = Error { ord: 15 };
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::OK => "OK",
            Self::FAILED => "FAILED",
            Self::ERR_UNAVAILABLE => "ERR_UNAVAILABLE",
            Self::ERR_UNCONFIGURED => "ERR_UNCONFIGURED",
            Self::ERR_UNAUTHORIZED => "ERR_UNAUTHORIZED",
            Self::ERR_PARAMETER_RANGE_ERROR => "ERR_PARAMETER_RANGE_ERROR",
            Self::ERR_OUT_OF_MEMORY => "ERR_OUT_OF_MEMORY",
            Self::ERR_FILE_NOT_FOUND => "ERR_FILE_NOT_FOUND",
            Self::ERR_FILE_CANT_OPEN => "ERR_FILE_CANT_OPEN",
            Self::ERR_FILE_CANT_READ => "ERR_FILE_CANT_READ",
            Self::ERR_FILE_UNRECOGNIZED => "ERR_FILE_UNRECOGNIZED",
            Self::ERR_INVALID_DATA => "ERR_INVALID_DATA",
            Self::ERR_INVALID_PARAMETER => "ERR_INVALID_PARAMETER",
            Self::ERR_DOES_NOT_EXIST => "ERR_DOES_NOT_EXIST",
            Self::ERR_METHOD_NOT_FOUND => "ERR_METHOD_NOT_FOUND",
            Self::ERR_BUG => "ERR_BUG",
            _ => {
                f.debug_struct("Error").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for Error {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0..=15) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::OK => "OK",
            Self::FAILED => "FAILED",
            Self::ERR_UNAVAILABLE => "ERR_UNAVAILABLE",
            Self::ERR_UNCONFIGURED => "ERR_UNCONFIGURED",
            Self::ERR_UNAUTHORIZED => "ERR_UNAUTHORIZED",
            Self::ERR_PARAMETER_RANGE_ERROR => "ERR_PARAMETER_RANGE_ERROR",
            Self::ERR_OUT_OF_MEMORY => "ERR_OUT_OF_MEMORY",
            Self::ERR_FILE_NOT_FOUND => "ERR_FILE_NOT_FOUND",
            Self::ERR_FILE_CANT_OPEN => "ERR_FILE_CANT_OPEN",
            Self::ERR_FILE_CANT_READ => "ERR_FILE_CANT_READ",
            Self::ERR_FILE_UNRECOGNIZED => "ERR_FILE_UNRECOGNIZED",
            Self::ERR_INVALID_DATA => "ERR_INVALID_DATA",
            Self::ERR_INVALID_PARAMETER => "ERR_INVALID_PARAMETER",
            Self::ERR_DOES_NOT_EXIST => "ERR_DOES_NOT_EXIST",
            Self::ERR_METHOD_NOT_FOUND => "ERR_METHOD_NOT_FOUND",
            Self::ERR_BUG => "ERR_BUG",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for Error {
    type Via = i32;
}

impl crate::meta::ToArbor for Error {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for Error {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Keyboard keys, as used for menu accelerators.
///
/// Keys in the special range carry the [`Key::SPECIAL`] bit.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Key {
    ord: i32,
}

impl Key {
    pub const NONE: Key = Key { ord: 0 };

    pub const SPACE: Key = Key { ord: 32 };

    pub const A: Key = Key { ord: 65 };

    pub const C: Key = Key { ord: 67 };

    pub const S: Key = Key { ord: 83 };

    pub const V: Key = Key { ord: 86 };

    pub const X: Key = Key { ord: 88 };

    pub const Z: Key = Key { ord: 90 };

    /// Marker bit for keys without printable representation.
    pub const SPECIAL: Key = Key { ord: 1 << 22 };

    pub const ESCAPE: Key = Key { ord: (1 << 22) | 1 };

    pub const ENTER: Key = Key { ord: (1 << 22) | 2 };

    pub const DELETE: Key = Key { ord: (1 << 22) | 3 };
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::NONE => "NONE",
            Self::SPACE => "SPACE",
            Self::A => "A",
            Self::C => "C",
            Self::S => "S",
            Self::V => "V",
            Self::X => "X",
            Self::Z => "Z",
            Self::SPECIAL => "SPECIAL",
            Self::ESCAPE => "ESCAPE",
            Self::ENTER => "ENTER",
            Self::DELETE => "DELETE",
            _ => {
                f.debug_struct("Key").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for Key {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0 | 32 | 65 | 67 | 83 | 86 | 88 | 90) => Some(Self { ord }),
            ord @ (4194304..=4194307) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::NONE => "NONE",
            Self::SPACE => "SPACE",
            Self::A => "A",
            Self::C => "C",
            Self::S => "S",
            Self::V => "V",
            Self::X => "X",
            Self::Z => "Z",
            Self::SPECIAL => "SPECIAL",
            Self::ESCAPE => "ESCAPE",
            Self::ENTER => "ENTER",
            Self::DELETE => "DELETE",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for Key {
    type Via = i32;
}

impl crate::meta::ToArbor for Key {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for Key {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// The four sides of a rectangle, e.g. for camera limits.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Side {
    ord: i32,
}

impl Side {
    pub const LEFT: Side = Side { ord: 0 };

    pub const TOP: Side = Side { ord: 1 };

    pub const RIGHT: Side = Side { ord: 2 };

    pub const BOTTOM: Side = Side { ord: 3 };
}

impl std::fmt::Debug for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::LEFT => "LEFT",
            Self::TOP => "TOP",
            Self::RIGHT => "RIGHT",
            Self::BOTTOM => "BOTTOM",
            _ => {
                f.debug_struct("Side").field("ord", &self.ord).finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for Side {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0..=3) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::LEFT => "LEFT",
            Self::TOP => "TOP",
            Self::RIGHT => "RIGHT",
            Self::BOTTOM => "BOTTOM",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for Side {
    type Via = i32;
}

impl crate::meta::ToArbor for Side {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for Side {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Antialiasing modes for font rendering.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontAntialiasing {
    ord: i32,
}

impl FontAntialiasing {
    pub const NONE: FontAntialiasing = FontAntialiasing { ord: 0 };

    pub const GRAY: FontAntialiasing = FontAntialiasing { ord: 1 };

    pub const LCD: FontAntialiasing = FontAntialiasing { ord: 2 };
}

impl std::fmt::Debug for FontAntialiasing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Many enums have duplicates, thus allow unreachable.
        #[allow(unreachable_patterns)]
        let enumerator = match *self {
            Self::NONE => "NONE",
            Self::GRAY => "GRAY",
            Self::LCD => "LCD",
            _ => {
                f.debug_struct("FontAntialiasing")
                    .field("ord", &self.ord)
                    .finish()?;
                return Ok(());
            }
        };
        f.write_str(enumerator)
    }
}

impl crate::obj::EngineEnum for FontAntialiasing {
    fn try_from_ord(ord: i32) -> Option<Self> {
        match ord {
            ord @ (0..=2) => Some(Self { ord }),
            _ => None,
        }
    }

    fn ord(self) -> i32 {
        self.ord
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::NONE => "NONE",
            Self::GRAY => "GRAY",
            Self::LCD => "LCD",
            _ => "",
        }
    }
}

impl crate::meta::ArborConvert for FontAntialiasing {
    type Via = i32;
}

impl crate::meta::ToArbor for FontAntialiasing {
    fn to_arbor(&self) -> Self::Via {
        <Self as crate::obj::EngineEnum>::ord(*self)
    }
}

impl crate::meta::FromArbor for FontAntialiasing {
    fn try_from_arbor(via: Self::Via) -> Result<Self, crate::meta::error::ConvertError> {
        <Self as crate::obj::EngineEnum>::try_from_ord(via)
            .ok_or_else(|| crate::meta::error::FromArborError::InvalidEnum.into_error(via))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::EngineEnum;

    #[test]
    fn error_ord_round_trip() {
        for error in [Error::OK, Error::FAILED, Error::ERR_FILE_NOT_FOUND, Error::ERR_BUG] {
            assert_eq!(Error::try_from_ord(error.ord()), Some(error));
        }
        assert_eq!(Error::try_from_ord(-1), None);
        assert_eq!(Error::try_from_ord(10_000), None);
    }

    #[test]
    fn key_ord_round_trip() {
        for key in [Key::NONE, Key::SPACE, Key::A, Key::ESCAPE, Key::ENTER] {
            assert_eq!(Key::try_from_ord(key.ord()), Some(key));
        }
        assert_eq!(Key::try_from_ord(1), None);
    }

    #[test]
    fn special_keys_carry_the_special_bit() {
        assert_eq!(Key::ESCAPE.ord() & Key::SPECIAL.ord(), Key::SPECIAL.ord());
        assert_eq!(Key::A.ord() & Key::SPECIAL.ord(), 0);
    }

    #[test]
    fn side_covers_all_ordinals() {
        for ord in 0..4 {
            assert!(Side::try_from_ord(ord).is_some());
        }
        assert_eq!(Side::try_from_ord(4), None);
    }

    #[test]
    fn debug_uses_enumerator_name() {
        assert_eq!(format!("{:?}", Error::ERR_UNAVAILABLE), "ERR_UNAVAILABLE");
        assert_eq!(format!("{:?}", FontAntialiasing::LCD), "LCD");
    }
}
