//! The concrete converter family
//!
//! Each converter encodes one format-sensitive transformation between two
//! point sets. Leniency is deliberately per-converter and must stay that
//! way: some degrade to identity on malformed input (bit strings), most
//! soft-fail to null, one regenerates a value (uuid text), and one hard-fails
//! an unsupported direction (object to text).

mod binary;
mod boolean;
mod bytes;
mod number;
mod object;
mod temporal;
mod uuid;

pub use binary::BinaryTextToText;
pub use boolean::{BooleanToNumber, BooleanToText};
pub use bytes::{BytesToBinaryText, BytesToText};
pub use number::NumberToText;
pub use object::{ObjectToJsonText, ObjectToText};
pub use temporal::{
    DateToText, DateToTimestamp, TimeToText, TimeToTimestamp, TimestampToNumber,
    TimestampToTemporal, TimestampToText, TimestampToTimestampTz, TimestampTzToText,
};
pub use uuid::{StringUuidToText, UuidToText};
