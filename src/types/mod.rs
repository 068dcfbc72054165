//! Core value types shared by the code streams and the dictionary engine

mod code;
mod strategy;

pub use code::{
    bit_length, Code, CodeWidth, DEFAULT_MAX_CODE, EOF_CODE, FIRST_DYNAMIC_CODE, LITERAL_CODES,
};
pub use strategy::CodeStreamKind;
