pub mod pointer;

pub use pointer::{wire_char_hover, wire_pointer_handlers, wire_resize, InputWiring};
