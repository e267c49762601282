pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_modal_handlers, wire_section_hover, ModalWiring};
