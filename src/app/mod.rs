// Interactive surface: console I/O, table rendering and the menu loop.

pub mod console;
pub mod display;
pub mod session;
