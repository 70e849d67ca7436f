// Application layer: wires page settings, the calculator and display together.

pub mod session;
