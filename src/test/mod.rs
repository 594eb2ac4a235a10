mod bst;
mod linear;
mod replay;
mod sequencer;
mod session_spec;
