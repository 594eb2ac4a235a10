pub mod graph;
pub mod linear;
pub mod recursion;
pub mod seq;
pub mod session;
pub mod sort;
pub mod tree;

#[cfg(test)]
mod test;
