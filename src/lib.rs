//! Walk a network of left/right nodes along a cyclic direction tape.
//!
//! Layers, leaf first:
//! - [`domain`]: graph arena, name patterns, traversal engine
//! - [`application`]: line loader and the navigation service
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing, dispatch and console output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

#[cfg(test)]
mod tests {
    use crate::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }
}
