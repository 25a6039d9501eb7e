//! Version command

/// Print the CLI version
pub fn execute() {
    println!("nugra CLI version: {}", env!("CARGO_PKG_VERSION"));
}
