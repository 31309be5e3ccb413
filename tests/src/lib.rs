//! End-to-end checks of the inventory build against scratch directories.

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod utils;
