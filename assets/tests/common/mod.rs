// Not every helper is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod mock_storage;
pub use mock_storage::*;
mod test_setup;
pub use test_setup::*;
