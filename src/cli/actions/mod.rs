pub mod check;
pub mod export;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Check {
        globals: GlobalArgs,
    },
    Export {
        globals: GlobalArgs,
        collection: export::Collection,
    },
}
