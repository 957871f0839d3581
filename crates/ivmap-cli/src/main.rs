//! Entry point for the ivmap command-line driver

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod entry;
mod script;
mod self_check;

mod prelude {
    #![expect(unused_imports, reason = "Some exports may not yet be used")]

    pub use std::{
        fs::File,
        io::{self, prelude::*},
        path::PathBuf,
    };

    pub use anyhow::{Context as _, Error, anyhow, ensure};
    pub use ivmap::IntervalMap;
    pub use tracing::{debug, error, info, trace, warn};
    pub use tracing_subscriber::prelude::*;

    pub type Result<T = (), E = Error> = std::result::Result<T, E>;
}

fn main() { entry::main(); }
