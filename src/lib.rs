pub mod utils {
    // Feature `cfg_file`
    #[cfg(feature = "cfg_file")]
    pub mod cfg_file {
        extern crate cfg_file;
        pub use cfg_file::*;
    }

    // Feature `string_proc`
    #[cfg(feature = "string_proc")]
    pub mod string_proc {
        extern crate string_proc;
        pub use string_proc::*;
    }
}

// Feature `string_proc`
#[cfg(feature = "string_proc")]
pub use string_proc::{CaseError, RawInput, Style, convert};
