use cfg_file::error::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Case file error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0} case(s) did not match their expectation")]
    Mismatch(usize),
}
