#[cfg(test)]
pub mod test_kebab_case;


#[cfg(test)]
pub mod test_invalid_input;

#[cfg(test)]
pub mod test_properties;

#[cfg(test)]
pub mod test_thread_safety;

pub mod test_utils;
pub use test_utils::*;
