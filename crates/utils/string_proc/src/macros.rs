#[macro_export]
macro_rules! camel_case {
    ($input:expr) => {{ $crate::converter::convert($input, $crate::style::Style::Camel) }};
}

#[macro_export]
macro_rules! kebab_case {
    ($input:expr) => {{ $crate::converter::convert($input, $crate::style::Style::Kebab) }};
}

#[macro_export]
macro_rules! dot_case {
    ($input:expr) => {{ $crate::converter::convert($input, $crate::style::Style::Dot) }};
}

#[macro_export]
macro_rules! pascal_case {
    ($input:expr) => {{ $crate::converter::convert($input, $crate::style::Style::Pascal) }};
}

#[macro_export]
macro_rules! snake_case {
    ($input:expr) => {{ $crate::converter::convert($input, $crate::style::Style::Snake) }};
}
