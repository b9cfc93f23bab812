pub mod check_email;
pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod sanitize;
pub mod validate;
