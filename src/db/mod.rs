pub use access::Access;
pub use db::*;

mod access;
mod codec;
mod db;
mod pages;
mod site_templates;
mod versions;
