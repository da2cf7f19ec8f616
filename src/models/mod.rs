pub use component::*;
pub use page::*;
pub use published::*;
pub use section::*;
pub use settings::*;
pub use template::*;
pub use template_status::*;
pub use theme::*;
pub use version::*;

mod component;
mod page;
mod published;
mod section;
mod settings;
mod template;
mod template_status;
mod theme;
mod version;
