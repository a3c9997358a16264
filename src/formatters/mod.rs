pub mod html;
pub mod page;
pub mod stylesheet;

pub use html::HtmlFormatter;
pub use page::{RegionView, SelectOption};
pub use stylesheet::STYLESHEET;
