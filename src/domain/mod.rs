pub mod backing;
pub mod category;
pub mod error;
pub mod location;
pub mod photo;
pub mod project;
pub mod reward;
pub mod urls;
pub mod user;
pub mod video;

pub use backing::*;
pub use category::*;
pub use error::*;
pub use location::*;
pub use photo::*;
pub use project::*;
pub use reward::*;
pub use urls::*;
pub use user::*;
pub use video::*;
