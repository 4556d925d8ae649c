mod case;
pub use case::*;

mod session_note;
pub use session_note::*;

mod goal;
pub use goal::*;

mod resource;
pub use resource::*;
