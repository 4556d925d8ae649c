pub mod case;
pub mod goal;
pub mod resource;
pub mod school;
pub mod session_note;
