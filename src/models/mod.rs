pub mod event;
pub mod registration;

pub use event::{Event, EventData, EventPatch, NewEvent};
pub use registration::{ContactInfo, NewPersonalInfo, PersonalInfo, Registration};
