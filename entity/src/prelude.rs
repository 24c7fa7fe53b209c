pub use super::activity::Entity as Activity;
pub use super::flight::Entity as Flight;
pub use super::trip::Entity as Trip;
