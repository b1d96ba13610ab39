pub mod company;
pub mod delivery;
pub mod visitor;

pub use company::Company;
pub use delivery::{DeliveryItem, DeliveryStatus, DeliveryType};
pub use visitor::{Visitor, VisitorStatus};
