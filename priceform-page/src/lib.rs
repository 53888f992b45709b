pub mod controller;
pub mod logging;
pub mod memory;
pub mod page;

pub use controller::{FormEvent, PriceFormController, SubmitOutcome};
pub use memory::MemoryPage;
pub use page::{ContainerId, ContainerKind, ContainerResolver, ControlRole, FormPage};
