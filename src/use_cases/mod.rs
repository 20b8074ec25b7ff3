// Use cases layer: client-side state machines and session workflows.

pub mod input;
pub mod phase;
pub mod render;
pub mod session;
pub mod types;

pub use input::InputStateMachine;
pub use phase::{Phase, PhaseController};
pub use render::{PostureIcons, SideProjection, UiProjection, project};
pub use session::SessionContext;
pub use types::{ChatCommand, ChatLine, OutboundFrame};
