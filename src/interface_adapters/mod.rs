// Interface adapters: wire protocol, presentation seam and the socket loop.

pub mod net;
pub mod presentation;
pub mod protocol;
