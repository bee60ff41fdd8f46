// Domain layer: lead and content models plus the ports the flow talks through.

pub mod content;
pub mod model;
pub mod ports;
