/// Marker trait for intents: user actions (selecting a universe) and system
/// events (a fetch resolving or failing).
pub trait Intent: Send + 'static {}
