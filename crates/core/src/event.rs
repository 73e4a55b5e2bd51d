/// Domain event emitted by an aggregate.
///
/// Events describe what happened (e.g. "ItemAdded"), as opposed to commands,
/// which describe intent. `event_type` is a stable dotted name used in logs.
pub trait Event: Clone + core::fmt::Debug {
    fn event_type(&self) -> &'static str;
}
