/// Compact motif-id sets for candidate tracking
pub mod bitset;
/// Connector-based neighbour compatibility
pub mod compatibility;
/// Reflection of a quadrant into a full grid
pub mod composition;
/// Generation pipeline, configuration and random selection
pub mod executor;
/// Shared static rule tables
pub mod rules;
/// Randomized quadrant synthesis
pub mod synthesis;
