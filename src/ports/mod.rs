/// Ports module defining interfaces for hexagonal architecture
///
/// The restore core only has driven ports: the advisory sources, the file
/// system and the console it reports to.
pub mod outbound;
