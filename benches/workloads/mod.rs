pub mod bursts;
pub mod growth;
