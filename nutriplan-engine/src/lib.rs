pub mod catalog;
pub mod composer;
pub mod energy;
pub mod params;
pub mod targets;
