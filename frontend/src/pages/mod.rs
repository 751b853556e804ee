pub mod stage;

// `self::` keeps this apart from the `stage` crate
pub use self::stage::{Stage, StageProps};
