// libfelica/src/card/mod.rs

mod info;
pub use info::CardInfo;
