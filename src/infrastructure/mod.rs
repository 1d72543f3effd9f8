pub mod directory;
pub mod logging;
pub mod seed;
pub mod storage;
