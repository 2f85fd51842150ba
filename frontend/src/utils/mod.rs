pub mod device;
pub mod dom;
pub mod format;
pub mod timing;
