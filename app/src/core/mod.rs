mod otp;

pub use otp::*;
