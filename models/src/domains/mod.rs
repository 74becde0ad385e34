pub mod otp;
pub mod product;
