pub mod amap;
pub mod config;
pub mod deepseek;
pub mod upstream;
