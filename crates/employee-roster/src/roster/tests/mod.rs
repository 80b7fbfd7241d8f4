mod common;
mod shared;
