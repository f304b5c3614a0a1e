pub mod columns;
pub mod dispatch;
pub mod replay;
pub mod shared;
pub mod show;
