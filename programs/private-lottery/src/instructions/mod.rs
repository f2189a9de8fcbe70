pub mod admin;
pub mod commit_draw;
pub mod donate;
pub mod draw_winner;
pub mod enter;
pub mod initialize;

pub use admin::*;
pub use commit_draw::*;
pub use donate::*;
pub use draw_winner::*;
pub use enter::*;
pub use initialize::*;
