pub mod command;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod session;
pub mod storage;
pub mod tasklist;
pub mod ui;

pub use command::Command;
pub use error::{DownyError, Result};
pub use model::{Task, TaskKind};
pub use tasklist::TaskList;
