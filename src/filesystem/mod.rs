pub mod atomic;
pub mod scoped_dir;

pub use atomic::{append_line, write_atomic};
pub use scoped_dir::ScopedDir;
