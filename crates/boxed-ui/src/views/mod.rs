pub mod frame;
pub mod settings;
pub mod shell;
pub mod window_deco;

pub use shell::ShellView;
